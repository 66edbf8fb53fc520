use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::error::AvatarError;

pub static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9a-fA-F]{6}$").unwrap());

const DEFAULT_PALETTE: [HexColor; 5] = [
    HexColor::new(0x92, 0xA1, 0xC6),
    HexColor::new(0x14, 0x6A, 0x7C),
    HexColor::new(0xF0, 0xAB, 0x3D),
    HexColor::new(0xC2, 0x71, 0xB4),
    HexColor::new(0xC2, 0x0D, 0x90),
];

/// An opaque sRGB color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 3]);

impl HexColor {
    pub const BLACK: HexColor = HexColor::new(0x00, 0x00, 0x00);
    pub const WHITE: HexColor = HexColor::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        HexColor([r, g, b])
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let [r, g, b] = self.0;
        (r, g, b)
    }

    /// YIQ luma scaled by 1000, `0..=255_000`.
    fn yiq_milli(&self) -> u32 {
        let [r, g, b] = self.0.map(u32::from);
        r * 299 + g * 587 + b * 114
    }

    /// Black on light colors, white on dark ones.
    pub fn contrast(&self) -> HexColor {
        if self.yiq_milli() >= 128_000 {
            HexColor::BLACK
        } else {
            HexColor::WHITE
        }
    }
}

impl FromStr for HexColor {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !HEX_COLOR_REGEX.is_match(s) {
            return Err(AvatarError::InvalidColor(s.to_string()));
        }

        let digits = s.trim_start_matches('#');
        let mut rgb = [0u8; 3];
        hex::decode_to_slice(digits, &mut rgb)
            .map_err(|_| AvatarError::InvalidColor(s.to_string()))?;

        Ok(HexColor(rgb))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode_upper(self.0))
    }
}

impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StrVisitor;

        impl de::Visitor<'_> for StrVisitor {
            type Value = HexColor;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a #RRGGBB color string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(StrVisitor)
    }
}

/// Ordered, non-empty list of candidate fill colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<HexColor>);

impl Palette {
    pub fn new(colors: Vec<HexColor>) -> Result<Self, AvatarError> {
        if colors.is_empty() {
            return Err(AvatarError::InvalidPalette);
        }

        Ok(Palette(colors))
    }

    pub fn colors(&self) -> &[HexColor] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette(DEFAULT_PALETTE.to_vec())
    }
}

impl FromStr for Palette {
    type Err = AvatarError;

    /// Comma separated, e.g. `#92A1C6, #146A7C`. Blank entries are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(HexColor::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        Palette::new(colors)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let colors = self
            .0
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{}", colors)
    }
}

/// `colors[n mod len]`. Callers guarantee `colors` is non-empty.
pub(crate) fn pick(n: u32, colors: &[HexColor]) -> HexColor {
    // u32 -> usize is lossless on every target we build for
    colors[n as usize % colors.len()]
}
