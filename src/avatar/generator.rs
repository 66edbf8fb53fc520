use super::{
    color::{pick, HexColor, Palette},
    descriptor::AvatarDescriptor,
    error::AvatarError,
    hash::{bool_at, seed, unit},
    SIZE,
};

/// Derive the avatar for `name` from `colors`.
///
/// The result depends only on the arguments. An empty `colors` slice is rejected
/// with [`AvatarError::InvalidPalette`].
pub fn generate(name: &str, colors: &[HexColor]) -> Result<AvatarDescriptor, AvatarError> {
    if colors.is_empty() {
        return Err(AvatarError::InvalidPalette);
    }

    Ok(derive(seed(name), colors))
}

impl Palette {
    /// Same as [`generate`], infallible because a palette is never empty.
    pub fn generate(&self, name: &str) -> AvatarDescriptor {
        derive(seed(name), self.colors())
    }
}

/// `colors` must be non-empty.
fn derive(seed: u32, colors: &[HexColor]) -> AvatarDescriptor {
    let size = SIZE as i32;

    let wrapper_color = pick(seed, colors);
    let wrapper_translate_x = shift_off_center(unit(seed, 10, Some(1)), size);
    let wrapper_translate_y = shift_off_center(unit(seed, 10, Some(2)), size);

    AvatarDescriptor {
        wrapper_color,
        face_color: wrapper_color.contrast(),
        // seed <= 2^31, no overflow
        background_color: pick(seed + 13, colors),
        wrapper_translate_x,
        wrapper_translate_y,
        wrapper_rotate: unit(seed, 360, None),
        wrapper_scale: 1.0 + f64::from(unit(seed, SIZE / 12, None)) / 10.0,
        is_mouth_open: bool_at(seed, 2),
        is_circle: bool_at(seed, 1),
        eye_spread: unit(seed, 5, None),
        mouth_spread: unit(seed, 3, None),
        face_rotate: unit(seed, 10, Some(3)),
        face_translate_x: follow_wrapper(wrapper_translate_x, size, unit(seed, 8, Some(1))),
        face_translate_y: follow_wrapper(wrapper_translate_y, size, unit(seed, 7, Some(2))),
    }
}

/// Small offsets get pushed by `S/9` so the wrapper never sits dead center.
fn shift_off_center(offset: i32, size: i32) -> i32 {
    if offset < 5 {
        offset + size / 9
    } else {
        offset
    }
}

/// A face on a far-shifted wrapper moves half as far, otherwise it takes its own offset.
fn follow_wrapper(wrapper_offset: i32, size: i32, own_offset: i32) -> f64 {
    if wrapper_offset > size / 6 {
        f64::from(wrapper_offset) / 2.0
    } else {
        f64::from(own_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::default()
    }

    fn color(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    #[test]
    fn fido_regression() {
        let avatar = generate("Fido", palette().colors()).unwrap();

        assert_eq!(
            avatar,
            AvatarDescriptor {
                wrapper_color: color("#146A7C"),
                face_color: color("#FFFFFF"),
                background_color: color("#C20D90"),
                wrapper_translate_x: -2,
                wrapper_translate_y: -2,
                wrapper_rotate: 326,
                wrapper_scale: 1.2,
                is_mouth_open: true,
                is_circle: true,
                eye_spread: 1,
                mouth_spread: 2,
                face_rotate: 6,
                face_translate_x: -6.0,
                face_translate_y: -5.0,
            }
        );
    }

    #[test]
    fn rex_regression() {
        let avatar = generate("Rex", palette().colors()).unwrap();

        assert_eq!(avatar.wrapper_color, color("#C271B4"));
        assert_eq!(avatar.face_color, HexColor::BLACK);
        assert_eq!(avatar.background_color, color("#146A7C"));
        assert_eq!(avatar.wrapper_translate_x, 7);
        assert_eq!(avatar.wrapper_translate_y, 1);
        assert_eq!(avatar.wrapper_rotate, 333);
        assert_eq!(avatar.wrapper_scale, 1.0);
        assert!(avatar.is_mouth_open);
        assert!(!avatar.is_circle);
        assert_eq!(avatar.eye_spread, 3);
        assert_eq!(avatar.mouth_spread, 0);
        assert_eq!(avatar.face_rotate, -3);
        // wrapper shifted past S/6, face follows at half distance
        assert_eq!(avatar.face_translate_x, 3.5);
        assert_eq!(avatar.face_translate_y, -6.0);
    }

    #[test]
    fn empty_name_uses_zero_seed() {
        let avatar = generate("", palette().colors()).unwrap();

        assert_eq!(avatar.wrapper_color, color("#92A1C6"));
        assert_eq!(avatar.background_color, color("#C271B4"));
        assert_eq!(avatar.wrapper_translate_x, 4);
        assert_eq!(avatar.wrapper_translate_y, 4);
        assert_eq!(avatar.wrapper_rotate, 0);
        assert_eq!(avatar.wrapper_scale, 1.0);
        assert!(avatar.is_mouth_open);
        assert!(avatar.is_circle);
        assert_eq!(avatar.face_rotate, 0);
        assert_eq!(avatar.face_translate_x, 0.0);
        assert_eq!(avatar.face_translate_y, 0.0);
    }

    #[test]
    fn closed_mouth_and_square() {
        let avatar = generate("Bella", palette().colors()).unwrap();

        assert!(!avatar.is_mouth_open);
        assert!(!avatar.is_circle);
        assert_eq!(avatar.face_translate_x, 6.0);
        assert_eq!(avatar.face_translate_y, 2.0);
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert_eq!(generate("Fido", &[]), Err(AvatarError::InvalidPalette));
        assert_eq!(generate("", &[]), Err(AvatarError::InvalidPalette));
    }

    #[test]
    fn single_color_palette() {
        let only = color("#000000");
        let avatar = generate("Fido", &[only]).unwrap();

        assert_eq!(avatar.wrapper_color, only);
        assert_eq!(avatar.background_color, only);
        assert_eq!(avatar.face_color, HexColor::WHITE);
    }

    #[test]
    fn palette_generate_matches_free_function() {
        let palette = palette();
        for name in ["Fido", "Rex", "", "Whiskers", "🐶"] {
            assert_eq!(
                palette.generate(name),
                generate(name, palette.colors()).unwrap()
            );
        }
    }

    #[test]
    fn distinct_names_give_distinct_avatars() {
        let palette = palette();
        assert_ne!(palette.generate("Fido"), palette.generate("Rex"));
        assert_ne!(palette.generate("Luna"), palette.generate("Lunb"));
    }
}
