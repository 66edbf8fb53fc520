use serde::Serialize;
use utoipa::ToSchema;

use super::color::HexColor;

/// Everything a renderer needs to draw one avatar.
///
/// Built fresh by [`generate`](super::generate) and owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvatarDescriptor {
    #[schema(value_type = String, example = "#146A7C")]
    pub wrapper_color: HexColor,
    #[schema(value_type = String, example = "#FFFFFF")]
    pub face_color: HexColor,
    #[schema(value_type = String, example = "#C20D90")]
    pub background_color: HexColor,
    pub wrapper_translate_x: i32,
    pub wrapper_translate_y: i32,
    /// Degrees, `0..360`.
    pub wrapper_rotate: i32,
    pub wrapper_scale: f64,
    pub is_mouth_open: bool,
    pub is_circle: bool,
    pub eye_spread: i32,
    pub mouth_spread: i32,
    pub face_rotate: i32,
    pub face_translate_x: f64,
    pub face_translate_y: f64,
}
