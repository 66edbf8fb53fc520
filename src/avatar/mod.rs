//! Deterministic avatars derived from a display name.
//!
//! Every visual parameter is a function of a 32-bit hash of the name and the palette,
//! so the same inputs produce the same avatar on every call and every machine.

pub mod color;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod hash;
pub mod render;
pub mod source;

pub use color::{HexColor, Palette};
pub use descriptor::AvatarDescriptor;
pub use error::AvatarError;
pub use generator::generate;
pub use render::{render_svg, RenderOptions};
pub use source::AvatarSource;

/// Side of the square canvas, in SVG user units.
pub const SIZE: u32 = 36;
