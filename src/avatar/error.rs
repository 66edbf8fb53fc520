use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvatarError {
    #[error("palette must contain at least one color")]
    InvalidPalette,

    #[error("`{0}` is not a #RRGGBB color")]
    InvalidColor(String),
}
