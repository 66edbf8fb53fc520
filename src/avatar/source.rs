/// Where an avatar comes from: an uploaded picture, or the generated fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarSource {
    Image(String),
    Generated(String),
}

impl AvatarSource {
    /// A non-blank `avatar_url` wins over the generated avatar for `name`.
    pub fn resolve(name: &str, avatar_url: Option<&str>) -> Self {
        match avatar_url.map(str::trim) {
            Some(url) if !url.is_empty() => AvatarSource::Image(url.to_string()),
            _ => AvatarSource::Generated(name.to_string()),
        }
    }
}
