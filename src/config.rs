use crate::avatar::Palette;

#[derive(clap::Parser, Debug, Clone)]
pub struct AppConfig {
    #[clap(long, env, value_enum, default_value_t = Stage::Dev)]
    pub stage: Stage,

    // App configs
    #[clap(long, env, default_value_t = 8000)]
    pub app_application_port: u16,

    #[clap(long, env, default_value = "127.0.0.1")]
    pub app_application_host: String,

    // Avatar configs
    /// Comma separated #RRGGBB colors used when a request brings no palette
    #[clap(long, env, default_value_t = Palette::default())]
    pub app_avatar_palette: Palette,

    /// Seconds clients and proxies may cache a rendered avatar
    #[clap(long, env, default_value_t = 86400)]
    pub app_avatar_cache_max_age: u32,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab_case")]
pub enum Stage {
    Dev,
    Prod,
}

impl Stage {
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Stage::Dev => "debug",
            Stage::Prod => "info",
        }
    }
}
