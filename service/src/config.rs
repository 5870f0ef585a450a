use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub concurrency: ConcurrencyConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConcurrencyConfig {
    /// Limits concurrent sheet generation to keep memory bounded.
    pub max_sync_requests: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Top-down y past which the testimonials block is omitted.
    pub page_bottom_cutoff: f32,
}

impl Config {
    /// Loads `config/default.toml` when present, then layers
    /// `CARESHEET__`-prefixed environment variables on top. Every key has a
    /// default so the service starts without any config file.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("concurrency.max_sync_requests", 8)?
            .set_default("layout.page_bottom_cutoff", 750.0)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("CARESHEET").separator("__"))
            .build()?
            .try_deserialize()
    }
}
