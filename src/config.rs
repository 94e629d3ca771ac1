use anyhow::Result;
use figment::{providers::{Env, Format, Serialized, Toml}, Figment};
use serde::{Deserialize, Serialize};

/// Fixed endpoint every burst is aimed at.
pub const TARGET_URL: &str = "http://localhost:4444";

/// Optional file merged over the compiled defaults.
pub const CONFIG_FILE: &str = "loadburst.toml";

/// Diagnostics settings only. The target and request count are not configurable.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Used when RUST_LOG is not set
    pub filter: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn,hyper=warn,reqwest=warn".to_string(),
            json: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("LOADBURST_").split("__"));
        Ok(figment.extract()?)
    }
}
