use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub airlines_path: String,
    pub airports_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_conversational_results")]
    pub conversational_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { conversational_results: default_conversational_results() }
    }
}

fn default_conversational_results() -> usize { 5 }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `FLIGHTDECK_SERVER__PORT=8080`
            .add_source(config::Environment::with_prefix("FLIGHTDECK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
