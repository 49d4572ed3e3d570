use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for the `catalog` binary.
///
/// Values come from `config/default.yaml`, then `config/local.yaml`, then
/// `CATALOG_*` environment variables, each layer overriding the previous.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", "catalog.db")?
            .set_default("log_level", "info")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("CATALOG"))
            .build()?
            .try_deserialize()
    }
}
