//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration for the HTTP server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

impl ServerConfig {
    /// Loads `config/default`, then the optional `config/{app_env}` profile,
    /// then `APP_*` environment variables, later sources overriding earlier.
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
