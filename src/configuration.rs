//! Runtime settings.
//!
//! Defaults are overlaid with `TRIVIA__*` environment variables, using `__` between nested keys,
//! e.g. `TRIVIA__APPLICATION__PORT=3000` or `TRIVIA__DATABASE__PATH=/var/lib/trivia.db`.
//! A `.env` file in the working directory is loaded first when present.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub path: PathBuf,
    pub create_if_missing: bool,
}

impl Settings {
    pub fn load() -> Result<Settings, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_env(Environment::with_prefix("TRIVIA"))
    }

    fn from_env(env: Environment) -> Result<Settings, ConfigError> {
        Config::builder()
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 8080)?
            .set_default("database.path", "trivia.db")?
            .set_default("database.create_if_missing", true)?
            .add_source(env.prefix_separator("__").separator("__"))
            .build()?
            .try_deserialize()
    }
}
