mod basic;
mod listing;
mod web;

pub use basic::BasicConfig;
pub use listing::{DecodeErrorPolicy, ListingConfig};
pub use web::WebConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error as ThisError;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Static file tree and SPA root document (see `web` table).
    #[serde(default)]
    pub web: WebConfig,

    /// Collection listing behaviour (see `listing` table).
    #[serde(default)]
    pub listing: ListingConfig,
}

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("basic.database_url must be set and non-empty")]
    MissingDatabaseUrl,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "PANTRY_";

impl Config {
    /// Builds a Figment that merges defaults, `config_file` if it exists, and
    /// `PANTRY_`-prefixed environment variables (`__` separates tables, e.g.
    /// `PANTRY_BASIC__DATABASE_URL`).
    pub fn figment_from(config_file: &Path) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if config_file.is_file() {
            figment = figment.merge(Toml::file(config_file));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads `config.toml` (if present) plus environment overrides and
    /// validates required fields.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    pub fn load_from(config_file: &Path) -> Result<Self, ConfigError> {
        let cfg: Self = Self::figment_from(config_file)
            .extract()
            .map_err(Box::new)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.basic.database_url.trim().is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        Ok(())
    }
}
