//! # kosei-config
//!
//! Layered configuration loading for kosei using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KOSEI_*` prefix, `__` as separator)
//! 2. Project-level `.kosei/config.toml`
//! 3. User-level `~/.config/kosei/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KOSEI_SERVICE__ENDPOINT` -> `service.endpoint`,
//! `KOSEI_PROGRESS__TICK_INTERVAL_MS` -> `progress.tick_interval_ms`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use kosei_config::KoseiConfig;
//!
//! let config = KoseiConfig::load_with_dotenv().expect("config");
//! println!("reviewing via {}", config.service.endpoint);
//! ```

mod error;
mod progress;
mod service;

pub use error::ConfigError;
pub use progress::ProgressConfig;
pub use service::{DEFAULT_ENDPOINT, ServiceConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KoseiConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
}

impl KoseiConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".kosei/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("KOSEI_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.service.endpoint_url()?;
        self.progress.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kosei").join("config.toml"))
    }
}
