//! # carton-config
//!
//! Layered configuration loading for Carton using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CARTON_` prefix, `__` as separator)
//! 2. Project-level `.carton/config.toml`
//! 3. User-level `~/.config/carton/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CARTON_SHARED__PATH` -> `shared.path` and
//! `CARTON_EXPORT__SCHEMA_PATH` -> `export.schema_path`.
//!
//! # Usage
//!
//! ```no_run
//! use carton_config::CartonConfig;
//!
//! let config = CartonConfig::load_with_dotenv().expect("config");
//! let paths = config.shared.export_paths().expect("export paths");
//! println!("exports staged under {}", paths.storage_root().display());
//! ```

mod error;
mod export;
mod shared;

pub use error::ConfigError;
pub use export::ExportConfig;
pub use shared::SharedConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every Carton setting.
pub const ENV_PREFIX: &str = "CARTON_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CartonConfig {
    #[serde(default)]
    pub shared: SharedConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl CartonConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".carton/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("carton").join("config.toml"))
    }

    /// Load `.env` from the current directory or its ancestors.
    ///
    /// Silently does nothing if no `.env` is found. Variables already set in
    /// the process environment are not overwritten.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
