//! Application configuration schemas.
//!
//! All configuration structs are deserialized through the `config` crate
//! from an optional TOML file overlaid with `PAGEKIT__*` environment
//! variables. Each sub-module represents a logical configuration section.

pub mod logging;
pub mod pagination;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::pagination::PaginatorOptions;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Rendering defaults for pagination controls.
    #[serde(default)]
    pub pagination: PaginatorOptions,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Values are overlaid with environment variables
    /// prefixed with `PAGEKIT` (for example `PAGEKIT__PAGINATION__MAX_PAGES_TO_SHOW=7`).
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("PAGEKIT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.pagination.validate()?;
        Ok(config)
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.pagination.validate()?;
        Ok(config)
    }
}
