//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod capabilities;
pub mod dialog;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::capabilities::CapabilitySourceConfig;
use self::dialog::DialogConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Every section falls back to its defaults, so an absent configuration
/// file yields a usable configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Share dialog presentation settings.
    #[serde(default)]
    pub dialog: DialogConfig,
    /// Where server capabilities come from when no server is reachable.
    #[serde(default)]
    pub capabilities: CapabilitySourceConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Environment variables prefixed with
    /// `LINKSHARE__` override file values (`LINKSHARE__DIALOG__DATE_FORMAT`).
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("LINKSHARE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
