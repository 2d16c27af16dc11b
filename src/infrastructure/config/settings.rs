use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::logging::LogConfig;

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "themeconf.yaml";

/// Prefix of environment variable overrides, nested with `__`.
pub const ENV_PREFIX: &str = "THEMECONF_";

/// Settings error types
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Settings file not found: {0}")]
    MissingFile(String),
}

/// Settings of the `themeconf` tool itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LogConfig,
}

impl Settings {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `themeconf.yaml` in the working directory (optional)
    /// 3. `explicit` settings file, which must exist when given
    /// 4. Environment variables (`THEMECONF_*` prefix, highest priority)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(SETTINGS_FILE));

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(SettingsError::MissingFile(path.display().to_string()).into());
            }
            figment = figment.merge(Yaml::file(path));
        }

        let settings: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract settings from figment")?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(&self) -> Result<(), SettingsError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(SettingsError::InvalidLogLevel(self.logging.level.clone()));
        }
        Ok(())
    }
}
