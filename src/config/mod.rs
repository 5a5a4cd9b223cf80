//! Configuration management for the otherworld binary.
//!
//! Configuration lives in a TOML file with two small sections:
//!
//! ```toml
//! [ui]
//! fullscreen = false
//!
//! [logging]
//! level = "info"
//! # file = "otherworld.log"
//! ```
//!
//! All values have defaults, so a missing file is not an error for the
//! `play` subcommand; the binary warns and continues with defaults.
//! Values are validated on load so a typo fails early instead of
//! misconfiguring the logger at runtime.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Presentation-layer preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Start the session in fullscreen display mode.
    pub fullscreen: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { fullscreen: false }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of: trace, debug, info, warn, error.
    pub level: String,
    /// Optional log file; stdout stays reserved for the game transcript
    /// when this is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Loads and validates configuration from a TOML file.
    pub async fn load(path: &str) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .await
            .with_context(|| format!("reading config file {path}"))?;
        let config: Config =
            toml::from_str(&raw).with_context(|| format!("parsing config file {path}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Writes a starter configuration file with default values.
    pub async fn create_default(path: &str) -> Result<()> {
        let serialized = toml::to_string_pretty(&Config::default())?;
        fs::write(path, serialized)
            .await
            .with_context(|| format!("writing config file {path}"))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(anyhow!(
                "invalid logging.level '{}' (expected one of: {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            ));
        }
        Ok(())
    }
}
