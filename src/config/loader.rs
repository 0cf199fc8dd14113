use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Most slots either list can have.
pub const MAX_SLOTS: usize = 16;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/rinkwatch/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("rinkwatch").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Game slots are within 1..=MAX_SLOTS, event slots within 0..=MAX_SLOTS
    /// - Poll interval, timeout and tick are non-zero
    /// - The API base URL is set
    pub fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        if display.game_slots == 0 || display.game_slots > MAX_SLOTS {
            return Err(validation(format!(
                "display.game_slots must be between 1 and {MAX_SLOTS}, got {}",
                display.game_slots
            )));
        }
        if display.event_slots > MAX_SLOTS {
            return Err(validation(format!(
                "display.event_slots must be at most {MAX_SLOTS}, got {}",
                display.event_slots
            )));
        }
        if display.tick_ms == 0 {
            return Err(validation("display.tick_ms must be positive"));
        }

        let companion = &self.companion;
        if companion.base_url.trim().is_empty() {
            return Err(validation("companion.base_url must not be empty"));
        }
        if companion.poll_interval_seconds == 0 {
            return Err(validation("companion.poll_interval_seconds must be positive"));
        }
        if companion.timeout_seconds == 0 {
            return Err(validation("companion.timeout_seconds must be positive"));
        }

        Ok(())
    }
}

fn validation(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
