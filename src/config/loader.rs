use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::config::types::Config;
use crate::controller::SqueezeRange;

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
    /// Uses `~/.config/lemonade/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("lemonade").join("config.toml")
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
    /// - `squeeze.min_taps` is at least 1
    /// - `squeeze.min_taps` does not exceed `squeeze.max_taps`
    /// - `ui.tick_rate_ms` is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let squeeze = &self.squeeze;
        if squeeze.min_taps == 0 {
            return Err(ConfigError::ValidationError {
                message: "squeeze.min_taps must be at least 1".to_string(),
            });
        }

        if squeeze.min_taps > squeeze.max_taps {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "squeeze.min_taps ({}) is greater than squeeze.max_taps ({})",
                    squeeze.min_taps, squeeze.max_taps
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Applies command-line overrides on top of the loaded file, then re-validates.
    pub fn with_overrides(
        mut self,
        min_taps: Option<u32>,
        max_taps: Option<u32>,
        mouse: Option<bool>,
    ) -> Result<Self, ConfigError> {
        if let Some(min) = min_taps {
            self.squeeze.min_taps = min;
        }
        if let Some(max) = max_taps {
            self.squeeze.max_taps = max;
        }
        if let Some(mouse) = mouse {
            self.ui.mouse = mouse;
        }
        self.validate()?;
        Ok(self)
    }

    /// The validated squeeze range.
    pub fn squeeze_range(&self) -> Result<SqueezeRange, ConfigError> {
        SqueezeRange::new(self.squeeze.min_taps, self.squeeze.max_taps).ok_or_else(|| {
            ConfigError::ValidationError {
                message: format!(
                    "invalid squeeze range {}..={}",
                    self.squeeze.min_taps, self.squeeze.max_taps
                ),
            }
        })
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    /// Where the interactive UI writes its log.
    pub fn log_path(&self) -> PathBuf {
        self.logging.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("lemonade")
                .join("lemonade.log")
        })
    }
}
