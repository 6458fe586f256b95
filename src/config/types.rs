use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::controller::{DEFAULT_MAX_SQUEEZE_TAPS, DEFAULT_MIN_SQUEEZE_TAPS};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub squeeze: SqueezeConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How many taps the squeeze stage asks for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqueezeConfig {
    /// Fewest taps a lemon can take (default: 2).
    #[serde(default = "default_min_taps")]
    pub min_taps: u32,
    /// Most taps a lemon can take, inclusive (default: 4).
    #[serde(default = "default_max_taps")]
    pub max_taps: u32,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture the mouse so clicks tap the image and press the button (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `LEMONADE_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to `<cache dir>/lemonade/lemonade.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_min_taps() -> u32 {
    DEFAULT_MIN_SQUEEZE_TAPS
}

fn default_max_taps() -> u32 {
    DEFAULT_MAX_SQUEEZE_TAPS
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SqueezeConfig {
    fn default() -> Self {
        Self {
            min_taps: default_min_taps(),
            max_taps: default_max_taps(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
