use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ui::reader::FontSize;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reader: ReaderConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial reader settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Starting font size in points (12-32, default: 18).
    #[serde(default = "default_font_size")]
    pub font_size: u16,
    /// Start in dark mode (default: true).
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    /// Hide reader controls after this many milliseconds without input.
    /// Absent means controls stay visible.
    #[serde(default)]
    pub auto_hide_controls_ms: Option<u64>,
}

/// Event loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Log output settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_font_size() -> u16 {
    FontSize::DEFAULT.get()
}

fn default_dark_mode() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            dark_mode: default_dark_mode(),
            auto_hide_controls_ms: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
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
