//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/splitview/config.toml`, or from the
//! file named by `SPLITVIEW_CONFIG` when that is set.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitviewError};
use crate::render::DEFAULT_THEME;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "SPLITVIEW_CONFIG";

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// Pane colors and decorations
    pub style: StyleSection,
    /// Content pane settings
    pub viewer: ViewerConfig,
    /// Log file settings
    pub log: LogConfig,
}

/// General application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Show hidden files by default
    pub show_hidden: bool,
    /// List directories before files
    pub dirs_first: bool,
    /// Refresh the tree when files change on disk
    pub watch: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            dirs_first: false,
            watch: true,
        }
    }
}

/// Raw `[style]` section, resolved into `StyleConfig` at startup
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleSection {
    pub cursor_color: String,
    pub directory_color: String,
    pub file_color: String,
    pub border_enabled: bool,
    pub highlight_enabled: bool,
    /// syntect theme name
    pub theme: String,
}

impl Default for StyleSection {
    fn default() -> Self {
        Self {
            cursor_color: "63".to_string(),
            directory_color: "63".to_string(),
            file_color: "default".to_string(),
            border_enabled: true,
            highlight_enabled: true,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

/// Content pane settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Files larger than this are refused instead of loaded
    pub max_file_bytes: u64,
    /// Show line numbers
    pub line_numbers: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 1024 * 1024,
            line_numbers: true,
        }
    }
}

/// Log file settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// off, error, warn, info, debug, trace
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    /// Parsed level filter, `Info` when the value is not recognized
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/splitview)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("splitview"))
    }

    /// Get the config file path, honoring `SPLITVIEW_CONFIG`
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults; a file that cannot be parsed is an error.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| SplitviewError::config(path, e.to_string()))
    }
}
