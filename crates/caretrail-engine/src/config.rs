//! Configuration for caretrail.
//!
//! Settings are read from a JSON file (by default
//! `.caretrail/config.json`). Every field is optional; a missing file yields
//! the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the config file and log.
pub const CONFIG_DIR: &str = ".caretrail";

/// Main configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color theme for the TUI.
    #[serde(default)]
    pub theme: ThemeName,

    /// Event loop tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Columns scrolled per column of mouse drag on the card strip.
    #[serde(default = "default_drag_multiplier")]
    pub drag_multiplier: u16,

    /// Where the sample file is written.
    #[serde(default = "default_sample_dir")]
    pub sample_dir: PathBuf,

    /// Log file for tracing output. `None` disables logging.
    #[serde(default = "default_log_file")]
    pub log_file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_drag_multiplier() -> u16 {
    2
}

fn default_sample_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_file() -> Option<PathBuf> {
    Some(Path::new(CONFIG_DIR).join("caretrail.log"))
}

/// Named color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Catppuccin Mocha (dark).
    #[default]
    Mocha,
    /// Catppuccin Latte (light).
    Latte,
    /// High contrast.
    HighContrast,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            tick_rate_ms: default_tick_rate_ms(),
            drag_multiplier: default_drag_multiplier(),
            sample_dir: default_sample_dir(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Default config file location, relative to the working directory.
    pub fn default_path() -> PathBuf {
        Path::new(CONFIG_DIR).join("config.json")
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeName::Mocha);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.drag_multiplier, 2);
        assert_eq!(config.log_file, Some(PathBuf::from(".caretrail/caretrail.log")));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"theme":"high_contrast"}"#).unwrap();
        assert_eq!(config.theme, ThemeName::HighContrast);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.sample_dir, PathBuf::from("."));
    }

    #[test]
    fn test_null_log_file_disables_logging() {
        let config: Config = serde_json::from_str(r#"{"log_file":null}"#).unwrap();
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".caretrail").join("config.json");

        let config = Config {
            theme: ThemeName::Latte,
            tick_rate_ms: 100,
            ..Config::default()
        };
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }
}
