// ABOUTME: Configuration management for the crawl wizard
// User preferences only: UI timing and logging. Wizard defaults are never configurable.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading or saving the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No platform config directory could be determined
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read config from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    /// Tick interval for cursor blink, in milliseconds (default: 250ms)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Capture mouse events (default: false)
    #[serde(default)]
    pub mouse_capture: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            mouse_capture: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Directory for log files (default: <data dir>/crawl-wizard/logs)
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// tracing filter directive; RUST_LOG takes precedence
    #[serde(default)]
    pub filter: Option<String>,
}

fn default_tick_rate() -> u64 {
    250
}

pub const DEFAULT_LOG_FILTER: &str = "crawl_wizard=info";

impl LoggingConfig {
    pub fn filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Configured log directory, falling back to the platform data dir
    pub fn log_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("crawl-wizard")
                .join("logs")
        })
    }
}

impl AppConfig {
    /// Default config file location
    pub fn config_path() -> ConfigResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("crawl-wizard").join("config.toml"))
    }

    /// Load from the default location
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
