use serde::Deserialize;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Application name used for config and data directories
pub const APP_NAME: &str = "font-version";

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "FONT_VERSION_LOG";

/// Default log level when neither config nor environment sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Directory of `<id>.json` package listings
    pub catalog_dir: Option<PathBuf>,
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormat,
    /// Write to `<data dir>/font-version.log` instead of stderr
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
            file: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file at the default location yields the defaults; an
    /// explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (config_path(), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Returns the path to the config file.
/// Uses $XDG_CONFIG_HOME/font-version/config.json if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/font-version/config.json.
pub fn config_path() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
    .join("config.json")
}

/// Returns the path to the data directory for font-version.
/// Uses $XDG_DATA_HOME/font-version if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/font-version,
/// or ./font-version if neither is available.
pub fn data_dir() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

fn app_dir_with_env(
    xdg_home: Option<String>,
    home_dir: Option<PathBuf>,
    home_relative: &str,
) -> PathBuf {
    let base = xdg_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_relative)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(APP_NAME)
}
