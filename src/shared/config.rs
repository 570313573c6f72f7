//! Application Configuration
//!
//! Loaded from `design-tokens.toml`:
//! ```toml
//! tokens_path = "design-system/tokens.json"
//! output = "css"
//! log_path = "design-tokens.log"
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file name searched for in the standard locations
pub const CONFIG_FILE_NAME: &str = "design-tokens.toml";

/// How resolved tokens are printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The full token set as JSON
    #[default]
    Json,
    /// CSS custom properties in a `:root` block
    Css,
    /// Numeric component-library theme config as JSON
    Component,
}

/// Application configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// External token document (JSON)
    pub tokens_path: Option<PathBuf>,

    /// Output format when none is given on the command line
    pub output: OutputFormat,

    /// Log file; logging is off when unset
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    /// Find the config file in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: user config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("design-tokens").join(CONFIG_FILE_NAME)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME))),
            Some(PathBuf::from(CONFIG_FILE_NAME)),
        ];

        candidates.into_iter().flatten().find(|candidate| candidate.exists())
    }

    /// Load configuration, returning defaults if no file is found
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// Relative paths inside the file are resolved against the file's
    /// directory.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;

        if let Some(base) = path.parent() {
            config.tokens_path = config.tokens_path.map(|p| rebase(base, p));
            config.log_path = config.log_path.map(|p| rebase(base, p));
        }
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

fn rebase(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}
