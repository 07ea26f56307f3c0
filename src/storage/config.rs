//! Configuration handling for bookshelf
//!
//! Configuration is stored in `~/.config/bookshelf/config.toml` (or the
//! platform equivalent). Every setting is optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::json::DEFAULT_FILE_NAME;
use crate::cli::OutputFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GlobalConfig {
    /// Location of the library data file
    pub data_file: Option<PathBuf>,

    /// Default output format for one-shot commands
    pub default_format: OutputFormat,
}

/// Loaded configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: GlobalConfig,

    /// File the configuration was read from, if any
    pub source: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::global_config_path() {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file, falling back to defaults
    /// when the file does not exist
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let global: GlobalConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(Self {
            global,
            source: Some(path.to_path_buf()),
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "bookshelf", "bookshelf")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Picks the data file: an explicit path wins, then the configured one,
    /// then `library.text` in the working directory
    pub fn data_file(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.global.data_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME))
    }

    /// Picks the output format: an explicit choice wins over the configured default
    pub fn format(&self, explicit: Option<OutputFormat>) -> OutputFormat {
        explicit.unwrap_or(self.global.default_format)
    }
}
