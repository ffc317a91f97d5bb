// ABOUTME: This file implements the lumen.toml configuration system
// ABOUTME: It loads an explicit or per-user config file and falls back to defaults

use anyhow::{Context, Result};
use lumen_logging::{LoggingConfig, debug};
use lumen_types::ContrastConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the lumen config directory
pub const CONFIG_FILE_NAME: &str = "lumen.toml";

/// Top-level lumen configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Contrast checking defaults
    #[serde(default)]
    pub contrast: ContrastConfig,

    /// Logging setup
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Default per-user config path: ~/.config/lumen/lumen.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lumen").join(CONFIG_FILE_NAME))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the per-user file is read
    /// when present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::load_from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
