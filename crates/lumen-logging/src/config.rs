// ABOUTME: Configuration structures and environment variable parsing for logging
// ABOUTME: Handles log levels, output targets, and file path configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Wrapper for tracing::Level that implements Serialize/Deserialize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub Level);

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let level_str = match self.0 {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        serializer.serialize_str(level_str)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<LogLevel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let level = parse_log_level(&s).map_err(serde::de::Error::custom)?;
        Ok(LogLevel(level))
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        LogLevel(level)
    }
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

/// Main configuration structure for the logging system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Global log level (trace, debug, info, warn, error)
    pub level: LogLevel,

    /// Per-module log level overrides
    pub module_levels: HashMap<String, LogLevel>,

    /// Output configuration
    pub output: OutputConfig,

    /// File logging configuration
    pub file: FileConfig,

    /// Raw filter directives (`RUST_LOG` syntax). When set they replace
    /// `level` and `module_levels`.
    #[serde(skip)]
    pub filter: Option<String>,
}

/// Configuration for different output targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable console output (written to stderr)
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Enable JSON structured output
    pub json: bool,

    /// Pretty-print console output (vs compact)
    pub pretty_console: bool,
}

/// Configuration for file logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Path to log file (defaults to ~/.config/lumen/lumen.log)
    pub path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(Level::WARN),
            module_levels: HashMap::new(),
            output: OutputConfig::default(),
            file: FileConfig::default(),
            filter: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            console: true,
            file: false,
            json: false,
            pretty_console: false,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: default_log_file_path(),
        }
    }
}

impl LoggingConfig {
    /// Apply environment variable overrides to this configuration.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, which maps a variable name to its value.
    ///
    /// `LUMEN_LOG` takes precedence over `RUST_LOG`. An invalid level or filter
    /// is reported after the output switches have been applied, and leaves the
    /// configured levels untouched.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let level_override = if let Some(level_str) = lookup("LUMEN_LOG") {
            self.apply_level_override(&level_str)
                .context("Invalid LUMEN_LOG level")
        } else if let Some(directives) = lookup("RUST_LOG").filter(|v| !v.trim().is_empty()) {
            self.apply_filter_override(&directives)
        } else {
            Ok(())
        };

        if lookup("LUMEN_LOG_JSON").is_some() {
            self.output.json = true;
        }

        if lookup("LUMEN_LOG_FILE").is_some() {
            self.output.file = true;
        }

        if lookup("LUMEN_LOG_NO_CONSOLE").is_some() {
            self.output.console = false;
        }

        level_override
    }

    fn apply_level_override(&mut self, level_str: &str) -> Result<()> {
        if level_str.trim().eq_ignore_ascii_case("off") {
            self.filter = Some("off".to_string());
        } else {
            self.level = LogLevel(parse_log_level(level_str)?);
        }
        Ok(())
    }

    /// Accept anything `EnvFilter` accepts, e.g. `off`, `lumen` or
    /// `info,lumen_core=debug`.
    fn apply_filter_override(&mut self, directives: &str) -> Result<()> {
        EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid RUST_LOG filter '{directives}'"))?;
        self.filter = Some(directives.to_string());
        Ok(())
    }
}

/// Get the default log file path: ~/.config/lumen/lumen.log
fn default_log_file_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("lumen").join("lumen.log")
    } else {
        // Fallback to current directory if config dir not available
        PathBuf::from("lumen.log")
    }
}

/// Parse a log level string (case-insensitive).
pub fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            level_str
        ),
    }
}
