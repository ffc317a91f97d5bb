// ABOUTME: Tracing subscriber initialization and layer composition
// ABOUTME: Combines console and file layers under one filter for complete logging setup

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{Layer, prelude::*, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::layers::{BoxedLayer, create_console_layer, create_env_filter, create_file_layer};

/// Keeps background log writers alive. Dropping it flushes pending file output.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Build the output layers described by `config`.
pub fn build_layers(config: &LoggingConfig) -> Result<(Vec<BoxedLayer>, Option<WorkerGuard>)> {
    let mut layers = Vec::new();
    let mut file_guard = None;

    if let Some(console) = create_console_layer(&config.output) {
        layers.push(console);
    }

    if config.output.file {
        let (file_layer, guard) =
            create_file_layer(&config.file).context("Failed to set up file logging")?;
        layers.push(file_layer);
        file_guard = Some(guard);
    }

    Ok((layers, file_guard))
}

/// Initialize the global tracing subscriber with the given configuration.
pub fn init_subscriber(config: LoggingConfig) -> Result<LoggingGuard> {
    let env_filter = create_env_filter(&config).context("Failed to create environment filter")?;
    let (layers, file_guard) = build_layers(&config)?;

    tracing_subscriber::registry()
        .with(layers.with_filter(env_filter))
        .try_init()
        .context("Failed to install global tracing subscriber")?;

    tracing::debug!(
        log_level = %config.level.0,
        filter = ?config.filter,
        console_output = config.output.console,
        file_output = config.output.file,
        json_output = config.output.json,
        file_path = %config.file.path.display(),
        "Lumen logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FileConfig, LogLevel, OutputConfig};
    use std::collections::HashMap;
    use tempfile::tempdir;
    use tracing::Level;

    #[test]
    fn test_build_layers_console_only() {
        let config = LoggingConfig::default();
        let (layers, guard) = build_layers(&config).unwrap();
        assert_eq!(layers.len(), 1);
        assert!(guard.is_none());
    }

    #[test]
    fn test_build_layers_with_file() {
        let temp_dir = tempdir().unwrap();

        let config = LoggingConfig {
            level: LogLevel(Level::DEBUG),
            module_levels: HashMap::new(),
            output: OutputConfig {
                console: false,
                file: true,
                json: false,
                pretty_console: false,
            },
            file: FileConfig {
                path: temp_dir.path().join("lumen.log"),
            },
            filter: None,
        };

        let (layers, guard) = build_layers(&config).unwrap();
        assert_eq!(layers.len(), 1);
        assert!(guard.is_some());
    }

    #[test]
    fn test_build_layers_with_nothing_enabled() {
        let config = LoggingConfig {
            output: OutputConfig {
                console: false,
                file: false,
                json: false,
                pretty_console: false,
            },
            ..Default::default()
        };

        let (layers, guard) = build_layers(&config).unwrap();
        assert!(layers.is_empty());
        assert!(guard.is_none());
    }

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig {
            output: OutputConfig {
                console: false,
                ..Default::default()
            },
            ..Default::default()
        };

        // Other tests in this binary never install a global subscriber, so
        // the first call owns it; any later call must report the conflict.
        let first = init_subscriber(config.clone());
        let second = init_subscriber(config);
        assert!(first.is_ok());
        assert!(second.is_err());
    }
}
