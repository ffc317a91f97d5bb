// ABOUTME: Public API for lumen logging infrastructure using tokio-tracing
// ABOUTME: Provides centralized configuration and initialization for structured logging

pub mod config;
pub mod layers;
pub mod subscriber;

#[cfg(test)]
mod structured_tests;

// Re-export tracing macros for convenience
pub use tracing::{Level, Span, debug, error, info, instrument, span, trace, warn};

// Re-export configuration types
pub use config::{LogLevel, LoggingConfig};

// Re-export initialization functions
pub use subscriber::{LoggingGuard, init_subscriber};

use anyhow::Result;

/// Initialize logging with custom configuration.
pub fn init_logging_with_config(config: LoggingConfig) -> Result<LoggingGuard> {
    init_subscriber(config)
}

/// Map a `-v` repetition count onto a log level.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _3_or_more => Level::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::tempdir;
    use tracing_subscriber::{fmt, prelude::*};

    #[test]
    fn test_macros_available() {
        info!("Test info message");
        debug!("Test debug message");
        warn!("Test warning message");
        error!("Test error message");
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(1), Level::INFO);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(3), Level::TRACE);
        assert_eq!(level_for_verbosity(9), Level::TRACE);
    }

    #[test]
    fn test_file_logging_with_structured_fields() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("isolated_test_lumen.log");

        let log_file = std::fs::File::create(&log_path).expect("Failed to create test log file");
        let file_writer = Arc::new(log_file);

        // Isolated subscriber so the global one stays untouched
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_writer(file_writer),
        );

        tracing::subscriber::with_default(subscriber, || {
            info!(foreground = "#000000", "Contrast check requested");
            warn!(ratio = 1.13, threshold = 4.5, "Contrast below threshold");
        });

        let contents = std::fs::read_to_string(&log_path).expect("Failed to read test log file");

        assert!(
            contents.contains("Contrast check requested"),
            "Log file should contain the info message. Contents: {}",
            contents
        );
        assert!(
            contents.contains("Contrast below threshold"),
            "Log file should contain the warn message. Contents: {}",
            contents
        );
        assert!(
            contents.contains("foreground"),
            "Log file should contain structured field. Contents: {}",
            contents
        );
        assert!(
            contents.contains("threshold"),
            "Log file should contain structured field. Contents: {}",
            contents
        );
    }
}
