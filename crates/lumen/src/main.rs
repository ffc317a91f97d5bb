use std::panic;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use lumen::{Cli, Config, Outcome, execute};
use lumen_logging::{LoggingConfig, LoggingGuard, error, info, level_for_verbosity, warn};

fn setup_logging(mut config: LoggingConfig, verbosity: u8) -> Result<LoggingGuard> {
    // A bad override is reported once logging is up instead of failing the command
    let override_error = config.apply_env_overrides().err();

    // Command line verbosity wins over the config file and environment
    if verbosity > 0 {
        config.level = level_for_verbosity(verbosity).into();
        config.filter = None;
    }

    let guard = lumen_logging::init_logging_with_config(config)
        .context("Failed to initialize lumen logging")?;

    if let Some(err) = override_error {
        warn!(error = %format!("{err:#}"), "Ignoring invalid logging override");
    }

    Ok(guard)
}

fn install_panic_handler() {
    panic::set_hook(Box::new(|info| {
        let payload = info.payload();
        let location = info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));

        let panic_message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Box<dyn Any>".to_string()
        };

        error!(
            panic_message = %panic_message,
            location = ?location,
            version = env!("CARGO_PKG_VERSION"),
            "Application panic occurred"
        );

        eprintln!("Fatal error: {panic_message}");
        if let Some(loc) = &location {
            eprintln!("Location: {loc}");
        }
    }));
}

fn run(cli: Cli) -> Result<Outcome> {
    let config = Config::load(cli.config.as_deref())?;
    let _guard = setup_logging(config.logging.clone(), cli.verbose)?;
    install_panic_handler();

    info!(command = ?cli.command, json = cli.json, "Running lumen");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli.command, &config.contrast, cli.json, &mut out)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            error!(error = %format!("{err:#}"), "Command failed");
            eprintln!("lumen: {err:#}");
            ExitCode::from(2)
        }
    }
}
