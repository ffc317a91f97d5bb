// ABOUTME: Command-line argument definitions for the lumen binary
// ABOUTME: Colors and thresholds are validated while parsing so bad input exits with usage errors

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use lumen_core::{Rgb, TextSize, WcagLevel, validate_threshold};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(version, about = "Check text/background color pairs against WCAG contrast requirements")]
#[command(
    after_help = "Colors are written as #RRGGBB (quote them in the shell).\n\nEnvironment:\n  LUMEN_LOG              Log level override\n  LUMEN_LOG_JSON         Emit logs as JSON\n  LUMEN_LOG_FILE         Also log to the rolling log file"
)]
pub struct Cli {
    /// Increase logging verbosity (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file to use instead of the per-user lumen.toml
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a text color against a background color
    Check {
        #[arg(value_parser = parse_color)]
        foreground: Rgb,
        #[arg(value_parser = parse_color)]
        background: Rgb,
        #[command(flatten)]
        requirement: RequirementArgs,
    },
    /// Grade a color pair against AA and AAA for normal and large text
    Report {
        #[arg(value_parser = parse_color)]
        foreground: Rgb,
        #[arg(value_parser = parse_color)]
        background: Rgb,
    },
    /// Print the relative luminance of a color
    Luminance {
        #[arg(value_parser = parse_color)]
        color: Rgb,
    },
    /// Pick the most readable text color for a background
    Suggest {
        #[arg(value_parser = parse_color)]
        background: Rgb,
        /// Candidate text colors (defaults to black and white)
        #[arg(value_parser = parse_color)]
        candidates: Vec<Rgb>,
    },
}

/// How the required contrast ratio is chosen for `check`
#[derive(Debug, Clone, Default, Args)]
pub struct RequirementArgs {
    /// Explicit minimum contrast ratio (1 to 21)
    #[arg(long, value_parser = parse_threshold, conflicts_with_all = ["level", "large"])]
    pub threshold: Option<f64>,

    /// WCAG conformance level to check against
    #[arg(long, value_enum)]
    pub level: Option<LevelArg>,

    /// Use the large text requirements (18pt, or 14pt bold)
    #[arg(long)]
    pub large: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Aa,
    Aaa,
}

impl From<LevelArg> for WcagLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Aa => WcagLevel::AA,
            LevelArg::Aaa => WcagLevel::AAA,
        }
    }
}

impl RequirementArgs {
    /// Text size requested on the command line, if any
    pub fn text_size(&self) -> Option<TextSize> {
        self.large.then_some(TextSize::Large)
    }
}

fn parse_color(input: &str) -> Result<Rgb, String> {
    input.parse::<Rgb>().map_err(|err| err.to_string())
}

fn parse_threshold(input: &str) -> Result<f64, String> {
    let value: f64 = input
        .parse()
        .map_err(|_| format!("'{input}' is not a number"))?;
    validate_threshold(value).map_err(|err| err.to_string())
}
