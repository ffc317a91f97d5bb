// ABOUTME: Command execution and result rendering for the lumen binary
// ABOUTME: Resolves the required ratio, runs the evaluator, and prints text or JSON

use anyhow::{Context, Result};
use lumen_core::{
    ConformanceReport, ContrastConfig, ContrastEvaluator, ContrastResult, Rgb, TextChoice,
    TextSize, WcagLevel, best_text_color, best_text_color_or_default, relative_luminance,
};
use lumen_logging::{info, instrument};
use serde::Serialize;
use std::io::Write;
use std::process::ExitCode;

use crate::cli::{Command, RequirementArgs};

/// What a command concluded, mapped onto the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran and, for `check`, the pair passed
    Success,
    /// `check` ran and the pair failed the requirement
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::from(1),
        }
    }
}

/// The ratio a pair must reach, with a human-readable label
#[derive(Debug, Clone, PartialEq)]
pub struct Requirement {
    pub label: String,
    pub evaluator: ContrastEvaluator,
}

impl Requirement {
    fn for_level(level: WcagLevel, size: TextSize) -> Self {
        let label = match size {
            TextSize::Normal => format!("WCAG {level}"),
            TextSize::Large => format!("WCAG {level} (large text)"),
        };
        Self {
            label,
            evaluator: ContrastEvaluator::for_level(level, size),
        }
    }

    fn custom(threshold: f64) -> Result<Self> {
        Ok(Self {
            label: format!("custom {threshold}:1"),
            evaluator: ContrastEvaluator::new(threshold)?,
        })
    }
}

/// Resolve the requirement: explicit threshold, then level flags, then config.
pub fn resolve_requirement(args: &RequirementArgs, config: &ContrastConfig) -> Result<Requirement> {
    if let Some(threshold) = args.threshold {
        return Requirement::custom(threshold);
    }

    if args.level.is_some() || args.large {
        let level = args.level.map(WcagLevel::from).unwrap_or(config.level);
        let size = args.text_size().unwrap_or(config.text_size);
        return Ok(Requirement::for_level(level, size));
    }

    match config.threshold {
        Some(threshold) => {
            Requirement::custom(threshold).context("Invalid threshold in configuration")
        }
        None => Ok(Requirement::for_level(config.level, config.text_size)),
    }
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    foreground: Rgb,
    background: Rgb,
    requirement: &'a str,
    #[serde(flatten)]
    result: ContrastResult,
}

#[derive(Serialize)]
struct ReportOutput {
    foreground: Rgb,
    background: Rgb,
    #[serde(flatten)]
    report: ConformanceReport,
}

#[derive(Serialize)]
struct LuminanceOutput {
    color: Rgb,
    luminance: f64,
}

#[derive(Serialize)]
struct SuggestOutput {
    background: Rgb,
    #[serde(flatten)]
    choice: TextChoice,
    meets_aa: bool,
}

/// Execute a parsed command, writing results to `out`.
#[instrument(skip(out, config))]
pub fn execute<W: Write>(
    command: &Command,
    config: &ContrastConfig,
    json: bool,
    out: &mut W,
) -> Result<Outcome> {
    match command {
        Command::Check {
            foreground,
            background,
            requirement,
        } => {
            let requirement = resolve_requirement(requirement, config)?;
            let result = requirement.evaluator.evaluate(*foreground, *background);
            info!(
                ratio = result.ratio,
                threshold = result.threshold,
                passes = result.passes,
                "Contrast check complete"
            );

            if json {
                write_json(
                    out,
                    &CheckOutput {
                        foreground: *foreground,
                        background: *background,
                        requirement: &requirement.label,
                        result,
                    },
                )?;
            } else {
                writeln!(out, "{foreground} on {background}")?;
                writeln!(out, "{result}")?;
                let verdict = if result.passes { "Passes" } else { "Fails" };
                writeln!(out, "{verdict} {} standard", requirement.label)?;
            }

            Ok(if result.passes {
                Outcome::Success
            } else {
                Outcome::Failed
            })
        }

        Command::Report {
            foreground,
            background,
        } => {
            let report = ContrastEvaluator::default().report(*foreground, *background);

            if json {
                write_json(
                    out,
                    &ReportOutput {
                        foreground: *foreground,
                        background: *background,
                        report,
                    },
                )?;
            } else {
                writeln!(out, "{foreground} on {background}")?;
                writeln!(out, "Contrast ratio: {:.2}:1", report.ratio)?;
                for (level, size) in [
                    (WcagLevel::AA, TextSize::Normal),
                    (WcagLevel::AA, TextSize::Large),
                    (WcagLevel::AAA, TextSize::Normal),
                    (WcagLevel::AAA, TextSize::Large),
                ] {
                    let mark = if report.passes(level, size) {
                        "pass"
                    } else {
                        "fail"
                    };
                    writeln!(out, "  {:<4}{:<7} {mark}", level.to_string(), size.to_string())?;
                }
            }

            Ok(Outcome::Success)
        }

        Command::Luminance { color } => {
            let luminance = relative_luminance(*color).value();

            if json {
                write_json(
                    out,
                    &LuminanceOutput {
                        color: *color,
                        luminance,
                    },
                )?;
            } else {
                writeln!(out, "{color} relative luminance: {luminance:.4}")?;
            }

            Ok(Outcome::Success)
        }

        Command::Suggest {
            background,
            candidates,
        } => {
            let choice = best_text_color(*background, candidates.iter().copied())
                .unwrap_or_else(|| best_text_color_or_default(*background));

            if json {
                write_json(
                    out,
                    &SuggestOutput {
                        background: *background,
                        choice,
                        meets_aa: choice.meets_aa(),
                    },
                )?;
            } else {
                writeln!(
                    out,
                    "Use {} on {background} (contrast ratio: {:.2}:1)",
                    choice.color, choice.ratio
                )?;
            }

            Ok(Outcome::Success)
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value).context("Failed to serialize output")?;
    writeln!(out)?;
    Ok(())
}
