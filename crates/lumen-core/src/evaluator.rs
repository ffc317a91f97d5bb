// ABOUTME: Contrast evaluator producing pass/fail verdicts against a threshold
// ABOUTME: Stateless and re-entrant; logs each verdict as a structured debug event

use lumen_logging::debug;
use lumen_types::{
    ConformanceReport, ContrastConfig, ContrastRatios, ContrastResult, Rgb, TextSize, WcagLevel,
};

use crate::error::{EvaluateError, Result};
use crate::luminance::contrast_ratio;

/// Evaluate two colors against `threshold`.
pub fn evaluate(a: Rgb, b: Rgb, threshold: f64) -> ContrastResult {
    let result = ContrastResult::new(contrast_ratio(a, b), threshold);

    debug!(
        first = %a,
        second = %b,
        ratio = result.ratio,
        threshold = result.threshold,
        passes = result.passes,
        "Contrast evaluated"
    );

    result
}

/// Evaluate two colors against the AA normal text threshold (4.5:1).
pub fn evaluate_aa(a: Rgb, b: Rgb) -> ContrastResult {
    evaluate(a, b, ContrastRatios::AA_NORMAL)
}

/// Grade two colors against every level and text size.
pub fn conformance_report(a: Rgb, b: Rgb) -> ConformanceReport {
    ConformanceReport::from_ratio(contrast_ratio(a, b))
}

/// Reject thresholds no contrast ratio could meaningfully be compared against.
pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if threshold.is_finite() && (ContrastRatios::MIN..=ContrastRatios::MAX).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(EvaluateError::invalid_threshold(threshold))
    }
}

/// Contrast evaluator bound to a validated threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastEvaluator {
    threshold: f64,
}

impl Default for ContrastEvaluator {
    fn default() -> Self {
        Self {
            threshold: ContrastRatios::AA_NORMAL,
        }
    }
}

impl ContrastEvaluator {
    pub fn new(threshold: f64) -> Result<Self> {
        Ok(Self {
            threshold: validate_threshold(threshold)?,
        })
    }

    /// Evaluator for a WCAG level and text size
    pub fn for_level(level: WcagLevel, size: TextSize) -> Self {
        Self {
            threshold: ContrastRatios::required(level, size),
        }
    }

    /// Evaluator for a `[contrast]` configuration section
    pub fn from_config(config: &ContrastConfig) -> Result<Self> {
        Self::new(config.effective_threshold())
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn evaluate(&self, a: Rgb, b: Rgb) -> ContrastResult {
        evaluate(a, b, self.threshold)
    }

    /// Parse two `#RRGGBB` strings and evaluate them.
    pub fn evaluate_hex(&self, a: &str, b: &str) -> Result<ContrastResult> {
        let parse = |input: &str| {
            input.parse::<Rgb>().map_err(|err| {
                debug!(input = %input, error = %err, "Rejected color input");
                EvaluateError::from(err)
            })
        };

        let first = parse(a)?;
        let second = parse(b)?;
        Ok(self.evaluate(first, second))
    }

    pub fn report(&self, a: Rgb, b: Rgb) -> ConformanceReport {
        conformance_report(a, b)
    }
}
