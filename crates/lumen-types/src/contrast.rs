// ABOUTME: Contrast data types: luminance, ratio verdicts and WCAG thresholds
// ABOUTME: Pure values produced fresh per evaluation, never persisted

use serde::{Deserialize, Serialize};
use std::fmt;

/// WCAG contrast ratios for accessibility compliance
pub struct ContrastRatios;

impl ContrastRatios {
    pub const AAA_NORMAL: f64 = 7.0;
    pub const AAA_LARGE: f64 = 4.5;
    pub const AA_NORMAL: f64 = 4.5;
    pub const AA_LARGE: f64 = 3.0;

    /// Lowest possible ratio (a color against itself)
    pub const MIN: f64 = 1.0;
    /// Highest possible ratio (black against white)
    pub const MAX: f64 = 21.0;

    /// Minimum ratio required for a conformance level and text size
    pub const fn required(level: WcagLevel, size: TextSize) -> f64 {
        match (level, size) {
            (WcagLevel::AA, TextSize::Normal) => Self::AA_NORMAL,
            (WcagLevel::AA, TextSize::Large) => Self::AA_LARGE,
            (WcagLevel::AAA, TextSize::Normal) => Self::AAA_NORMAL,
            (WcagLevel::AAA, TextSize::Large) => Self::AAA_LARGE,
        }
    }
}

/// WCAG conformance levels that carry a contrast requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum WcagLevel {
    /// WCAG 2.x Level AA (success criterion 1.4.3)
    #[default]
    AA,
    /// WCAG 2.x Level AAA (success criterion 1.4.6)
    AAA,
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WcagLevel::AA => f.write_str("AA"),
            WcagLevel::AAA => f.write_str("AAA"),
        }
    }
}

/// Text size category. Large text is at least 18pt regular or 14pt bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSize::Normal => f.write_str("normal"),
            TextSize::Large => f.write_str("large"),
        }
    }
}

/// Relative luminance of a color, in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Luminance(pub f64);

impl Luminance {
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<Luminance> for f64 {
    fn from(luminance: Luminance) -> Self {
        luminance.0
    }
}

/// A contrast ratio checked against a single threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Contrast ratio in [1, 21]
    pub ratio: f64,
    /// Threshold the ratio was checked against
    pub threshold: f64,
    /// Whether `ratio >= threshold`
    pub passes: bool,
}

impl ContrastResult {
    pub fn new(ratio: f64, threshold: f64) -> Self {
        Self {
            ratio,
            threshold,
            passes: ratio >= threshold,
        }
    }
}

impl fmt::Display for ContrastResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contrast ratio: {:.2}:1 (minimum required: {:.2}:1)",
            self.ratio, self.threshold
        )
    }
}

/// A contrast ratio graded against every level and text size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub ratio: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl ConformanceReport {
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            aa_normal: ratio >= ContrastRatios::AA_NORMAL,
            aa_large: ratio >= ContrastRatios::AA_LARGE,
            aaa_normal: ratio >= ContrastRatios::AAA_NORMAL,
            aaa_large: ratio >= ContrastRatios::AAA_LARGE,
        }
    }

    /// Whether the ratio meets a specific level for a text size
    pub fn passes(&self, level: WcagLevel, size: TextSize) -> bool {
        match (level, size) {
            (WcagLevel::AA, TextSize::Normal) => self.aa_normal,
            (WcagLevel::AA, TextSize::Large) => self.aa_large,
            (WcagLevel::AAA, TextSize::Normal) => self.aaa_normal,
            (WcagLevel::AAA, TextSize::Large) => self.aaa_large,
        }
    }

    /// Highest level met for the given text size, if any
    pub fn highest_level(&self, size: TextSize) -> Option<WcagLevel> {
        if self.passes(WcagLevel::AAA, size) {
            Some(WcagLevel::AAA)
        } else if self.passes(WcagLevel::AA, size) {
            Some(WcagLevel::AA)
        } else {
            None
        }
    }
}
