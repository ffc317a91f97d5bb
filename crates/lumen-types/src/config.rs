// ABOUTME: Configuration data types
// ABOUTME: Pure data structures for the [contrast] section of lumen.toml

use crate::contrast::{ContrastRatios, TextSize, WcagLevel};
use serde::{Deserialize, Serialize};

/// Contrast checking configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContrastConfig {
    /// Explicit minimum ratio; overrides `level` and `text_size` when set
    #[serde(default)]
    pub threshold: Option<f64>,
    /// Conformance level to check against
    #[serde(default)]
    pub level: WcagLevel,
    /// Text size category to check against
    #[serde(default)]
    pub text_size: TextSize,
}

impl ContrastConfig {
    /// The threshold this configuration asks for
    pub fn effective_threshold(&self) -> f64 {
        self.threshold
            .unwrap_or_else(|| ContrastRatios::required(self.level, self.text_size))
    }
}
