// ABOUTME: Contrast evaluation core: luminance, ratio, verdicts and text color selection
// ABOUTME: Every operation is a pure function safe to call from any thread

pub mod error;
pub mod evaluator;
pub mod luminance;
pub mod suggest;

pub use error::{EvaluateError, Result};
pub use evaluator::{
    ContrastEvaluator, conformance_report, evaluate, evaluate_aa, validate_threshold,
};
pub use luminance::{contrast_ratio, ratio_of, relative_luminance};
pub use suggest::{TextChoice, best_text_color, best_text_color_or_default};

// Re-export the data layer so callers need a single dependency
pub use lumen_types::{
    ColorError, ConformanceReport, ContrastConfig, ContrastRatios, ContrastResult, Luminance, Rgb,
    TextSize, WcagLevel,
};
