// ABOUTME: Error types for contrast evaluation
// ABOUTME: Wraps color construction failures and rejects unusable thresholds

use lumen_types::ColorError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EvaluateError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluateError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("Invalid contrast threshold {value}: must be a finite ratio between 1 and 21")]
    InvalidThreshold { value: f64 },
}

impl EvaluateError {
    /// Create an invalid threshold error
    pub fn invalid_threshold(value: f64) -> Self {
        Self::InvalidThreshold { value }
    }

    /// Whether the error came from a malformed color string
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Color(ColorError::InvalidHex { .. }))
    }

    /// Whether the error came from a channel outside 0..=255
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::Color(ColorError::ChannelOutOfRange { .. }))
    }
}
