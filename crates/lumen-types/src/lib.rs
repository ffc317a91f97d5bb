// ABOUTME: Pure data types with no cross-crate dependencies
// ABOUTME: Foundation layer for all other lumen crates

pub mod color;
pub mod config;
pub mod contrast;

// Re-export commonly used types
pub use color::{Channel, ColorError, HexErrorReason, Rgb};
pub use config::ContrastConfig;
pub use contrast::{
    ConformanceReport, ContrastRatios, ContrastResult, Luminance, TextSize, WcagLevel,
};
