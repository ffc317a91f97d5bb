// ABOUTME: WCAG 2.x relative luminance and contrast ratio formulas
// ABOUTME: Pure functions over sRGB colors with no state and no side effects

use lumen_types::{ContrastRatios, Luminance, Rgb};

/// Channels at or below this normalized value use the linear segment
const LINEAR_SEGMENT_CUTOFF: f64 = 0.03928;

/// Flare term added to both luminances before dividing
const FLARE: f64 = 0.05;

/// Convert one 8-bit sRGB channel to linear light.
fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= LINEAR_SEGMENT_CUTOFF {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance for contrast calculations.
///
/// Based on the WCAG 2.x definition. The result is clamped to [0, 1] since
/// the channel weights only sum to one up to rounding.
pub fn relative_luminance(color: Rgb) -> Luminance {
    let r_linear = srgb_to_linear(color.r);
    let g_linear = srgb_to_linear(color.g);
    let b_linear = srgb_to_linear(color.b);

    let luminance = 0.2126 * r_linear + 0.7152 * g_linear + 0.0722 * b_linear;
    Luminance(luminance.clamp(0.0, 1.0))
}

/// Calculate the contrast ratio between two colors. Symmetric in its arguments.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    ratio_of(relative_luminance(a), relative_luminance(b))
}

/// Contrast ratio between two already computed luminances
pub fn ratio_of(a: Luminance, b: Luminance) -> f64 {
    let lighter = a.0.max(b.0);
    let darker = a.0.min(b.0);

    ((lighter + FLARE) / (darker + FLARE)).clamp(ContrastRatios::MIN, ContrastRatios::MAX)
}
