// ABOUTME: Text color selection for a given background
// ABOUTME: Picks the candidate with the highest WCAG contrast ratio

use lumen_types::{ContrastRatios, Rgb};
use serde::Serialize;

use crate::luminance::{contrast_ratio, ratio_of, relative_luminance};

/// A chosen text color and the contrast it achieves
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextChoice {
    pub color: Rgb,
    pub ratio: f64,
}

impl TextChoice {
    /// Whether the choice meets AA for normal text
    pub fn meets_aa(&self) -> bool {
        self.ratio >= ContrastRatios::AA_NORMAL
    }
}

/// Find the best text color for a given background.
///
/// The first candidate wins on ties. Returns `None` for an empty candidate list.
pub fn best_text_color<I>(background: Rgb, candidates: I) -> Option<TextChoice>
where
    I: IntoIterator<Item = Rgb>,
{
    let background_luminance = relative_luminance(background);

    candidates
        .into_iter()
        .map(|color| TextChoice {
            color,
            ratio: ratio_of(background_luminance, relative_luminance(color)),
        })
        .fold(None, |best: Option<TextChoice>, candidate| match best {
            Some(current) if current.ratio >= candidate.ratio => Some(current),
            _ => Some(candidate),
        })
}

/// Choose between pure black and pure white text.
pub fn best_text_color_or_default(background: Rgb) -> TextChoice {
    let black = TextChoice {
        color: Rgb::BLACK,
        ratio: contrast_ratio(background, Rgb::BLACK),
    };
    let white = TextChoice {
        color: Rgb::WHITE,
        ratio: contrast_ratio(background, Rgb::WHITE),
    };

    if black.ratio >= white.ratio { black } else { white }
}
