//! Practice guides for signs in the vocabulary.
//!
//! A lookup miss is an expected outcome carried in the result, not an error:
//! the UI shows the message verbatim and the session keeps running.

use crate::landmarks::LANDMARK_COUNT;
use crate::vocabulary::Sign;

/// Demonstration pose shown alongside every guide: a canned 21-point hand
/// skeleton in normalized coordinates, wrist first, then thumb through pinky.
pub const GUIDE_SKELETON: [[f32; 3]; LANDMARK_COUNT] = [
    [0.5, 0.5, 0.0],
    [0.4, 0.6, -0.1],
    [0.35, 0.65, -0.15],
    [0.3, 0.7, -0.2],
    [0.25, 0.75, -0.25],
    [0.6, 0.4, -0.05],
    [0.65, 0.3, -0.1],
    [0.7, 0.2, -0.15],
    [0.75, 0.1, -0.2],
    [0.55, 0.45, -0.05],
    [0.55, 0.35, -0.1],
    [0.55, 0.25, -0.15],
    [0.55, 0.15, -0.2],
    [0.5, 0.4, -0.05],
    [0.45, 0.3, -0.1],
    [0.4, 0.2, -0.15],
    [0.35, 0.1, -0.2],
    [0.45, 0.5, -0.05],
    [0.4, 0.4, -0.1],
    [0.35, 0.3, -0.15],
    [0.3, 0.2, -0.2],
];

/// Outcome of a practice-guide lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Guide {
    /// The text resolved to a known sign.
    Found {
        /// The sign the text resolved to.
        sign: Sign,
        /// Human-readable practice instructions.
        description: String,
        /// Demonstration skeleton for overlay collaborators.
        skeleton: &'static [[f32; 3]; LANDMARK_COUNT],
    },
    /// The text matched nothing in the vocabulary.
    NotFound {
        /// User-facing explanation with a suggestion to try again.
        message: String,
    },
}

/// Resolve free text to a practice guide.
pub fn lookup(text: &str) -> Guide {
    match Sign::from_text(text) {
        Some(sign) => Guide::Found {
            sign,
            description: format!(
                "Practice guide for '{sign}': watch the demonstration pose, mirror it \
                 slowly, and hold the final position for a moment before releasing."
            ),
            skeleton: &GUIDE_SKELETON,
        },
        None => Guide::NotFound {
            message: format!(
                "Sign '{text}' is not in the current dataset. Try 'hello' or 'thank you' \
                 (case-insensitive)."
            ),
        },
    }
}
