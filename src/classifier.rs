//! The landmark-to-label gesture classifier.
//!
//! Geometric rules run first; when none matches, the demo falls back to a
//! randomized prediction perturbed by the user's accuracy bias. Randomness is
//! always supplied by the caller so seeded runs reproduce exactly.

use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::trace;

use crate::landmarks::{HandFrame, select_active_hand};
use crate::profiles;
use crate::rules::{RULE_CONFIDENCE, match_gesture};
use crate::vocabulary::Sign;

/// Confidence below which fallback predictions offer alternatives.
const ALTERNATIVES_BELOW: f32 = 80.0;

/// Most alternatives ever attached to a prediction.
const MAX_ALTERNATIVES: usize = 3;

/// Canned phrase completions: sign, trigger probability, completion text.
const PHRASE_COMPLETIONS: &[(Sign, f32, &str)] = &[
    (Sign::ThankYou, 0.3, "Thank you very much!"),
    (Sign::Hello, 0.3, "Hello there!"),
    (Sign::Yes, 0.4, "Yes, I agree!"),
];

/// What one classification call decided the frame shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// A sign from the known vocabulary.
    Sign(Sign),
    /// Neither hand frame was present or valid.
    NoHand,
}

impl Label {
    /// The underlying sign, if any.
    pub fn sign(&self) -> Option<Sign> {
        match self {
            Label::Sign(sign) => Some(*sign),
            Label::NoHand => None,
        }
    }

    /// True for the sentinel that carries no detection.
    pub fn is_idle(&self) -> bool {
        matches!(self, Label::NoHand)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Sign(sign) => write!(f, "{sign}"),
            Label::NoHand => f.write_str("no hand detected"),
        }
    }
}

/// The output of one classification call.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Predicted label, or the no-hand sentinel.
    pub label: Label,
    /// Confidence in `[0, 100]`, rounded to two decimals on the fallback path.
    pub confidence: f32,
    /// Up to three distinct alternative signs, never including the label.
    pub alternatives: Vec<Sign>,
    /// Canned phrase occasionally attached to conversational signs.
    pub phrase_completion: Option<&'static str>,
}

impl Prediction {
    fn no_hand() -> Self {
        Self {
            label: Label::NoHand,
            confidence: 0.0,
            alternatives: Vec::new(),
            phrase_completion: None,
        }
    }

    /// Text an announcement collaborator should utter for this prediction:
    /// the phrase completion when present, otherwise the spoken label.
    /// The no-hand sentinel is never announced.
    pub fn spoken_text(&self) -> Option<String> {
        if let Some(phrase) = self.phrase_completion {
            return Some(phrase.to_string());
        }
        self.label.sign().map(|sign| sign.spoken())
    }
}

/// Classify one frame's worth of hand landmarks.
///
/// Hand selection is deterministic (right preferred, then left). The rule
/// path is fully deterministic as well; only the fallback and the phrase
/// completion draw from `rng`.
pub fn predict<R: Rng + ?Sized>(
    user_id: &str,
    left: Option<&HandFrame>,
    right: Option<&HandFrame>,
    rng: &mut R,
) -> Prediction {
    let Some(hand) = select_active_hand(left, right) else {
        return Prediction::no_hand();
    };

    let mut prediction = match match_gesture(hand) {
        Some(sign) => {
            trace!(sign = sign.as_str(), "gesture rule matched");
            Prediction {
                label: Label::Sign(sign),
                confidence: RULE_CONFIDENCE,
                alternatives: Vec::new(),
                phrase_completion: None,
            }
        }
        None => fallback_prediction(user_id, rng),
    };

    if let Some(sign) = prediction.label.sign() {
        prediction.phrase_completion = draw_phrase_completion(sign, rng);
    }
    prediction
}

/// Randomized stand-in for a trained model, biased per user profile.
fn fallback_prediction<R: Rng + ?Sized>(user_id: &str, rng: &mut R) -> Prediction {
    let profile = profiles::profile_for(user_id);
    let sign = Sign::ALL[rng.random_range(0..Sign::ALL.len())];

    let raw = rng.random_range(30.0_f32..99.0);
    let biased = (raw - profile.accuracy_bias * 100.0).max(0.0);
    let confidence = round_to_hundredths(biased);

    let alternatives = if confidence < ALTERNATIVES_BELOW {
        draw_alternatives(sign, rng)
    } else {
        Vec::new()
    };

    Prediction {
        label: Label::Sign(sign),
        confidence,
        alternatives,
        phrase_completion: None,
    }
}

/// 1 to 3 distinct signs sampled without replacement from the rest of the
/// vocabulary.
fn draw_alternatives<R: Rng + ?Sized>(predicted: Sign, rng: &mut R) -> Vec<Sign> {
    let others: Vec<Sign> = Sign::ALL
        .into_iter()
        .filter(|sign| *sign != predicted)
        .collect();
    let count = rng.random_range(1..=MAX_ALTERNATIVES).min(others.len());
    others.choose_multiple(rng, count).copied().collect()
}

fn draw_phrase_completion<R: Rng + ?Sized>(sign: Sign, rng: &mut R) -> Option<&'static str> {
    PHRASE_COMPLETIONS
        .iter()
        .find(|(candidate, _, _)| *candidate == sign)
        .and_then(|(_, probability, phrase)| {
            if rng.random::<f32>() < *probability {
                Some(*phrase)
            } else {
                None
            }
        })
}

fn round_to_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
