//! The closed vocabulary of signs the recognizer can report.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the known signs.
///
/// The ordering of [`Sign::ALL`] matches the demo dataset the vocabulary was
/// lifted from; fallback sampling draws uniformly over that array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    /// Open raised hand, fingers together.
    Hello,
    /// Flat hand moving out from the chin.
    ThankYou,
    /// Fist with the thumb up.
    Yes,
    /// Fist with the thumb down.
    No,
    /// Extended thumb, index and pinky.
    ILoveYou,
    /// One fist on an open palm, raised.
    Help,
    /// W-hand tapped at the chin.
    Water,
    /// Flattened fingers to the mouth.
    Food,
    /// Flat hand from chin to palm.
    Good,
    /// Fingers down off the chin.
    Bad,
    /// Fingertips of both hands tapped together.
    More,
    /// Flat hand circling the chest.
    Please,
    /// Fist circling the chest.
    Sorry,
    /// Two fingers tapped twice.
    Name,
    /// Fingertips to cheek, then ear.
    Home,
    /// Hooked index fingers.
    Friends,
    /// Hand lifting from palm to forehead.
    Learn,
}

impl Sign {
    /// Every known sign, in dataset order.
    pub const ALL: [Sign; 17] = [
        Sign::Hello,
        Sign::ThankYou,
        Sign::Yes,
        Sign::No,
        Sign::ILoveYou,
        Sign::Help,
        Sign::Water,
        Sign::Food,
        Sign::Good,
        Sign::Bad,
        Sign::More,
        Sign::Please,
        Sign::Sorry,
        Sign::Name,
        Sign::Home,
        Sign::Friends,
        Sign::Learn,
    ];

    /// Canonical snake_case label, as stored in captures and configs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Hello => "hello",
            Sign::ThankYou => "thank_you",
            Sign::Yes => "yes",
            Sign::No => "no",
            Sign::ILoveYou => "i_love_you",
            Sign::Help => "help",
            Sign::Water => "water",
            Sign::Food => "food",
            Sign::Good => "good",
            Sign::Bad => "bad",
            Sign::More => "more",
            Sign::Please => "please",
            Sign::Sorry => "sorry",
            Sign::Name => "name",
            Sign::Home => "home",
            Sign::Friends => "friends",
            Sign::Learn => "learn",
        }
    }

    /// Spoken form of the label, with underscores rendered as spaces.
    pub fn spoken(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Resolve free text to a sign, ignoring case and collapsing whitespace
    /// to underscores, so both "Thank You" and "thank_you" match.
    pub fn from_text(text: &str) -> Option<Sign> {
        let normalized = text
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        Sign::ALL
            .into_iter()
            .find(|sign| sign.as_str() == normalized)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spoken())
    }
}
