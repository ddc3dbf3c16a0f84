//! Per-user recognition profiles.
//!
//! Profiles only carry an accuracy bias used to perturb fallback confidence;
//! they are rebuilt identically each session and never persisted.

use tracing::{debug, warn};

/// User id assumed when none was selected.
pub const DEFAULT_USER: &str = "default";

/// A user's simulated recognition profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserProfile {
    /// Bias in `[0, 1]` subtracted (scaled by 100) from fallback confidence.
    pub accuracy_bias: f32,
}

/// The built-in roster of demo users.
const PROFILES: &[(&str, UserProfile)] = &[
    (DEFAULT_USER, UserProfile { accuracy_bias: 0.0 }),
    ("user1", UserProfile { accuracy_bias: 0.1 }),
    ("user2", UserProfile { accuracy_bias: 0.05 }),
    ("user3", UserProfile { accuracy_bias: 0.15 }),
];

/// Look up a user's profile.
///
/// Unknown ids log a warning and fall back to the zero-bias default; the
/// classifier never fails on account of a user id.
pub fn profile_for(user_id: &str) -> UserProfile {
    match lookup(user_id) {
        Some(profile) => profile,
        None => {
            warn!(user_id, "unknown user profile, using default bias");
            UserProfile { accuracy_bias: 0.0 }
        }
    }
}

/// Report whether a profile exists for the id, logging the outcome.
///
/// Mirrors the demo's profile "load" step: there is nothing to load, only a
/// membership check the UI surfaces when switching users.
pub fn load(user_id: &str) -> bool {
    let found = lookup(user_id).is_some();
    if found {
        debug!(user_id, "loaded user profile");
    } else {
        warn!(user_id, "user profile not found, default behavior applies");
    }
    found
}

fn lookup(user_id: &str) -> Option<UserProfile> {
    PROFILES
        .iter()
        .find(|(id, _)| *id == user_id)
        .map(|(_, profile)| *profile)
}
