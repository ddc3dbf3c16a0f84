//! Library exports for the handspeak gesture recognition pipeline.
/// Filesystem locations for config and logs.
pub mod app_dirs;
/// Recorded landmark captures (JSON Lines).
pub mod capture;
/// The landmark-to-label gesture classifier.
pub mod classifier;
/// Persisted application settings.
pub mod config;
/// Practice guides for vocabulary signs.
pub mod guide;
/// Hand landmark frames and geometry helpers.
pub mod landmarks;
/// Tracing setup.
pub mod logging;
/// Per-user recognition profiles.
pub mod profiles;
/// Geometric gesture rules.
pub mod rules;
/// Capture-session state.
pub mod session;
/// Announcement queue for the speech collaborator.
pub mod speech;
/// Session statistics.
pub mod stats;
/// The closed sign vocabulary.
pub mod vocabulary;

#[cfg(test)]
pub(crate) mod test_poses;
