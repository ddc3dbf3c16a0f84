//! Session statistics accumulated across classifier invocations.

use std::time::{Duration, Instant};

use crate::classifier::{Label, Prediction};

/// Counters for one capture session.
///
/// Created when capture starts, zeroed when it stops; nothing here survives
/// a session.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    signs_detected: u32,
    confidence_sum: f32,
    phrases_completed: u32,
    started_at: Option<Instant>,
}

impl SessionStats {
    /// Fresh, idle stats with no counters running.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp the session start time.
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Account for one prediction.
    ///
    /// Only a sign label that differs from the previously displayed one
    /// counts as a new detection; the idle sentinel and repeats of the
    /// current sign leave every counter untouched.
    pub fn observe(&mut self, prediction: &Prediction, previous: Label) {
        if prediction.label.is_idle() || prediction.label == previous {
            return;
        }
        self.signs_detected += 1;
        self.confidence_sum += prediction.confidence;
        if prediction.phrase_completion.is_some() {
            self.phrases_completed += 1;
        }
    }

    /// Number of distinct signs detected so far.
    pub fn signs_detected(&self) -> u32 {
        self.signs_detected
    }

    /// Number of predictions that carried a phrase completion.
    pub fn phrases_completed(&self) -> u32 {
        self.phrases_completed
    }

    /// Mean confidence over counted detections, 0 when none were counted.
    pub fn average_confidence(&self) -> f32 {
        if self.signs_detected == 0 {
            0.0
        } else {
            self.confidence_sum / self.signs_detected as f32
        }
    }

    /// Time since the session started, if it is running.
    pub fn elapsed(&self) -> Option<Duration> {
        self.started_at.map(|started| started.elapsed())
    }

    /// Zero all counters and clear the start timestamp.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
