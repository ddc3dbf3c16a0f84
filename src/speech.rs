//! Announcement queue for the text-to-speech collaborator.
//!
//! The synthesis engine itself is external; this module only models the
//! one-utterance-at-a-time discipline the demo enforced: a request while an
//! utterance plays queues behind it, except when the text equals what is
//! already playing, which is dropped.

use std::collections::VecDeque;

use tracing::trace;

/// Queue of pending announcements with at most one utterance in flight.
#[derive(Debug, Clone, Default)]
pub struct SpeechQueue {
    current: Option<String>,
    pending: VecDeque<String>,
}

impl SpeechQueue {
    /// An idle queue with nothing playing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for `text` to be spoken.
    ///
    /// Returns the text to hand to the synthesis engine when the queue was
    /// idle; otherwise the request is queued (or dropped as a duplicate of
    /// the in-flight utterance) and `None` is returned.
    pub fn request(&mut self, text: impl Into<String>) -> Option<&str> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }
        if let Some(playing) = &self.current {
            if *playing == text {
                trace!(text = %text, "dropping duplicate of in-flight utterance");
            } else {
                self.pending.push_back(text);
            }
            return None;
        }
        self.current = Some(text);
        self.current.as_deref()
    }

    /// Mark the in-flight utterance finished and surface the next one.
    ///
    /// The returned text, if any, becomes the new in-flight utterance and
    /// should be handed to the synthesis engine.
    pub fn finish(&mut self) -> Option<&str> {
        self.current = self.pending.pop_front();
        self.current.as_deref()
    }

    /// The utterance currently playing.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// True while an utterance is in flight.
    pub fn is_speaking(&self) -> bool {
        self.current.is_some()
    }

    /// Number of queued requests behind the in-flight utterance.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drop everything, including the in-flight utterance.
    ///
    /// Callers are expected to cancel the engine side themselves; the queue
    /// only forgets its bookkeeping.
    pub fn clear(&mut self) {
        self.current = None;
        self.pending.clear();
    }
}
