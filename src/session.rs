//! Capture-session state: one struct owns everything the frame loop touches.
//!
//! The UI layer (or the replay binary) holds a [`Session`] and feeds it one
//! pair of optional hand frames per video frame; there are no ambient
//! globals. Randomness is owned by the session and seedable so whole runs
//! reproduce.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::classifier::{self, Label, Prediction};
use crate::landmarks::HandFrame;
use crate::profiles;
use crate::speech::SpeechQueue;
use crate::stats::SessionStats;

/// Minimum confidence before a prediction is announced aloud.
const SPEAK_THRESHOLD: f32 = 60.0;

/// All mutable state for one user's capture session.
#[derive(Debug)]
pub struct Session {
    user_id: String,
    stats: SessionStats,
    speech: SpeechQueue,
    last_label: Label,
    last_spoken: Option<String>,
    running: bool,
    rng: StdRng,
}

impl Session {
    /// Session with OS-seeded randomness.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::with_rng(user_id, StdRng::from_os_rng())
    }

    /// Session with a fixed seed, for reproducible runs.
    pub fn with_seed(user_id: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(user_id, StdRng::seed_from_u64(seed))
    }

    fn with_rng(user_id: impl Into<String>, rng: StdRng) -> Self {
        let user_id = user_id.into();
        profiles::load(&user_id);
        Self {
            user_id,
            stats: SessionStats::new(),
            speech: SpeechQueue::new(),
            last_label: Label::NoHand,
            last_spoken: None,
            running: false,
            rng,
        }
    }

    /// Begin a capture session: stats start accumulating from here.
    pub fn start(&mut self) {
        self.stats.reset();
        self.stats.start();
        self.running = true;
        info!(user_id = %self.user_id, "capture session started");
    }

    /// Stop capture: zero the stats and return to the idle state.
    pub fn stop(&mut self) {
        self.stats.reset();
        self.speech.clear();
        self.last_label = Label::NoHand;
        self.last_spoken = None;
        self.running = false;
        info!("capture session stopped");
    }

    /// Whether a capture session is active.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Classify one frame and fold the result into the session state.
    ///
    /// Stats only accumulate while the session is running; announcement
    /// requests are made for confident predictions whose spoken text differs
    /// from the last one requested.
    pub fn process_frame(
        &mut self,
        left: Option<&HandFrame>,
        right: Option<&HandFrame>,
    ) -> Prediction {
        let prediction = classifier::predict(&self.user_id, left, right, &mut self.rng);
        if self.running {
            self.stats.observe(&prediction, self.last_label);
        }
        if prediction.confidence > SPEAK_THRESHOLD
            && let Some(text) = prediction.spoken_text()
            && self.last_spoken.as_deref() != Some(text.as_str())
        {
            self.speech.request(text.clone());
            self.last_spoken = Some(text);
        }
        self.last_label = prediction.label;
        prediction
    }

    /// Switch the active user, keeping the session running.
    ///
    /// An unknown id is accepted and behaves like the default profile.
    pub fn switch_user(&mut self, user_id: impl Into<String>) {
        let user_id = user_id.into();
        let known = profiles::load(&user_id);
        debug!(user_id = %user_id, known, "switching user");
        self.user_id = user_id;
    }

    /// The active user id.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The label most recently produced by the classifier.
    pub fn current_label(&self) -> Label {
        self.last_label
    }

    /// Read access to the session counters.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// The announcement queue, for the collaborator draining it.
    pub fn speech(&mut self) -> &mut SpeechQueue {
        &mut self.speech
    }
}
