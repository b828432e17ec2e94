//! User-facing status cues and their debouncer.
//!
//! Pose noise flips the raw cue frame to frame; showing that directly makes
//! the status text flicker. The debouncer commits a cue only after it has
//! been the pending value continuously for the configured window. It smooths
//! the display text only; rep counting and the diagnostic verdict are never
//! routed through it.

/// Coarse user-facing status, derived per frame from verdict and state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackCue {
    /// Required keypoints not visible with enough confidence.
    NotVisible,
    /// A hard constraint failed: not in a plank at all.
    GetIntoPlank,
    /// In position, but a soft constraint (alignment/symmetry) failed.
    FixForm,
    /// At the top; lower the chest to start the next rep.
    GoDown,
    /// At the bottom; push back up to complete the rep.
    PushUp,
}

impl std::fmt::Display for FeedbackCue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FeedbackCue::NotVisible => "Move into view of the camera",
            FeedbackCue::GetIntoPlank => "Get into plank position",
            FeedbackCue::FixForm => "Keep both arms even and under your body",
            FeedbackCue::GoDown => "Lower your chest",
            FeedbackCue::PushUp => "Push back up",
        })
    }
}

/// Pending/committed cue pair with a commit window.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    window_ms: u64,
    pending: FeedbackCue,
    pending_since_ms: u64,
    committed: FeedbackCue,
}

impl Debouncer {
    pub fn new(window_ms: u64, initial: FeedbackCue) -> Self {
        Self {
            window_ms,
            pending: initial,
            pending_since_ms: 0,
            committed: initial,
        }
    }

    /// Feed the latest raw cue; returns the committed cue for display.
    /// Any change of the incoming cue restarts the pending window.
    pub fn update(&mut self, cue: FeedbackCue, now_ms: u64) -> FeedbackCue {
        if cue != self.pending {
            self.pending = cue;
            self.pending_since_ms = now_ms;
        }
        if self.pending != self.committed
            && now_ms.saturating_sub(self.pending_since_ms) >= self.window_ms
        {
            self.committed = self.pending;
        }
        self.committed
    }

    pub fn committed(&self) -> FeedbackCue {
        self.committed
    }
}
