//! Per-frame outputs of the tracking engine.

use crate::config::AngleCfg;
use crate::constraint::FrameVerdict;
use crate::feedback::FeedbackCue;

/// The rep state machine's three states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepState {
    /// Initial / invalid posture; no rep in progress.
    Idle,
    /// Bottom of the movement (elbow angle below the down threshold).
    Down,
    /// Top of the movement (elbow angle above the up threshold).
    Up,
}

impl std::fmt::Display for RepState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RepState::Idle => "idle",
            RepState::Down => "down",
            RepState::Up => "up",
        })
    }
}

/// Per-side elbow angles (shoulder–elbow–wrist), degrees. A side is `None`
/// when any of its three keypoints is gated out or the geometry is
/// degenerate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElbowAngles {
    pub left: Option<f32>,
    pub right: Option<f32>,
}

/// How the two-sided elbow signal relates to the hysteresis band.
///
/// Both sides must independently cross a threshold; a one-arm rep reads as
/// `InBand` at best and never transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleSignal {
    /// Both elbows strictly below the down threshold.
    BelowDown,
    /// Both elbows strictly above the up threshold.
    AboveUp,
    /// Inside the hysteresis band (or sides disagree): no transition.
    InBand,
    /// At least one side unmeasurable this frame: no transition.
    Unknown,
}

impl ElbowAngles {
    pub fn classify(&self, cfg: &AngleCfg) -> AngleSignal {
        let (Some(l), Some(r)) = (self.left, self.right) else {
            return AngleSignal::Unknown;
        };
        if l < cfg.elbow_down_deg && r < cfg.elbow_down_deg {
            AngleSignal::BelowDown
        } else if l > cfg.elbow_up_deg && r > cfg.elbow_up_deg {
            AngleSignal::AboveUp
        } else {
            AngleSignal::InBand
        }
    }
}

/// Everything one frame pass produces. The verdict and angles are always the
/// latest, undebounced values (the debug consumer's contract); only `cue`
/// goes through the feedback debouncer.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub timestamp_ms: u64,
    pub state: RepState,
    pub rep_count: u32,
    /// True exactly on the down→up edge that credited a rep.
    pub rep_counted: bool,
    pub elbow: ElbowAngles,
    pub verdict: FrameVerdict,
    /// Debounced user-facing cue.
    pub cue: FeedbackCue,
}
