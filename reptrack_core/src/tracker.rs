//! The unified per-frame tracking pass (`RepTracker`).
//!
//! Each detection cycle runs one synchronous pass: confidence gating,
//! constraint evaluation, elbow-angle measurement, the 3-state rep machine
//! with its hold gate, then the feedback debouncer. The pass is atomic (no
//! partial-frame state is ever observable) and infallible: degraded frames
//! come out as verdict data, never as errors.

use reptrack_traits::pose::{Frame, Landmark};

use crate::config::{AngleCfg, DetectCfg, PostureCfg, TimingCfg};
use crate::constraint::{self, FrameVerdict};
use crate::feedback::{Debouncer, FeedbackCue};
use crate::geometry::angle_deg;
use crate::hold::HoldGate;
use crate::normalize::NormalizedFrame;
use crate::status::{AngleSignal, ElbowAngles, RepState, StepReport};

pub struct RepTracker {
    pub(crate) detect: DetectCfg,
    pub(crate) angles: AngleCfg,
    pub(crate) posture: PostureCfg,
    pub(crate) timing: TimingCfg,

    pub(crate) state: RepState,
    pub(crate) rep_count: u32,
    pub(crate) hold: HoldGate,
    pub(crate) debouncer: Debouncer,
}

impl std::fmt::Debug for RepTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepTracker")
            .field("state", &self.state)
            .field("rep_count", &self.rep_count)
            .finish()
    }
}

impl RepTracker {
    /// Start building a tracker.
    pub fn builder() -> crate::builder::RepTrackerBuilder {
        crate::builder::RepTrackerBuilder::default()
    }

    pub fn state(&self) -> RepState {
        self.state
    }

    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    /// Reset per-session state. Call before a new session; the config is
    /// untouched (thresholds may only change between sessions).
    pub fn begin(&mut self) {
        self.state = RepState::Idle;
        self.rep_count = 0;
        self.hold = HoldGate::new(self.timing.hold_ms);
        self.debouncer = Debouncer::new(self.timing.feedback_debounce_ms, FeedbackCue::NotVisible);
    }

    /// Process one keypoint frame and return the frame's full report.
    pub fn step(&mut self, frame: &Frame) -> StepReport {
        let now = frame.timestamp_ms;
        let nf = NormalizedFrame::new(frame, self.detect.min_confidence);

        let verdict = constraint::evaluate(&nf, &self.posture);
        let elbow = elbow_angles(&nf);
        let signal = elbow.classify(&self.angles);
        tracing::trace!(
            at_ms = now,
            full_pass = verdict.full_pass(),
            hard_fail = verdict.hard_fail(),
            ?signal,
            "frame verdict"
        );

        let prev = self.state;
        let mut rep_counted = false;

        if verdict.hard_fail() {
            // Posture abandoned (standing / raised arms): forget any progress.
            self.state = RepState::Idle;
            self.hold.reset();
        } else {
            match (self.state, signal) {
                (RepState::Idle, AngleSignal::BelowDown) => {
                    self.state = RepState::Down;
                    self.hold.arm(now);
                }
                (RepState::Idle, AngleSignal::AboveUp) => {
                    self.state = RepState::Up;
                }
                (RepState::Down, AngleSignal::AboveUp) => {
                    // The only counting edge: full pass on the triggering
                    // frame plus enough dwell at the bottom.
                    if verdict.full_pass() && self.hold.satisfied(now) {
                        self.state = RepState::Up;
                        self.hold.reset();
                        self.rep_count += 1;
                        rep_counted = true;
                        tracing::debug!(rep = self.rep_count, at_ms = now, "rep counted");
                    }
                }
                (RepState::Up, AngleSignal::BelowDown) => {
                    self.state = RepState::Down;
                    self.hold.arm(now);
                }
                // In-band, unknown, or already at the matching extreme.
                _ => {}
            }
        }

        if prev != self.state {
            tracing::trace!(from = %prev, to = %self.state, at_ms = now, "state change");
        }

        let cue = self
            .debouncer
            .update(raw_cue(&verdict, self.state), now);

        StepReport {
            timestamp_ms: now,
            state: self.state,
            rep_count: self.rep_count,
            rep_counted,
            elbow,
            verdict,
            cue,
        }
    }
}

/// Per-side shoulder–elbow–wrist angles; a side is `None` when a keypoint is
/// gated out or the rays are degenerate.
fn elbow_angles(nf: &NormalizedFrame<'_>) -> ElbowAngles {
    let side = |shoulder, elbow, wrist| {
        let s = nf.point(shoulder)?;
        let e = nf.point(elbow)?;
        let w = nf.point(wrist)?;
        angle_deg(s, e, w)
    };
    ElbowAngles {
        left: side(Landmark::LeftShoulder, Landmark::LeftElbow, Landmark::LeftWrist),
        right: side(
            Landmark::RightShoulder,
            Landmark::RightElbow,
            Landmark::RightWrist,
        ),
    }
}

/// The raw (undebounced) cue for this frame.
fn raw_cue(verdict: &FrameVerdict, state: RepState) -> FeedbackCue {
    if verdict.hard_fail() {
        FeedbackCue::GetIntoPlank
    } else if verdict.any_indeterminate() {
        FeedbackCue::NotVisible
    } else if !verdict.full_pass() {
        FeedbackCue::FixForm
    } else if state == RepState::Down {
        FeedbackCue::PushUp
    } else {
        FeedbackCue::GoDown
    }
}
