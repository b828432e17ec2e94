//! Builder for `RepTracker`. All thresholds are validated on `build()`,
//! the single fatal path in the core, taken before any frame is processed.

use crate::config::{AngleCfg, DetectCfg, PostureCfg, TimingCfg};
use crate::error::{BuildError, Result};
use crate::feedback::{Debouncer, FeedbackCue};
use crate::hold::HoldGate;
use crate::status::RepState;
use crate::tracker::RepTracker;

#[derive(Default)]
pub struct RepTrackerBuilder {
    detect: Option<DetectCfg>,
    angles: Option<AngleCfg>,
    posture: Option<PostureCfg>,
    timing: Option<TimingCfg>,
}

impl RepTrackerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detect(mut self, detect: DetectCfg) -> Self {
        self.detect = Some(detect);
        self
    }
    pub fn with_angles(mut self, angles: AngleCfg) -> Self {
        self.angles = Some(angles);
        self
    }
    pub fn with_posture(mut self, posture: PostureCfg) -> Self {
        self.posture = Some(posture);
        self
    }
    pub fn with_timing(mut self, timing: TimingCfg) -> Self {
        self.timing = Some(timing);
        self
    }

    /// Populate every section from a deserialized config file.
    pub fn with_config(self, cfg: &reptrack_config::Config) -> Self {
        self.with_detect((&cfg.detection).into())
            .with_angles((&cfg.angles).into())
            .with_posture((&cfg.posture).into())
            .with_timing((&cfg.timing).into())
    }

    /// Validate and build. Returns a typed `BuildError` for any threshold
    /// outside its sane range.
    pub fn build(self) -> Result<RepTracker> {
        let detect = self.detect.unwrap_or_default();
        let angles = self.angles.unwrap_or_default();
        let posture = self.posture.unwrap_or_default();
        let timing = self.timing.unwrap_or_default();

        if !detect.min_confidence.is_finite() || !(0.0..=1.0).contains(&detect.min_confidence) {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "min_confidence must be in [0.0, 1.0]",
            )));
        }
        if detect.fps == 0 {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "fps must be > 0",
            )));
        }
        if !angles.elbow_down_deg.is_finite()
            || !(0.0..=180.0).contains(&angles.elbow_down_deg)
        {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "elbow_down_deg must be in [0, 180]",
            )));
        }
        if !angles.elbow_up_deg.is_finite() || !(0.0..=180.0).contains(&angles.elbow_up_deg) {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "elbow_up_deg must be in [0, 180]",
            )));
        }
        if angles.elbow_down_deg >= angles.elbow_up_deg {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "elbow_down_deg must be below elbow_up_deg",
            )));
        }
        if !posture.plank_wrist_hip_mult.is_finite() || posture.plank_wrist_hip_mult <= 0.0 {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "plank_wrist_hip_mult must be > 0",
            )));
        }
        if !posture.standing_torso_mult.is_finite() || posture.standing_torso_mult <= 0.0 {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "standing_torso_mult must be > 0",
            )));
        }
        if !posture.wrist_symmetry_cm.is_finite() || posture.wrist_symmetry_cm < 0.0 {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "wrist_symmetry_cm must be >= 0",
            )));
        }
        if !posture.shoulder_width_cm.is_finite() || posture.shoulder_width_cm <= 0.0 {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "shoulder_width_cm must be > 0",
            )));
        }

        Ok(RepTracker {
            detect,
            angles,
            posture,
            state: RepState::Idle,
            rep_count: 0,
            hold: HoldGate::new(timing.hold_ms),
            debouncer: Debouncer::new(timing.feedback_debounce_ms, FeedbackCue::NotVisible),
            timing,
        })
    }
}
