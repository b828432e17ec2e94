//! `From` implementations bridging `reptrack_config` types to core types.
//!
//! These keep the CLI free of field-by-field mapping.

use crate::config::{AngleCfg, DetectCfg, PostureCfg, TimingCfg};

impl From<&reptrack_config::DetectionCfg> for DetectCfg {
    fn from(c: &reptrack_config::DetectionCfg) -> Self {
        Self {
            min_confidence: c.min_confidence,
            fps: c.fps,
        }
    }
}

impl From<&reptrack_config::AngleCfg> for AngleCfg {
    fn from(c: &reptrack_config::AngleCfg) -> Self {
        Self {
            elbow_down_deg: c.elbow_down_deg,
            elbow_up_deg: c.elbow_up_deg,
        }
    }
}

impl From<&reptrack_config::PostureCfg> for PostureCfg {
    fn from(c: &reptrack_config::PostureCfg) -> Self {
        Self {
            plank_wrist_hip_mult: c.plank_wrist_hip_mult,
            standing_torso_mult: c.standing_torso_mult,
            wrist_symmetry_cm: c.wrist_symmetry_cm,
            shoulder_width_cm: c.shoulder_width_cm,
        }
    }
}

impl From<&reptrack_config::TimingCfg> for TimingCfg {
    fn from(c: &reptrack_config::TimingCfg) -> Self {
        Self {
            hold_ms: c.hold_ms,
            feedback_debounce_ms: c.feedback_debounce_ms,
        }
    }
}
