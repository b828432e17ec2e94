//! Runtime configuration for the tracking engine.
//!
//! These are the validated structs consumed by `RepTracker`. They are separate
//! from the TOML-deserialized schema in `reptrack_config`; see `conversions`
//! for the bridge.

/// Keypoint acceptance and pacing.
#[derive(Debug, Clone, Copy)]
pub struct DetectCfg {
    /// Minimum per-keypoint confidence. A required keypoint below this makes
    /// the consuming constraint indeterminate, which is distinct from failed.
    pub min_confidence: f32,
    /// Nominal detection rate in Hz. Replay sources use it to synthesize
    /// timestamps for frames recorded without one.
    pub fps: u32,
}

impl Default for DetectCfg {
    fn default() -> Self {
        Self {
            min_confidence: 0.3,
            fps: 30,
        }
    }
}

/// Elbow-angle hysteresis band.
///
/// Angles strictly between the two thresholds leave the state machine
/// unchanged, preventing chatter at the boundary. Both sides of the body must
/// independently cross a threshold before the signal counts.
#[derive(Debug, Clone, Copy)]
pub struct AngleCfg {
    /// Enter the down state strictly below this elbow angle (degrees).
    pub elbow_down_deg: f32,
    /// Enter the up state strictly above this elbow angle (degrees).
    pub elbow_up_deg: f32,
}

impl Default for AngleCfg {
    fn default() -> Self {
        Self {
            elbow_down_deg: 90.0,
            elbow_up_deg: 160.0,
        }
    }
}

/// Posture constraint thresholds, in shoulder-width multiples.
#[derive(Debug, Clone, Copy)]
pub struct PostureCfg {
    /// Max wrist-to-hip distance, per side, as a multiple of shoulder width.
    pub plank_wrist_hip_mult: f32,
    /// Max shoulder-to-hip vertical separation (shoulder widths) before the
    /// pose is classified upright.
    pub standing_torso_mult: f32,
    /// Max left/right difference of the wrist-below-shoulder offsets, in cm.
    pub wrist_symmetry_cm: f32,
    /// Assumed physical shoulder width (cm); the cm-per-unit reference.
    pub shoulder_width_cm: f32,
}

impl Default for PostureCfg {
    fn default() -> Self {
        Self {
            plank_wrist_hip_mult: 1.5,
            standing_torso_mult: 1.5,
            wrist_symmetry_cm: 15.0,
            shoulder_width_cm: 40.0,
        }
    }
}

/// Dwell and debounce windows.
#[derive(Debug, Clone, Copy)]
pub struct TimingCfg {
    /// Minimum dwell in the down state before a rep may complete (ms).
    /// 0 disables the gate.
    pub hold_ms: u64,
    /// A feedback cue must stay pending this long before it is shown (ms).
    pub feedback_debounce_ms: u64,
}

impl Default for TimingCfg {
    fn default() -> Self {
        Self {
            hold_ms: 0,
            feedback_debounce_ms: 250,
        }
    }
}
