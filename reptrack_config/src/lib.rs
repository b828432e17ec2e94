#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for the rep-tracking system.
//!
//! `Config` and sub-structs are deserialized from TOML and validated before a
//! session starts. Thresholds are fixed for the lifetime of a session; a value
//! outside its sane range is the only fatal condition in the core, so it is
//! rejected here, before any frame is processed.

use serde::Deserialize;

/// Keypoint acceptance and pacing.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct DetectionCfg {
    /// Minimum per-keypoint confidence; below this a constraint is
    /// indeterminate rather than failed.
    pub min_confidence: f32,
    /// Nominal detection rate in Hz. Replay sources use it to synthesize
    /// timestamps for frames recorded without one.
    pub fps: u32,
}

impl Default for DetectionCfg {
    fn default() -> Self {
        Self {
            min_confidence: 0.3,
            fps: 30,
        }
    }
}

/// Elbow-angle hysteresis band for the rep state machine.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
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

/// Posture constraints, thresholded in shoulder-width multiples so they are
/// invariant to subject size and camera distance.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct PostureCfg {
    /// Max wrist-to-hip distance, per side, as a multiple of shoulder width.
    pub plank_wrist_hip_mult: f32,
    /// Max shoulder-to-hip vertical separation (shoulder widths) before the
    /// pose is classified upright.
    pub standing_torso_mult: f32,
    /// Max left/right difference of the wrist-below-shoulder offsets, in cm.
    pub wrist_symmetry_cm: f32,
    /// Assumed physical shoulder width (cm) used to convert normalized
    /// distances to centimeters.
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
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
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

/// Overlay presentation.
#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(default)]
pub struct DisplayCfg {
    /// Mirror the overlay horizontally (selfie view).
    pub mirror: bool,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub detection: DetectionCfg,
    pub angles: AngleCfg,
    pub posture: PostureCfg,
    pub timing: TimingCfg,
    pub display: DisplayCfg,
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Detection
        if !(0.0..=1.0).contains(&self.detection.min_confidence) {
            eyre::bail!("detection.min_confidence must be in [0.0, 1.0]");
        }
        if self.detection.fps == 0 {
            eyre::bail!("detection.fps must be > 0");
        }
        if self.detection.fps > 240 {
            eyre::bail!("detection.fps is unreasonably large (>240)");
        }

        // Angles
        if !self.angles.elbow_down_deg.is_finite() || !self.angles.elbow_up_deg.is_finite() {
            eyre::bail!("angles must be finite");
        }
        if !(0.0..=180.0).contains(&self.angles.elbow_down_deg) {
            eyre::bail!("angles.elbow_down_deg must be in [0, 180]");
        }
        if !(0.0..=180.0).contains(&self.angles.elbow_up_deg) {
            eyre::bail!("angles.elbow_up_deg must be in [0, 180]");
        }
        if self.angles.elbow_down_deg >= self.angles.elbow_up_deg {
            eyre::bail!("angles.elbow_down_deg must be < angles.elbow_up_deg");
        }

        // Posture
        if !(self.posture.plank_wrist_hip_mult > 0.0) {
            eyre::bail!("posture.plank_wrist_hip_mult must be > 0");
        }
        if !(self.posture.standing_torso_mult > 0.0) {
            eyre::bail!("posture.standing_torso_mult must be > 0");
        }
        if self.posture.wrist_symmetry_cm.is_sign_negative()
            || !self.posture.wrist_symmetry_cm.is_finite()
        {
            eyre::bail!("posture.wrist_symmetry_cm must be >= 0");
        }
        if !(self.posture.shoulder_width_cm > 0.0) {
            eyre::bail!("posture.shoulder_width_cm must be > 0");
        }

        // Timing
        if self.timing.hold_ms > 60_000 {
            eyre::bail!("timing.hold_ms is unreasonably large (>60s)");
        }
        if self.timing.feedback_debounce_ms > 60_000 {
            eyre::bail!("timing.feedback_debounce_ms is unreasonably large (>60s)");
        }

        Ok(())
    }
}
