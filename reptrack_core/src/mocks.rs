//! Test and helper mocks for reptrack_core

use reptrack_traits::pose::{Frame, Keypoint, Landmark};

/// A pose source that always errors on read; useful when exercising the
/// source-failure path of the runner.
pub struct FailingPoseSource;

impl reptrack_traits::PoseSource for FailingPoseSource {
    fn next_frame(
        &mut self,
        _timeout: std::time::Duration,
    ) -> Result<Option<Frame>, Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("pose source offline")))
    }
}

/// Replays a pre-built frame sequence, then reports end of stream.
pub struct ScriptedPoseSource {
    frames: std::collections::VecDeque<Frame>,
}

impl ScriptedPoseSource {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames: frames.into(),
        }
    }
}

impl reptrack_traits::PoseSource for ScriptedPoseSource {
    fn next_frame(
        &mut self,
        _timeout: std::time::Duration,
    ) -> Result<Option<Frame>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.frames.pop_front())
    }
}

/// Synthesizes pushup frames with a controllable elbow angle.
///
/// Coordinates are normalized with y growing downward, matching detector
/// output. Shoulders sit 0.1 apart, so the shoulder width unit is 0.1 and
/// posture ratios come out in round numbers. Elbows are placed on the
/// perpendicular bisector of the shoulder-wrist segment so that the angle
/// measured at the elbow equals `elbow_deg` exactly.
#[derive(Debug, Clone)]
pub struct PushupPose {
    pub left_shoulder: (f32, f32),
    pub right_shoulder: (f32, f32),
    pub left_hip: (f32, f32),
    pub right_hip: (f32, f32),
    pub left_wrist: (f32, f32),
    pub right_wrist: (f32, f32),
    pub elbow_deg: f32,
    pub confidence: f32,
    pub hidden: Vec<Landmark>,
}

impl Default for PushupPose {
    fn default() -> Self {
        Self {
            left_shoulder: (0.45, 0.50),
            right_shoulder: (0.55, 0.50),
            left_hip: (0.73, 0.55),
            right_hip: (0.77, 0.55),
            left_wrist: (0.70, 0.62),
            right_wrist: (0.80, 0.62),
            elbow_deg: 170.0,
            confidence: 0.9,
            hidden: Vec::new(),
        }
    }
}

impl PushupPose {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the elbow angle in degrees for both arms.
    pub fn elbow_deg(mut self, deg: f32) -> Self {
        self.elbow_deg = deg;
        self
    }

    /// Raise the torso into an upright stance: shoulders well above hips.
    pub fn standing(mut self) -> Self {
        self.left_shoulder.1 = 0.30;
        self.right_shoulder.1 = 0.30;
        self.left_hip.1 = 0.60;
        self.right_hip.1 = 0.60;
        self
    }

    /// Pull both wrists `mult` shoulder widths away from the hips
    /// horizontally, breaking plank alignment once `mult` exceeds the
    /// configured limit.
    pub fn plank_break(mut self, mult: f32) -> Self {
        let sw = self.shoulder_width();
        self.left_wrist = (self.left_hip.0 + mult * sw, self.left_hip.1);
        self.right_wrist = (self.right_hip.0 + mult * sw, self.right_hip.1);
        self
    }

    /// Lift both wrists above shoulder level (hands off the floor).
    pub fn wrists_raised(mut self) -> Self {
        let dy = 0.05;
        self.left_wrist.1 = self.left_shoulder.1 - dy;
        self.right_wrist.1 = self.right_shoulder.1 - dy;
        self
    }

    /// Shift the right wrist down by `dy` normalized units, making the
    /// stance asymmetric.
    pub fn wrist_skew(mut self, dy: f32) -> Self {
        self.right_wrist.1 += dy;
        self
    }

    /// Drop every keypoint's confidence below any sane detection threshold.
    pub fn low_confidence(mut self) -> Self {
        self.confidence = 0.1;
        self
    }

    /// Omit the given landmark from generated frames entirely.
    pub fn hide(mut self, lm: Landmark) -> Self {
        self.hidden.push(lm);
        self
    }

    pub fn shoulder_width(&self) -> f32 {
        let dx = self.right_shoulder.0 - self.left_shoulder.0;
        let dy = self.right_shoulder.1 - self.left_shoulder.1;
        (dx * dx + dy * dy).sqrt()
    }

    /// Build the frame for a given timestamp. Elbows are derived from the
    /// current shoulder and wrist positions, so call this after any tweaks.
    pub fn at(&self, timestamp_ms: u64) -> Frame {
        let left_elbow = elbow_for(self.left_shoulder, self.left_wrist, self.elbow_deg);
        let right_elbow = elbow_for(self.right_shoulder, self.right_wrist, self.elbow_deg);

        let mut frame = Frame::new(timestamp_ms);
        let points = [
            (Landmark::LeftShoulder, self.left_shoulder),
            (Landmark::RightShoulder, self.right_shoulder),
            (Landmark::LeftElbow, left_elbow),
            (Landmark::RightElbow, right_elbow),
            (Landmark::LeftWrist, self.left_wrist),
            (Landmark::RightWrist, self.right_wrist),
            (Landmark::LeftHip, self.left_hip),
            (Landmark::RightHip, self.right_hip),
        ];
        for (lm, (x, y)) in points {
            if self.hidden.contains(&lm) {
                continue;
            }
            frame.set(
                lm,
                Keypoint {
                    x,
                    y,
                    confidence: self.confidence,
                },
            );
        }
        frame
    }
}

/// Place the elbow on the perpendicular bisector of shoulder→wrist at the
/// distance that makes the shoulder-elbow-wrist angle equal `deg`.
fn elbow_for(shoulder: (f32, f32), wrist: (f32, f32), deg: f32) -> (f32, f32) {
    let dx = wrist.0 - shoulder.0;
    let dy = wrist.1 - shoulder.1;
    let len = (dx * dx + dy * dy).sqrt();
    let mid = ((shoulder.0 + wrist.0) / 2.0, (shoulder.1 + wrist.1) / 2.0);

    let dist = if deg >= 179.9 {
        0.0
    } else {
        (len / 2.0) / (deg.to_radians() / 2.0).tan()
    };

    // Unit perpendicular pointing downward in image space.
    let (mut px, mut py) = (-dy / len, dx / len);
    if py < 0.0 {
        px = -px;
        py = -py;
    }
    (mid.0 + px * dist, mid.1 + py * dist)
}
