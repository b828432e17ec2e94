//! Pose data model shared across the stack.
//!
//! A detection cycle yields one [`Frame`]: a timestamp plus one optional
//! [`Keypoint`] per COCO body landmark. Positions live in normalized
//! [0,1]×[0,1] video space with y growing downward; confidence is in [0,1].
//! Absent landmarks are explicit `None`s; a source must never drop them
//! silently.

/// The 17 COCO body landmarks, in model output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landmark {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

pub const LANDMARK_COUNT: usize = 17;

impl Landmark {
    pub const ALL: [Landmark; LANDMARK_COUNT] = [
        Landmark::Nose,
        Landmark::LeftEye,
        Landmark::RightEye,
        Landmark::LeftEar,
        Landmark::RightEar,
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftElbow,
        Landmark::RightElbow,
        Landmark::LeftWrist,
        Landmark::RightWrist,
        Landmark::LeftHip,
        Landmark::RightHip,
        Landmark::LeftKnee,
        Landmark::RightKnee,
        Landmark::LeftAnkle,
        Landmark::RightAnkle,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Landmark::Nose => "nose",
            Landmark::LeftEye => "left_eye",
            Landmark::RightEye => "right_eye",
            Landmark::LeftEar => "left_ear",
            Landmark::RightEar => "right_ear",
            Landmark::LeftShoulder => "left_shoulder",
            Landmark::RightShoulder => "right_shoulder",
            Landmark::LeftElbow => "left_elbow",
            Landmark::RightElbow => "right_elbow",
            Landmark::LeftWrist => "left_wrist",
            Landmark::RightWrist => "right_wrist",
            Landmark::LeftHip => "left_hip",
            Landmark::RightHip => "right_hip",
            Landmark::LeftKnee => "left_knee",
            Landmark::RightKnee => "right_knee",
            Landmark::LeftAnkle => "left_ankle",
            Landmark::RightAnkle => "right_ankle",
        }
    }

    /// Parse a landmark from its wire name (the inverse of [`Landmark::name`]).
    pub fn from_name(s: &str) -> Option<Landmark> {
        Landmark::ALL.iter().copied().find(|l| l.name() == s)
    }
}

/// One detected anatomical landmark: position and detection confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    /// Horizontal position in normalized video space [0, 1].
    pub x: f32,
    /// Vertical position in normalized video space [0, 1]; grows downward.
    pub y: f32,
    /// Detection confidence in [0, 1].
    pub confidence: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self { x, y, confidence }
    }
}

/// One timestamped keypoint set from the pose source.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Milliseconds since session epoch (source-defined, monotonic).
    pub timestamp_ms: u64,
    points: [Option<Keypoint>; LANDMARK_COUNT],
}

impl Frame {
    pub fn new(timestamp_ms: u64) -> Self {
        Self {
            timestamp_ms,
            points: [None; LANDMARK_COUNT],
        }
    }

    /// Record a detected landmark. Overwrites any previous keypoint.
    pub fn set(&mut self, landmark: Landmark, kp: Keypoint) {
        self.points[landmark.index()] = Some(kp);
    }

    /// Raw keypoint regardless of confidence; `None` if the source omitted it.
    #[inline]
    pub fn get(&self, landmark: Landmark) -> Option<&Keypoint> {
        self.points[landmark.index()].as_ref()
    }

    /// Iterate over every present landmark.
    pub fn iter(&self) -> impl Iterator<Item = (Landmark, &Keypoint)> {
        Landmark::ALL
            .iter()
            .filter_map(|&l| self.points[l.index()].as_ref().map(|kp| (l, kp)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landmark_names_round_trip() {
        for l in Landmark::ALL {
            assert_eq!(Landmark::from_name(l.name()), Some(l));
        }
        assert_eq!(Landmark::from_name("left_pinky"), None);
    }

    #[test]
    fn frame_reports_absent_landmarks() {
        let mut f = Frame::new(0);
        assert!(f.get(Landmark::LeftWrist).is_none());
        f.set(Landmark::LeftWrist, Keypoint::new(0.5, 0.5, 0.9));
        assert_eq!(f.get(Landmark::LeftWrist).map(|k| k.confidence), Some(0.9));
        assert_eq!(f.iter().count(), 1);
    }
}
