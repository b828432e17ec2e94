//! Confidence gating over a raw keypoint frame.

use reptrack_traits::pose::{Frame, Keypoint, Landmark};

/// A view over a [`Frame`] that yields a keypoint only when its confidence
/// meets the configured minimum. A gated-out keypoint makes any constraint
/// that requires it indeterminate: "can't see you" rather than "bad form".
#[derive(Debug, Clone, Copy)]
pub struct NormalizedFrame<'a> {
    frame: &'a Frame,
    min_confidence: f32,
}

impl<'a> NormalizedFrame<'a> {
    pub fn new(frame: &'a Frame, min_confidence: f32) -> Self {
        Self {
            frame,
            min_confidence,
        }
    }

    #[inline]
    pub fn timestamp_ms(&self) -> u64 {
        self.frame.timestamp_ms
    }

    /// The keypoint, if present and confident enough.
    pub fn point(&self, landmark: Landmark) -> Option<&'a Keypoint> {
        self.frame
            .get(landmark)
            .filter(|kp| kp.confidence >= self.min_confidence)
    }

    /// Both keypoints of a left/right pair, or `None` if either is gated out.
    pub fn pair(&self, left: Landmark, right: Landmark) -> Option<(&'a Keypoint, &'a Keypoint)> {
        Some((self.point(left)?, self.point(right)?))
    }

    /// Mean y of a left/right pair.
    pub fn avg_y(&self, left: Landmark, right: Landmark) -> Option<f32> {
        let (l, r) = self.pair(left, right)?;
        Some((l.y + r.y) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gates_low_confidence_keypoints() {
        let mut f = Frame::new(0);
        f.set(Landmark::LeftShoulder, Keypoint::new(0.4, 0.5, 0.9));
        f.set(Landmark::RightShoulder, Keypoint::new(0.6, 0.5, 0.2));

        let nf = NormalizedFrame::new(&f, 0.3);
        assert!(nf.point(Landmark::LeftShoulder).is_some());
        assert!(nf.point(Landmark::RightShoulder).is_none());
        assert!(
            nf.pair(Landmark::LeftShoulder, Landmark::RightShoulder)
                .is_none()
        );
        assert!(nf.point(Landmark::Nose).is_none());
    }

    #[test]
    fn avg_y_uses_both_sides() {
        let mut f = Frame::new(0);
        f.set(Landmark::LeftHip, Keypoint::new(0.4, 0.5, 0.9));
        f.set(Landmark::RightHip, Keypoint::new(0.6, 0.7, 0.9));

        let nf = NormalizedFrame::new(&f, 0.3);
        assert_eq!(nf.avg_y(Landmark::LeftHip, Landmark::RightHip), Some(0.6));
    }
}
