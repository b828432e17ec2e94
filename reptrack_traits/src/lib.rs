pub mod clock;
pub mod pose;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use pose::{Frame, Keypoint, Landmark};

/// Supplies one keypoint frame per detection cycle.
///
/// Implementations wrap the external pose-estimation collaborator (a model
/// runtime, a network stream, or a recorded file). `Ok(None)` signals a clean
/// end of stream; errors are transport faults, not bad poses: a frame with
/// low-confidence keypoints is still `Ok(Some(..))`.
pub trait PoseSource {
    fn next_frame(
        &mut self,
        timeout: std::time::Duration,
    ) -> Result<Option<Frame>, Box<dyn std::error::Error + Send + Sync>>;
}
