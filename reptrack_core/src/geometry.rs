//! Pure geometry: Euclidean distance, 3-point angle, and the cover-fit
//! transform from video space to a display container.

use reptrack_traits::pose::{Frame, Keypoint, Landmark};

use crate::error::{BuildError, Result};

/// Euclidean distance between two keypoints in their native coordinate units.
#[inline]
pub fn distance(a: &Keypoint, b: &Keypoint) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Angle at `vertex` formed by rays to `a` and `b`, in degrees, range [0, 180].
///
/// Returns `None` when a ray is degenerate (`a == vertex` or `b == vertex`);
/// callers treat that as indeterminate, never as a fault.
pub fn angle_deg(a: &Keypoint, vertex: &Keypoint, b: &Keypoint) -> Option<f32> {
    let (ux, uy) = (a.x - vertex.x, a.y - vertex.y);
    let (vx, vy) = (b.x - vertex.x, b.y - vertex.y);
    let nu = (ux * ux + uy * uy).sqrt();
    let nv = (vx * vx + vy * vy).sqrt();
    if nu == 0.0 || nv == 0.0 {
        return None;
    }
    let cos = ((ux * vx + uy * vy) / (nu * nv)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Uniform cover-fit mapping from content (video) space to a container.
///
/// Content is scaled uniformly until it fully covers the container on the
/// limiting axis and centered on the other; the limiting axis offset is
/// exactly 0 and the other is `(container - scaled_content) / 2` (≤ 0).
/// Every mapped coordinate is `offset + p * scale`; dropping the offset is
/// the classic half-screen skew bug and has a dedicated regression test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    content_w: f32,
    content_h: f32,
    container_w: f32,
}

impl ViewTransform {
    /// Compute the cover transform for the given content and container sizes.
    /// All dimensions must be positive and finite.
    pub fn cover(
        content_w: f32,
        content_h: f32,
        container_w: f32,
        container_h: f32,
    ) -> Result<Self> {
        let dims = [content_w, content_h, container_w, container_h];
        if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "view dimensions must be positive and finite",
            )));
        }
        let scale = (container_w / content_w).max(container_h / content_h);
        let scaled_w = content_w * scale;
        let scaled_h = content_h * scale;
        Ok(Self {
            offset_x: (container_w - scaled_w) / 2.0,
            offset_y: (container_h - scaled_h) / 2.0,
            scale_x: scale,
            scale_y: scale,
            content_w,
            content_h,
            container_w,
        })
    }

    /// Map a point in content pixel coordinates to display coordinates.
    #[inline]
    pub fn map_px(&self, x: f32, y: f32) -> (f32, f32) {
        (self.offset_x + x * self.scale_x, self.offset_y + y * self.scale_y)
    }

    /// Map a normalized [0,1] keypoint position to display coordinates,
    /// optionally reflected for a mirrored (selfie) view.
    #[inline]
    pub fn map_norm(&self, kp: &Keypoint, mirror: bool) -> (f32, f32) {
        let (x, y) = self.map_px(kp.x * self.content_w, kp.y * self.content_h);
        if mirror {
            (self.container_w - x, y)
        } else {
            (x, y)
        }
    }
}

/// Display coordinates for every landmark present in the frame.
///
/// Mirroring is applied here, uniformly, for the same reason the offset lives
/// inside `map_norm`: a renderer that mirrors some keypoints and not others
/// violates the overlay invariant.
pub fn project_frame(
    frame: &Frame,
    transform: &ViewTransform,
    mirror: bool,
) -> Vec<(Landmark, (f32, f32))> {
    frame
        .iter()
        .map(|(l, kp)| (l, transform.map_norm(kp, mirror)))
        .collect()
}
