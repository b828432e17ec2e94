use proptest::prelude::*;
use reptrack_core::mocks::PushupPose;
use reptrack_core::{RepTrackerBuilder, ViewTransform};

proptest! {
    /// Cover-fit invariants over arbitrary positive sizes: uniform scale,
    /// zero offset on the limiting axis, full coverage on both axes.
    #[test]
    fn cover_transform_invariants(
        content_w in 16.0f32..4096.0,
        content_h in 16.0f32..4096.0,
        container_w in 16.0f32..4096.0,
        container_h in 16.0f32..4096.0,
    ) {
        let t = ViewTransform::cover(content_w, content_h, container_w, container_h).unwrap();
        // Tolerance scaled to the magnitudes involved (f32 over ~1e6).
        let eps = (container_w.max(container_h)) * 1e-3;

        prop_assert_eq!(t.scale_x, t.scale_y);
        prop_assert!(t.offset_x <= eps && t.offset_y <= eps);
        // One axis fits exactly, so at least one offset is zero.
        prop_assert!(t.offset_x.abs() < eps || t.offset_y.abs() < eps);
        // The scaled content covers the container on both axes.
        prop_assert!(content_w * t.scale_x >= container_w - eps);
        prop_assert!(content_h * t.scale_y >= container_h - eps);
        // Symmetric overflow: the far edge overhangs as much as the near one.
        let far_x = t.offset_x + content_w * t.scale_x - container_w;
        prop_assert!((far_x + t.offset_x).abs() < eps * 2.0);
    }

    /// Over any elbow-angle trajectory the rep count is monotonic and can
    /// never exceed either the number of below-down frames or the number of
    /// above-up frames.
    #[test]
    fn rep_count_is_bounded_by_threshold_crossings(
        angles in prop::collection::vec(40.0f32..178.0, 1..120),
    ) {
        let mut tracker = RepTrackerBuilder::new().build().unwrap();
        let mut prev_count = 0;
        let mut downs = 0u32;
        let mut ups = 0u32;
        for (i, &deg) in angles.iter().enumerate() {
            // Over-count crossings by the fixture's ~0.05 degree tolerance
            // so the bound stays an upper bound.
            if deg < 90.5 {
                downs += 1;
            }
            if deg > 159.5 {
                ups += 1;
            }
            let report = tracker.step(&PushupPose::new().elbow_deg(deg).at(i as u64 * 33));
            prop_assert!(report.rep_count >= prev_count);
            prop_assert!(report.rep_count <= prev_count + 1);
            prev_count = report.rep_count;
        }
        prop_assert!(tracker.rep_count() <= downs.min(ups));
    }

    /// A trajectory that never leaves the hysteresis band counts nothing.
    #[test]
    fn in_band_trajectories_never_count(
        angles in prop::collection::vec(91.0f32..159.0, 1..80),
    ) {
        let mut tracker = RepTrackerBuilder::new().build().unwrap();
        for (i, &deg) in angles.iter().enumerate() {
            tracker.step(&PushupPose::new().elbow_deg(deg).at(i as u64 * 33));
        }
        prop_assert_eq!(tracker.rep_count(), 0);
    }
}
