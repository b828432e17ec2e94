use reptrack_core::{ViewTransform, project_frame};
use reptrack_core::mocks::PushupPose;
use reptrack_traits::pose::Keypoint;

const EPS: f32 = 1e-3;

#[test]
fn cover_scales_uniformly() {
    // Landscape video into a portrait phone screen.
    let t = ViewTransform::cover(640.0, 480.0, 390.0, 844.0).unwrap();
    assert_eq!(t.scale_x, t.scale_y);
    assert!((t.scale_y - 844.0 / 480.0).abs() < EPS);
}

#[test]
fn limiting_axis_has_zero_offset_and_the_other_centers() {
    let t = ViewTransform::cover(640.0, 480.0, 390.0, 844.0).unwrap();
    // Height limits: no vertical letterboxing, horizontal overflow is split.
    assert_eq!(t.offset_y, 0.0);
    assert!(t.offset_x < 0.0);
    let scaled_w = 640.0 * t.scale_x;
    assert!((t.offset_x - (390.0 - scaled_w) / 2.0).abs() < EPS);

    // The other orientation flips which axis limits.
    let t = ViewTransform::cover(480.0, 640.0, 844.0, 390.0).unwrap();
    assert_eq!(t.offset_x, 0.0);
    assert!(t.offset_y < 0.0);
}

#[test]
fn content_center_lands_on_container_center() {
    let t = ViewTransform::cover(640.0, 480.0, 390.0, 844.0).unwrap();
    let (cx, cy) = t.map_px(320.0, 240.0);
    assert!((cx - 195.0).abs() < EPS);
    assert!((cy - 422.0).abs() < EPS);
}

/// The classic overlay bug is applying scale but not offset, which skews
/// every keypoint toward one edge. The origin must land on the offset.
#[test]
fn origin_maps_to_the_offset_not_to_zero() {
    let t = ViewTransform::cover(640.0, 480.0, 390.0, 844.0).unwrap();
    let (x, y) = t.map_px(0.0, 0.0);
    assert_eq!((x, y), (t.offset_x, t.offset_y));
    assert!(x != 0.0, "a covering transform of these dims must shift x");
}

#[test]
fn identity_when_sizes_match() {
    let t = ViewTransform::cover(640.0, 480.0, 640.0, 480.0).unwrap();
    assert_eq!(t.map_px(12.5, 99.0), (12.5, 99.0));
}

#[test]
fn mirror_reflects_about_the_container_midline() {
    let t = ViewTransform::cover(640.0, 480.0, 390.0, 844.0).unwrap();
    let kp = Keypoint::new(0.25, 0.5, 1.0);
    let (x, y) = t.map_norm(&kp, false);
    let (mx, my) = t.map_norm(&kp, true);
    assert_eq!(y, my);
    assert!((mx - (390.0 - x)).abs() < EPS);

    // A centered point is its own mirror image.
    let center = Keypoint::new(0.5, 0.5, 1.0);
    let (cx, _) = t.map_norm(&center, false);
    let (mcx, _) = t.map_norm(&center, true);
    assert!((cx - mcx).abs() < EPS);
}

#[test]
fn project_frame_mirrors_every_landmark_uniformly() {
    let frame = PushupPose::new().at(0);
    let t = ViewTransform::cover(640.0, 480.0, 390.0, 844.0).unwrap();

    let plain = project_frame(&frame, &t, false);
    let mirrored = project_frame(&frame, &t, true);
    assert_eq!(plain.len(), 8);
    assert_eq!(plain.len(), mirrored.len());

    for ((lm_a, (x, y)), (lm_b, (mx, my))) in plain.iter().zip(mirrored.iter()) {
        assert_eq!(lm_a, lm_b);
        assert_eq!(*y, *my);
        assert!((mx - (390.0 - x)).abs() < EPS);
    }
}
