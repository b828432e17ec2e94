//! Overlay projection: map recorded keypoints into display coordinates.

use crate::source::JsonlPoseSource;
use reptrack_core::error::Result as CoreResult;
use reptrack_core::{ViewTransform, project_frame};
use reptrack_traits::PoseSource;
use std::path::Path;
use std::time::Duration;

pub fn run_project(
    frames: &Path,
    fps: u32,
    content: (f32, f32),
    container: (f32, f32),
    mirror: bool,
    json: bool,
) -> CoreResult<u64> {
    let transform = ViewTransform::cover(content.0, content.1, container.0, container.1)?;
    tracing::debug!(
        scale = transform.scale_x,
        offset_x = transform.offset_x,
        offset_y = transform.offset_y,
        mirror,
        "cover transform"
    );

    let mut source = JsonlPoseSource::open(frames, fps)?;
    let mut count: u64 = 0;
    while let Some(frame) = source
        .next_frame(Duration::from_secs(1))
        .map_err(|e| crate::error_fmt::boxed_to_report(e.as_ref()))?
    {
        count += 1;
        let mapped = project_frame(&frame, &transform, mirror);
        if json {
            let points: serde_json::Map<String, serde_json::Value> = mapped
                .iter()
                .map(|(lm, (x, y))| (lm.name().to_string(), serde_json::json!([x, y])))
                .collect();
            println!(
                "{}",
                serde_json::json!({ "t_ms": frame.timestamp_ms, "points": points })
            );
        } else {
            print!("{:>8} ms ", frame.timestamp_ms);
            for (lm, (x, y)) in &mapped {
                print!(" {}=({x:.1},{y:.1})", lm.name());
            }
            println!();
        }
    }
    Ok(count)
}
