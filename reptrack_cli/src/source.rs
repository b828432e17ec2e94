//! JSONL keypoint replay: a `PoseSource` over a recorded frame file.
//!
//! One JSON object per line:
//! `{"t_ms": 0, "keypoints": [{"name": "left_shoulder", "x": 0.45, "y": 0.5, "c": 0.9}, ...]}`
//! Unknown landmark names are skipped with a warning so recordings from
//! models with extra outputs still replay. `t_ms` may be omitted; such
//! frames get timestamps synthesized at the configured detection rate.

use eyre::WrapErr;
use reptrack_core::util::period_ms;
use reptrack_traits::pose::{Frame, Keypoint, Landmark};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct KeypointRecord {
    name: String,
    x: f32,
    y: f32,
    c: f32,
}

#[derive(Debug, Deserialize)]
struct FrameRecord {
    t_ms: Option<u64>,
    keypoints: Vec<KeypointRecord>,
}

pub struct JsonlPoseSource {
    lines: Lines<BufReader<File>>,
    line_no: usize,
    period_ms: u64,
    frames_out: u64,
}

impl JsonlPoseSource {
    /// Opens a recording. `fps` sets the synthesized cadence for lines that
    /// carry no `t_ms` of their own.
    pub fn open(path: &Path, fps: u32) -> eyre::Result<Self> {
        let file = File::open(path)
            .wrap_err_with(|| format!("failed to open frames file {}", path.display()))?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            line_no: 0,
            period_ms: period_ms(fps),
            frames_out: 0,
        })
    }
}

fn to_frame(rec: FrameRecord, timestamp_ms: u64) -> Frame {
    let mut frame = Frame::new(timestamp_ms);
    for kp in rec.keypoints {
        match Landmark::from_name(&kp.name) {
            Some(lm) => frame.set(lm, Keypoint::new(kp.x, kp.y, kp.c)),
            None => tracing::warn!(name = %kp.name, "skipping unknown landmark"),
        }
    }
    frame
}

/// Replays an inner source at its recorded cadence.
///
/// Before yielding a frame, sleeps until the clock has caught up with the
/// frame's timestamp (relative to the first frame). With a `ManualClock`
/// this is instantaneous and deterministic.
pub struct PacedSource<S, C: reptrack_traits::clock::Clock> {
    inner: S,
    clock: C,
    epoch: Option<std::time::Instant>,
    first_ts: u64,
}

impl<S, C: reptrack_traits::clock::Clock> PacedSource<S, C> {
    pub fn new(inner: S, clock: C) -> Self {
        Self {
            inner,
            clock,
            epoch: None,
            first_ts: 0,
        }
    }
}

impl<S, C> reptrack_traits::PoseSource for PacedSource<S, C>
where
    S: reptrack_traits::PoseSource,
    C: reptrack_traits::clock::Clock,
{
    fn next_frame(
        &mut self,
        timeout: Duration,
    ) -> Result<Option<Frame>, Box<dyn std::error::Error + Send + Sync>> {
        let Some(frame) = self.inner.next_frame(timeout)? else {
            return Ok(None);
        };
        let epoch = match self.epoch {
            Some(e) => e,
            None => {
                let e = self.clock.now();
                self.epoch = Some(e);
                self.first_ts = frame.timestamp_ms;
                e
            }
        };
        let due_ms = frame.timestamp_ms.saturating_sub(self.first_ts);
        let elapsed_ms = self.clock.ms_since(epoch);
        if due_ms > elapsed_ms {
            self.clock.sleep(Duration::from_millis(due_ms - elapsed_ms));
        }
        Ok(Some(frame))
    }
}

impl reptrack_traits::PoseSource for JsonlPoseSource {
    fn next_frame(
        &mut self,
        _timeout: Duration,
    ) -> Result<Option<Frame>, Box<dyn std::error::Error + Send + Sync>> {
        loop {
            let Some(line) = self.lines.next() else {
                return Ok(None);
            };
            self.line_no += 1;
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let rec: FrameRecord = serde_json::from_str(&line).map_err(|e| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("frames line {}: {e}", self.line_no),
                )
            })?;
            let timestamp_ms = rec.t_ms.unwrap_or(self.frames_out * self.period_ms);
            self.frames_out += 1;
            return Ok(Some(to_frame(rec, timestamp_ms)));
        }
    }
}
