//! Drives a [`RepTracker`] from a [`reptrack_traits::PoseSource`] until the
//! source is exhausted.
//!
//! The tracker itself is infallible per frame; only source faults abort a
//! run. Frame pacing is owned by the source (a live detector delivers at
//! camera rate, a file replay delivers as fast as it can), so the runner
//! never sleeps.

use crate::error::{Result as CoreResult, map_source_error};
use crate::status::StepReport;
use crate::tracker::RepTracker;
use std::time::Duration;

/// Final accounting for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames consumed from the source.
    pub frames: u64,
    /// Reps credited over the whole run.
    pub reps: u32,
    /// State the machine ended in.
    pub last_state: crate::status::RepState,
}

/// Feed every frame from `source` through `tracker`, invoking `on_report`
/// after each step. Returns once the source reports end of stream.
pub fn run<S, F>(
    mut source: S,
    tracker: &mut RepTracker,
    timeout: Duration,
    mut on_report: F,
) -> CoreResult<RunSummary>
where
    S: reptrack_traits::PoseSource,
    F: FnMut(&StepReport),
{
    tracker.begin();
    tracing::info!(timeout_ms = timeout.as_millis() as u64, "run start");

    let mut frames: u64 = 0;
    loop {
        let frame = match source.next_frame(timeout) {
            Ok(Some(frame)) => frame,
            Ok(None) => break,
            Err(e) => {
                let err = map_source_error(e.as_ref());
                tracing::error!(error = %err, frames, "run aborted");
                return Err(crate::error::Report::new(err));
            }
        };
        frames += 1;
        let report = tracker.step(&frame);
        on_report(&report);
    }

    let summary = RunSummary {
        frames,
        reps: tracker.rep_count(),
        last_state: tracker.state(),
    };
    tracing::info!(
        frames = summary.frames,
        reps = summary.reps,
        last_state = %summary.last_state,
        "run complete"
    );
    Ok(summary)
}
