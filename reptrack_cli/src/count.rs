//! Rep counting over a recorded frame stream: config mapping, tracker
//! assembly, and report output.

use crate::source::JsonlPoseSource;
use reptrack_core::error::Result as CoreResult;
use reptrack_core::{FeedbackCue, RepTracker, RunSummary, StepReport, TimingCfg};
use std::path::Path;
use std::time::Duration;

pub fn build_tracker(
    cfg: &reptrack_config::Config,
    hold_ms_override: Option<u64>,
) -> CoreResult<RepTracker> {
    let mut builder = RepTracker::builder().with_config(cfg);
    if let Some(hold_ms) = hold_ms_override {
        builder = builder.with_timing(TimingCfg {
            hold_ms,
            feedback_debounce_ms: cfg.timing.feedback_debounce_ms,
        });
    }
    builder.build()
}

pub fn run_count(
    cfg: &reptrack_config::Config,
    frames: &Path,
    hold_ms_override: Option<u64>,
    per_frame: bool,
    timeout: Duration,
    realtime: bool,
    json: bool,
) -> CoreResult<RunSummary> {
    let source = JsonlPoseSource::open(frames, cfg.detection.fps)?;
    let mut tracker = build_tracker(cfg, hold_ms_override)?;
    let on_report = |report: &StepReport| {
        if per_frame {
            print_report(report, json);
        } else if report.rep_counted {
            tracing::info!(rep = report.rep_count, at_ms = report.timestamp_ms, "rep");
        }
    };

    let summary = if realtime {
        let paced = crate::source::PacedSource::new(
            source,
            reptrack_traits::clock::MonotonicClock::new(),
        );
        reptrack_core::run(paced, &mut tracker, timeout, on_report)?
    } else {
        reptrack_core::run(source, &mut tracker, timeout, on_report)?
    };
    Ok(summary)
}

fn print_report(report: &StepReport, json: bool) {
    if json {
        println!("{}", report_json(report));
    } else {
        let angles = match (report.elbow.left, report.elbow.right) {
            (Some(l), Some(r)) => format!("{l:5.1}/{r:5.1}"),
            _ => "  ?  /  ?  ".to_string(),
        };
        println!(
            "{:>8} ms  {:<4}  reps={:<3}  elbow={}  {}",
            report.timestamp_ms, report.state, report.rep_count, angles, report.cue
        );
    }
}

/// One frame report as a JSON line (the per-frame schema).
pub fn report_json(report: &StepReport) -> String {
    let checks: serde_json::Map<String, serde_json::Value> = report
        .verdict
        .checks
        .iter()
        .map(|c| {
            (
                c.kind.name().to_string(),
                serde_json::Value::String(outcome_name(c.outcome).to_string()),
            )
        })
        .collect();
    serde_json::json!({
        "t_ms": report.timestamp_ms,
        "state": report.state.to_string(),
        "reps": report.rep_count,
        "rep_counted": report.rep_counted,
        "elbow_left": report.elbow.left,
        "elbow_right": report.elbow.right,
        "checks": checks,
        "cue": cue_name(report.cue),
    })
    .to_string()
}

/// The final summary as a JSON line.
pub fn summary_json(summary: &RunSummary) -> String {
    serde_json::json!({
        "frames": summary.frames,
        "reps": summary.reps,
        "final_state": summary.last_state.to_string(),
    })
    .to_string()
}

fn outcome_name(o: reptrack_core::Outcome) -> &'static str {
    match o {
        reptrack_core::Outcome::Pass => "pass",
        reptrack_core::Outcome::Fail => "fail",
        reptrack_core::Outcome::Indeterminate => "indeterminate",
    }
}

pub fn cue_name(cue: FeedbackCue) -> &'static str {
    match cue {
        FeedbackCue::NotVisible => "not_visible",
        FeedbackCue::GetIntoPlank => "get_into_plank",
        FeedbackCue::FixForm => "fix_form",
        FeedbackCue::GoDown => "go_down",
        FeedbackCue::PushUp => "push_up",
    }
}
