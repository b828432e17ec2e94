//! Human-readable error descriptions and structured JSON error formatting.

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    use reptrack_core::error::{BuildError, TrackError};

    // Typed matches first
    if let Some(be) = err.downcast_ref::<BuildError>() {
        return match be {
            BuildError::InvalidConfig(msg) => format!(
                "What happened: Invalid configuration ({msg}).\nLikely causes: Missing or out-of-range values in the TOML.\nHow to fix: Edit the config file, then rerun. See README for a sample."
            ),
        };
    }

    if let Some(te) = err.downcast_ref::<TrackError>() {
        return match te {
            TrackError::Timeout => {
                "What happened: The pose source produced no frame within the timeout.\nLikely causes: Detector stalled or the recording ended unexpectedly.\nHow to fix: Check the source, or raise --timeout-ms.".to_string()
            }
            TrackError::Source(msg) => format!(
                "What happened: The pose source failed ({msg}).\nLikely causes: Truncated or malformed frames file, or a detector fault.\nHow to fix: Re-record the stream or fix the offending line."
            ),
        };
    }

    // String-based heuristics for errors coming from init or config
    let msg = err.to_string();
    let lower = msg.to_ascii_lowercase();

    if lower.contains("failed to open frames file") {
        return format!(
            "What happened: {msg}.\nLikely causes: Wrong path or missing recording.\nHow to fix: Point --frames at an existing JSONL keypoint file."
        );
    }

    if lower.contains("expected") && lower.contains("wxh") {
        return format!(
            "What happened: {msg}.\nHow to fix: Pass sizes as WIDTHxHEIGHT, e.g. --content 640x480."
        );
    }

    if lower.starts_with("detection.")
        || lower.starts_with("angles.")
        || lower.starts_with("posture.")
        || lower.starts_with("timing.")
        || lower.contains("must be")
    {
        return format!(
            "What happened: Configuration is invalid ({msg}).\nHow to fix: Edit the TOML config and try again."
        );
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Stable exit codes: config problems return 2, source faults 3, timeouts 4.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    use reptrack_core::error::{BuildError, TrackError};
    if err.downcast_ref::<BuildError>().is_some() {
        return 2;
    }
    match err.downcast_ref::<TrackError>() {
        Some(TrackError::Timeout) => 4,
        Some(TrackError::Source(_)) => 3,
        None => 1,
    }
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use reptrack_core::error::{BuildError, TrackError};
    use serde_json::json;

    let reason = if err.downcast_ref::<BuildError>().is_some() {
        "InvalidConfig"
    } else {
        match err.downcast_ref::<TrackError>() {
            Some(TrackError::Timeout) => "Timeout",
            Some(TrackError::Source(_)) => "Source",
            None => "Error",
        }
    };
    json!({ "reason": reason, "message": humanize(err) }).to_string()
}

/// Bridge a boxed trait-boundary error into an eyre report.
pub fn boxed_to_report(e: &(dyn std::error::Error + 'static)) -> eyre::Report {
    eyre::Report::new(reptrack_core::error::map_source_error(e))
}
