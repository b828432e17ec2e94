//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "reptrack", version, about = "Pushup rep counter CLI")]
pub struct Cli {
    /// Path to config TOML; built-in defaults apply when omitted and
    /// etc/reptrack.toml is absent
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log and report as JSON lines instead of pretty
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count reps over a recorded keypoint stream (JSON lines)
    Count {
        /// Keypoint frames file: one JSON object per line with an optional
        /// t_ms and a keypoints array of {name, x, y, c}
        #[arg(long, value_name = "FILE")]
        frames: PathBuf,
        /// Override timing: minimum dwell in the down position (ms)
        #[arg(long, value_name = "MS")]
        hold_ms: Option<u64>,
        /// Emit one report line per frame, not only the summary
        #[arg(long, action = ArgAction::SetTrue)]
        per_frame: bool,
        /// Per-read timeout when pulling frames from the source (ms)
        #[arg(long, value_name = "MS", default_value_t = 1_000)]
        timeout_ms: u64,
        /// Replay at the recorded frame cadence instead of as fast as possible
        #[arg(long, action = ArgAction::SetTrue)]
        realtime: bool,
    },
    /// Overlay mapping: print display coordinates for each frame's keypoints
    Project {
        /// Keypoint frames file (same schema as `count --frames`)
        #[arg(long, value_name = "FILE")]
        frames: PathBuf,
        /// Source video size in pixels, WxH (e.g. 640x480)
        #[arg(long, value_name = "WxH")]
        content: String,
        /// Display container size in pixels, WxH (e.g. 390x844)
        #[arg(long, value_name = "WxH")]
        container: String,
        /// Mirror horizontally (selfie view); defaults to the config value
        #[arg(long, action = ArgAction::SetTrue)]
        mirror: bool,
    },
    /// Parse and validate the config file, then exit
    Validate,
}

/// Parse a "WxH" size argument into a (width, height) pair.
pub fn parse_size(s: &str) -> eyre::Result<(f32, f32)> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| eyre::eyre!("expected WxH, got {s:?}"))?;
    let w: f32 = w.trim().parse().map_err(|_| eyre::eyre!("bad width in {s:?}"))?;
    let h: f32 = h.trim().parse().map_err(|_| eyre::eyre!("bad height in {s:?}"))?;
    Ok((w, h))
}
