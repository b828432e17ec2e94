//! Error taxonomy for the tracking engine.
//!
//! Per-frame conditions (low confidence, degenerate geometry, bad form) are
//! never errors: they are expressed as verdict data so the session survives
//! arbitrarily many degraded frames. The only fatal class is configuration,
//! rejected at build time before any frame is processed. `TrackError` covers
//! the remaining boundary faults: the pose source and I/O.

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum TrackError {
    #[error("pose source error: {0}")]
    Source(String),
    #[error("timeout waiting for pose source")]
    Timeout,
}

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

/// Map a trait-boundary error from `PoseSource` to a typed `TrackError`.
pub fn map_source_error(e: &(dyn std::error::Error + 'static)) -> TrackError {
    let s = e.to_string();
    if s.to_lowercase().contains("timeout") {
        TrackError::Timeout
    } else {
        TrackError::Source(s)
    }
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
