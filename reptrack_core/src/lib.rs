#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Rep-validation engine (pose-source-agnostic).
//!
//! Counts exercise repetitions from a stream of 2-D body keypoints while
//! rejecting attempts to game the count through partial motion, asymmetric
//! movement, or abandoning the exercise posture. Keypoint frames arrive
//! through `reptrack_traits::PoseSource`; this crate never touches a camera
//! or a model.
//!
//! ## Architecture
//!
//! - **Geometry**: distance, 3-point angle, cover-fit view transform
//!   (`geometry` module)
//! - **Normalizer**: per-keypoint confidence gating (`normalize` module)
//! - **Constraints**: posture predicates with diagnostic ratios
//!   (`constraint` module)
//! - **State machine**: 3-state rep counter with hysteresis (`RepTracker`)
//! - **Hold gate**: minimum dwell before a rep completes (`hold` module)
//! - **Feedback**: debounced user-facing cues (`feedback` module)
//!
//! ## Units
//!
//! Keypoint positions are normalized video coordinates with y growing
//! downward. Physical thresholds are expressed in shoulder-width multiples so
//! they are invariant to subject size and camera distance; only the wrist
//! symmetry check converts to centimeters, via the configured assumed
//! shoulder width.

pub mod builder;
pub mod config;
pub mod constraint;
pub mod conversions;
pub mod error;
pub mod feedback;
pub mod geometry;
pub mod hold;
pub mod mocks;
pub mod normalize;
pub mod runner;
pub mod status;
pub mod tracker;
pub mod util;

pub use builder::RepTrackerBuilder;
pub use config::{AngleCfg, DetectCfg, PostureCfg, TimingCfg};
pub use constraint::{ConstraintCheck, ConstraintKind, FrameVerdict, Outcome};
pub use error::{BuildError, TrackError};
pub use feedback::{Debouncer, FeedbackCue};
pub use geometry::{ViewTransform, project_frame};
pub use normalize::NormalizedFrame;
pub use runner::{RunSummary, run};
pub use status::{AngleSignal, ElbowAngles, RepState, StepReport};
pub use tracker::RepTracker;
