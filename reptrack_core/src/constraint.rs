//! Anti-cheat posture constraints.
//!
//! Each constraint is a pure predicate over a normalized frame producing a
//! pass/fail/indeterminate outcome plus named diagnostic ratios. Shoulder
//! width, the distance between the two shoulder keypoints in the current
//! frame, is the sole unit of physical scale, so thresholds hold regardless
//! of subject size or camera distance.
//!
//! Standing rejection and wrist orientation are *hard* constraints: failing
//! either means the exercise posture was abandoned and the state machine
//! resets. Plank alignment and wrist symmetry are *soft*: they block rep
//! credit but do not reset progress.

use reptrack_traits::pose::Landmark;

use crate::config::PostureCfg;
use crate::geometry::distance;
use crate::normalize::NormalizedFrame;

/// Which posture predicate produced a check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    PlankAlignment,
    StandingPosture,
    WristOrientation,
    WristSymmetry,
}

impl ConstraintKind {
    pub const ALL: [ConstraintKind; 4] = [
        ConstraintKind::PlankAlignment,
        ConstraintKind::StandingPosture,
        ConstraintKind::WristOrientation,
        ConstraintKind::WristSymmetry,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConstraintKind::PlankAlignment => "plank_alignment",
            ConstraintKind::StandingPosture => "standing_posture",
            ConstraintKind::WristOrientation => "wrist_orientation",
            ConstraintKind::WristSymmetry => "wrist_symmetry",
        }
    }

    /// Hard constraints reset the rep state machine when they fail.
    pub fn is_hard(self) -> bool {
        matches!(
            self,
            ConstraintKind::StandingPosture | ConstraintKind::WristOrientation
        )
    }
}

/// Outcome of a single constraint on a single frame.
///
/// `Indeterminate` means a required keypoint fell below the confidence
/// threshold (or geometry was degenerate): the constraint neither passes nor
/// fails, but the rep gate treats it as not-passed so nothing counts blind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
    Indeterminate,
}

/// One constraint's result with its diagnostic metrics.
#[derive(Debug, Clone)]
pub struct ConstraintCheck {
    pub kind: ConstraintKind,
    pub outcome: Outcome,
    /// Named metric values for the debug consumer; empty when indeterminate.
    pub ratios: Vec<(&'static str, f32)>,
}

impl ConstraintCheck {
    fn indeterminate(kind: ConstraintKind) -> Self {
        Self {
            kind,
            outcome: Outcome::Indeterminate,
            ratios: Vec::new(),
        }
    }
}

/// The full per-frame verdict: all four checks plus the measured scale unit.
/// Produced fresh each frame and never debounced or suppressed.
#[derive(Debug, Clone)]
pub struct FrameVerdict {
    /// Shoulder width in normalized units; `None` when shoulders were not
    /// visible (every check is then indeterminate).
    pub shoulder_width: Option<f32>,
    pub checks: Vec<ConstraintCheck>,
}

impl FrameVerdict {
    /// All four constraints passed on this frame.
    pub fn full_pass(&self) -> bool {
        self.checks.iter().all(|c| c.outcome == Outcome::Pass)
    }

    /// A hard constraint (standing / orientation) failed outright.
    pub fn hard_fail(&self) -> bool {
        self.checks
            .iter()
            .any(|c| c.kind.is_hard() && c.outcome == Outcome::Fail)
    }

    /// At least one constraint could not be evaluated.
    pub fn any_indeterminate(&self) -> bool {
        self.checks
            .iter()
            .any(|c| c.outcome == Outcome::Indeterminate)
    }

    pub fn check(&self, kind: ConstraintKind) -> Option<&ConstraintCheck> {
        self.checks.iter().find(|c| c.kind == kind)
    }
}

/// Evaluate all posture constraints on one normalized frame.
pub fn evaluate(nf: &NormalizedFrame<'_>, cfg: &PostureCfg) -> FrameVerdict {
    let shoulders = nf.pair(Landmark::LeftShoulder, Landmark::RightShoulder);
    let shoulder_width = shoulders.map(|(l, r)| distance(l, r));

    // Without a usable scale unit nothing can be judged.
    let sw = match shoulder_width {
        Some(sw) if sw > 0.0 => sw,
        _ => {
            return FrameVerdict {
                shoulder_width: None,
                checks: ConstraintKind::ALL
                    .iter()
                    .map(|&k| ConstraintCheck::indeterminate(k))
                    .collect(),
            };
        }
    };

    let checks = vec![
        plank_alignment(nf, sw, cfg),
        standing_posture(nf, sw, cfg),
        wrist_orientation(nf),
        wrist_symmetry(nf, sw, cfg),
    ];
    FrameVerdict {
        shoulder_width: Some(sw),
        checks,
    }
}

/// Both wrists must sit within `plank_wrist_hip_mult` shoulder widths of the
/// hip on their own side. Sides are judged independently and AND-ed, so
/// collapsing one arm cannot keep the frame valid.
fn plank_alignment(nf: &NormalizedFrame<'_>, sw: f32, cfg: &PostureCfg) -> ConstraintCheck {
    let kind = ConstraintKind::PlankAlignment;
    let Some((lw, lh)) = nf
        .point(Landmark::LeftWrist)
        .zip(nf.point(Landmark::LeftHip))
    else {
        return ConstraintCheck::indeterminate(kind);
    };
    let Some((rw, rh)) = nf
        .point(Landmark::RightWrist)
        .zip(nf.point(Landmark::RightHip))
    else {
        return ConstraintCheck::indeterminate(kind);
    };

    let left_ratio = distance(lw, lh) / sw;
    let right_ratio = distance(rw, rh) / sw;
    let passed = left_ratio <= cfg.plank_wrist_hip_mult && right_ratio <= cfg.plank_wrist_hip_mult;
    ConstraintCheck {
        kind,
        outcome: if passed { Outcome::Pass } else { Outcome::Fail },
        ratios: vec![
            ("left_wrist_hip_ratio", left_ratio),
            ("right_wrist_hip_ratio", right_ratio),
        ],
    }
}

/// An upright torso (shoulders far above hips relative to shoulder width)
/// means the subject is standing, not horizontal. Hard failure.
fn standing_posture(nf: &NormalizedFrame<'_>, sw: f32, cfg: &PostureCfg) -> ConstraintCheck {
    let kind = ConstraintKind::StandingPosture;
    let Some(shoulder_y) = nf.avg_y(Landmark::LeftShoulder, Landmark::RightShoulder) else {
        return ConstraintCheck::indeterminate(kind);
    };
    let Some(hip_y) = nf.avg_y(Landmark::LeftHip, Landmark::RightHip) else {
        return ConstraintCheck::indeterminate(kind);
    };

    let ratio = (hip_y - shoulder_y).abs() / sw;
    ConstraintCheck {
        kind,
        outcome: if ratio <= cfg.standing_torso_mult {
            Outcome::Pass
        } else {
            Outcome::Fail
        },
        ratios: vec![("torso_drop_ratio", ratio)],
    }
}

/// Wrists above the shoulders (screen y grows downward) signal a standing or
/// raised-arm pose. Hard failure.
fn wrist_orientation(nf: &NormalizedFrame<'_>) -> ConstraintCheck {
    let kind = ConstraintKind::WristOrientation;
    let Some(wrist_y) = nf.avg_y(Landmark::LeftWrist, Landmark::RightWrist) else {
        return ConstraintCheck::indeterminate(kind);
    };
    let Some(shoulder_y) = nf.avg_y(Landmark::LeftShoulder, Landmark::RightShoulder) else {
        return ConstraintCheck::indeterminate(kind);
    };

    let dy = wrist_y - shoulder_y;
    ConstraintCheck {
        kind,
        outcome: if dy >= 0.0 {
            Outcome::Pass
        } else {
            Outcome::Fail
        },
        ratios: vec![("wrist_shoulder_dy", dy)],
    }
}

/// Left/right wrist heights must match: each wrist's vertical offset from its
/// own shoulder is taken, and the absolute left/right difference is converted
/// to centimeters via the assumed physical shoulder width. At most
/// `wrist_symmetry_cm` of difference passes; strictly more fails.
fn wrist_symmetry(nf: &NormalizedFrame<'_>, sw: f32, cfg: &PostureCfg) -> ConstraintCheck {
    let kind = ConstraintKind::WristSymmetry;
    let Some((lw, ls)) = nf
        .point(Landmark::LeftWrist)
        .zip(nf.point(Landmark::LeftShoulder))
    else {
        return ConstraintCheck::indeterminate(kind);
    };
    let Some((rw, rs)) = nf
        .point(Landmark::RightWrist)
        .zip(nf.point(Landmark::RightShoulder))
    else {
        return ConstraintCheck::indeterminate(kind);
    };

    let left_offset = lw.y - ls.y;
    let right_offset = rw.y - rs.y;
    let cm_per_unit = cfg.shoulder_width_cm / sw;
    let diff_cm = (left_offset - right_offset).abs() * cm_per_unit;
    ConstraintCheck {
        kind,
        outcome: if diff_cm <= cfg.wrist_symmetry_cm {
            Outcome::Pass
        } else {
            Outcome::Fail
        },
        ratios: vec![("wrist_offset_diff_cm", diff_cm)],
    }
}
