use reptrack_core::mocks::PushupPose;
use reptrack_core::{
    AngleSignal, FeedbackCue, RepState, RepTracker, RepTrackerBuilder, TimingCfg,
};

fn tracker() -> RepTracker {
    RepTrackerBuilder::new().build().unwrap()
}

/// A clean descent and ascent credits exactly one rep, on the up-cross frame.
#[test]
fn full_rep_counts_once() {
    let mut t = tracker();
    let reports = [
        t.step(&PushupPose::new().elbow_deg(170.0).at(0)),
        t.step(&PushupPose::new().elbow_deg(120.0).at(33)),
        t.step(&PushupPose::new().elbow_deg(85.0).at(66)),
        t.step(&PushupPose::new().elbow_deg(120.0).at(100)),
        t.step(&PushupPose::new().elbow_deg(170.0).at(133)),
    ];
    assert_eq!(t.rep_count(), 1);
    assert_eq!(t.state(), RepState::Up);
    assert!(reports[..4].iter().all(|r| !r.rep_counted));
    assert!(reports[4].rep_counted);
    assert_eq!(reports[4].rep_count, 1);
}

/// Bobbing inside the hysteresis band never transitions, so nothing counts.
#[test]
fn partial_rep_does_not_count() {
    let mut t = tracker();
    for (deg, ts) in [(170.0, 0), (120.0, 33), (100.0, 66), (120.0, 100), (170.0, 133)] {
        t.step(&PushupPose::new().elbow_deg(deg).at(ts));
    }
    assert_eq!(t.rep_count(), 0);
    assert_eq!(t.state(), RepState::Up);
}

/// Repeated frames at the top are idempotent once in the up state.
#[test]
fn holding_at_top_stays_at_one() {
    let mut t = tracker();
    t.step(&PushupPose::new().elbow_deg(85.0).at(0));
    t.step(&PushupPose::new().elbow_deg(170.0).at(33));
    assert_eq!(t.rep_count(), 1);
    for ts in [66, 100, 133, 166] {
        let r = t.step(&PushupPose::new().elbow_deg(170.0).at(ts));
        assert!(!r.rep_counted);
    }
    assert_eq!(t.rep_count(), 1);
}

/// Broken plank alignment at the up-cross blocks credit but keeps progress.
#[test]
fn soft_fail_blocks_credit_without_reset() {
    let mut t = tracker();
    t.step(&PushupPose::new().elbow_deg(85.0).at(0));
    assert_eq!(t.state(), RepState::Down);

    let r = t.step(&PushupPose::new().elbow_deg(170.0).plank_break(2.0).at(33));
    assert_eq!(t.rep_count(), 0);
    assert_eq!(t.state(), RepState::Down);
    assert!(!r.verdict.full_pass());
    assert!(!r.verdict.hard_fail());

    // Form restored at the next up frame: the rep completes.
    t.step(&PushupPose::new().elbow_deg(170.0).at(66));
    assert_eq!(t.rep_count(), 1);
}

/// Standing up mid-rep is a hard failure: state resets and progress is lost.
#[test]
fn standing_resets_to_idle() {
    let mut t = tracker();
    t.step(&PushupPose::new().elbow_deg(85.0).at(0));
    assert_eq!(t.state(), RepState::Down);

    t.step(&PushupPose::new().standing().at(33));
    assert_eq!(t.state(), RepState::Idle);
    assert_eq!(t.rep_count(), 0);

    // Going straight up from idle earns nothing.
    t.step(&PushupPose::new().elbow_deg(170.0).at(66));
    assert_eq!(t.rep_count(), 0);
    assert_eq!(t.state(), RepState::Up);
}

/// Wrists above the shoulders (hands off the floor) is also a hard failure.
#[test]
fn raised_wrists_reset_to_idle() {
    let mut t = tracker();
    t.step(&PushupPose::new().elbow_deg(85.0).at(0));
    t.step(&PushupPose::new().wrists_raised().elbow_deg(85.0).at(33));
    assert_eq!(t.state(), RepState::Idle);
    assert_eq!(t.rep_count(), 0);
}

/// Low-confidence frames never move the machine or count anything.
#[test]
fn low_confidence_frames_are_inert() {
    let mut t = tracker();
    let r = t.step(&PushupPose::new().elbow_deg(85.0).low_confidence().at(0));
    assert_eq!(r.elbow.classify(&reptrack_core::AngleCfg::default()), AngleSignal::Unknown);
    assert!(r.verdict.any_indeterminate());
    assert_eq!(t.state(), RepState::Idle);
    assert_eq!(r.cue, FeedbackCue::NotVisible);
}

/// An uneven stance fails wrist symmetry and blocks credit.
#[test]
fn asymmetric_wrists_block_credit() {
    let mut t = tracker();
    t.step(&PushupPose::new().elbow_deg(85.0).at(0));
    // 0.05 normalized units at a 0.1 shoulder width and 40 cm assumed width
    // is a 20 cm height difference, well past the default 15 cm.
    let r = t.step(&PushupPose::new().wrist_skew(0.05).elbow_deg(170.0).at(33));
    assert!(!r.verdict.full_pass());
    assert_eq!(t.rep_count(), 0);
    assert_eq!(t.state(), RepState::Down);
}

/// With a nonzero hold, an up-cross before the dwell elapses does not count;
/// the same cross after the dwell does.
#[test]
fn hold_gate_withholds_early_upcross() {
    let mut t = RepTrackerBuilder::new()
        .with_timing(TimingCfg {
            hold_ms: 300,
            feedback_debounce_ms: 0,
        })
        .build()
        .unwrap();

    t.step(&PushupPose::new().elbow_deg(85.0).at(0));
    let early = t.step(&PushupPose::new().elbow_deg(170.0).at(100));
    assert!(!early.rep_counted);
    assert_eq!(t.state(), RepState::Down);

    let late = t.step(&PushupPose::new().elbow_deg(170.0).at(400));
    assert!(late.rep_counted);
    assert_eq!(t.rep_count(), 1);
    assert_eq!(t.state(), RepState::Up);
}

/// Angles well inside the band leave the machine where it was.
#[test]
fn in_band_angles_do_not_transition() {
    let mut t = tracker();
    t.step(&PushupPose::new().elbow_deg(170.0).at(0));
    for (deg, ts) in [(159.0, 33), (91.0, 66), (125.0, 100)] {
        t.step(&PushupPose::new().elbow_deg(deg).at(ts));
        assert_eq!(t.state(), RepState::Up);
    }
    assert_eq!(t.rep_count(), 0);
}

/// `begin` wipes session state but keeps thresholds.
#[test]
fn begin_resets_session() {
    let mut t = tracker();
    t.step(&PushupPose::new().elbow_deg(85.0).at(0));
    t.step(&PushupPose::new().elbow_deg(170.0).at(33));
    assert_eq!(t.rep_count(), 1);

    t.begin();
    assert_eq!(t.rep_count(), 0);
    assert_eq!(t.state(), RepState::Idle);

    t.step(&PushupPose::new().elbow_deg(85.0).at(1_000));
    t.step(&PushupPose::new().elbow_deg(170.0).at(1_033));
    assert_eq!(t.rep_count(), 1);
}

/// The debounced cue follows the session through a rep.
#[test]
fn cues_follow_the_movement() {
    let mut t = RepTrackerBuilder::new()
        .with_timing(TimingCfg {
            hold_ms: 0,
            feedback_debounce_ms: 0,
        })
        .build()
        .unwrap();

    let top = t.step(&PushupPose::new().elbow_deg(170.0).at(0));
    assert_eq!(top.cue, FeedbackCue::GoDown);

    let bottom = t.step(&PushupPose::new().elbow_deg(85.0).at(33));
    assert_eq!(bottom.cue, FeedbackCue::PushUp);

    let standing = t.step(&PushupPose::new().standing().at(66));
    assert_eq!(standing.cue, FeedbackCue::GetIntoPlank);
}
