//! Quick Start Example
//!
//! Demonstrates how to set up a rep tracker and feed it a short synthetic
//! pushup sequence. Run with `cargo run -p reptrack_core --example quick_start`.

use reptrack_core::RepTracker;
use reptrack_core::mocks::PushupPose;

fn main() -> Result<(), eyre::Report> {
    // Default thresholds: down below 90 degrees, up above 160.
    let mut tracker = RepTracker::builder().build()?;
    tracker.begin();

    // Two clean reps at roughly 10 fps.
    let degs = [170.0, 120.0, 85.0, 120.0, 170.0, 120.0, 85.0, 120.0, 170.0];
    for (i, &deg) in degs.iter().enumerate() {
        let frame = PushupPose::new().elbow_deg(deg).at(i as u64 * 100);
        let report = tracker.step(&frame);
        println!(
            "{:>4} ms  state={:<4} reps={}  cue: {}",
            report.timestamp_ms, report.state, report.rep_count, report.cue
        );
    }

    println!("total reps: {}", tracker.rep_count());
    Ok(())
}
