//! Common time/period helpers for reptrack_core.

/// Number of milliseconds in one second.
pub const MILLIS_PER_SEC: u64 = 1_000;

/// Compute the frame period in milliseconds for a given frame rate in fps.
/// - Clamps `fps` to at least 1 to avoid division by zero.
/// - Ensures result is at least 1 millisecond.
#[inline]
pub fn period_ms(fps: u32) -> u64 {
    (MILLIS_PER_SEC / u64::from(fps.max(1))).max(1)
}
