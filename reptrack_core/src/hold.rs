//! Minimum-dwell gate for the down state.

/// Tracks when the down state was entered and withholds the down→up
/// transition until the configured dwell has elapsed. Re-entering down resets
/// the clock; `hold_ms == 0` makes the gate always satisfied once armed.
#[derive(Debug, Clone, Copy)]
pub struct HoldGate {
    hold_ms: u64,
    down_since_ms: Option<u64>,
}

impl HoldGate {
    pub fn new(hold_ms: u64) -> Self {
        Self {
            hold_ms,
            down_since_ms: None,
        }
    }

    /// Start (or restart) the dwell clock at `now_ms`.
    pub fn arm(&mut self, now_ms: u64) {
        self.down_since_ms = Some(now_ms);
    }

    /// Clear the dwell clock (left the down state without completing).
    pub fn reset(&mut self) {
        self.down_since_ms = None;
    }

    /// Whether enough dwell has accrued by `now_ms`. Never satisfied while
    /// unarmed.
    pub fn satisfied(&self, now_ms: u64) -> bool {
        match self.down_since_ms {
            Some(since) => now_ms.saturating_sub(since) >= self.hold_ms,
            None => false,
        }
    }
}
