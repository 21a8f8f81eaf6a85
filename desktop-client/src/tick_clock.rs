use std::time::{Duration, Instant};

/// Upper bound of ticks replayed in one frame after the window was stalled.
pub const MAX_TICKS_PER_FRAME: u32 = 5;

/// Turns wall-clock frame times into fixed game ticks. The interval is passed
/// on every call because the game speeds up while it is running.
#[derive(Debug, Default)]
pub struct TickClock {
    last: Option<Instant>,
    accumulated: Duration,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, now: Instant) {
        if let Some(last) = self.last {
            self.accumulated += now.saturating_duration_since(last);
        }
        self.last = Some(now);
    }

    pub fn try_consume(&mut self, interval: Duration) -> bool {
        if interval.is_zero() || self.accumulated < interval {
            return false;
        }
        self.accumulated -= interval;
        true
    }

    /// Drops accumulated time. Used while the game is not running so that
    /// resuming does not replay the pause.
    pub fn reset(&mut self) {
        self.last = None;
        self.accumulated = Duration::ZERO;
    }

    /// Drops whatever remains after the per-frame tick budget was used up.
    pub fn discard_backlog(&mut self, interval: Duration) {
        if self.accumulated >= interval {
            self.accumulated = Duration::ZERO;
        }
    }

    pub fn time_until_next(&self, interval: Duration) -> Duration {
        interval.saturating_sub(self.accumulated)
    }
}
