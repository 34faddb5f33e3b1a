use std::time::{Duration, Instant};

/// Countdown period: one decrement per second
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Event poll timeout, short enough to keep the readout and key handling
/// responsive between ticks
pub const POLL_INTERVAL_MS: u64 = 250;

pub fn poll_timeout() -> Duration {
    Duration::from_millis(POLL_INTERVAL_MS)
}

/// Tick source for the countdown.
///
/// A deadline exists exactly while the countdown runs: `sync` arms it when
/// the engine reports running and drops it the moment it does not, so a
/// tick scheduled before a pause can never fire after the pause. Due ticks
/// are counted against the wall clock, which keeps the countdown honest
/// when the event loop stalls longer than one period.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    next_deadline: Option<Instant>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.next_deadline.is_some()
    }

    /// Tie the deadline's existence to the running flag
    pub fn sync(&mut self, running: bool) {
        if running {
            self.arm_at(Instant::now());
        } else {
            self.next_deadline = None;
        }
    }

    /// Number of whole ticks now due; the deadline advances past them
    pub fn poll(&mut self) -> u32 {
        self.due_at(Instant::now())
    }

    fn arm_at(&mut self, now: Instant) {
        if self.next_deadline.is_none() {
            self.next_deadline = Some(now + TICK_INTERVAL);
        }
    }

    fn due_at(&mut self, now: Instant) -> u32 {
        let mut fired = 0;
        while let Some(deadline) = self.next_deadline {
            if now < deadline {
                break;
            }
            self.next_deadline = Some(deadline + TICK_INTERVAL);
            fired += 1;
        }
        fired
    }
}
