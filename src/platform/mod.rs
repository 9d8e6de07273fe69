//! Platform abstraction layer
//!
//! Wall-clock access and frame pacing for native frontends. The
//! simulation itself never touches these; it counts ticks.

use std::time::{Duration, Instant};

/// Monotonic wall-clock source
pub trait Clock {
    /// Milliseconds since the clock was created
    fn now_ms(&self) -> u64;
}

/// Clock backed by [`Instant`]
#[derive(Debug)]
pub struct StdClock {
    start: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Blocking pacer that holds a loop to a fixed tick rate
///
/// Late frames are absorbed by skipping ahead rather than sleeping a
/// negative duration, so a stalled process resumes at the current time
/// instead of fast-forwarding.
#[derive(Debug)]
pub struct FramePacer {
    period: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(rate_hz: u32) -> Self {
        let period = Duration::from_secs(1) / rate_hz;
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    /// Block until the next frame boundary
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next > now {
            std::thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            // Running behind: rebase on the present
            self.next = now + self.period;
        }
    }
}
