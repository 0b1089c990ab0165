use std::time::{Duration, Instant};

/// Tick source owned by the game state machine.
///
/// The engine arms the scheduler whenever a run starts or its interval
/// changes and cancels it whenever the run stops, so pauses and game
/// overs never leave a timer running behind the state machine's back.
pub trait TickScheduler {
    /// Starts (or restarts) periodic firing at `interval`.
    fn arm(&mut self, interval: Duration);

    /// Stops firing until the next `arm`.
    fn cancel(&mut self);
}

#[derive(Debug, Clone, Copy)]
struct Deadline {
    interval: Duration,
    due_at: Instant,
}

/// Wall-clock scheduler for the terminal front-end.
///
/// `poll` re-anchors the deadline on the polling instant, so time spent
/// paused or stalled produces no burst of catch-up ticks afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalTimer {
    armed: Option<Deadline>,
}

impl IntervalTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the armed interval has elapsed, and schedules
    /// the next deadline relative to `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.armed.as_mut() else {
            return false;
        };

        if now < deadline.due_at {
            return false;
        }

        deadline.due_at = now + deadline.interval;
        true
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

impl TickScheduler for IntervalTimer {
    fn arm(&mut self, interval: Duration) {
        self.armed = Some(Deadline {
            interval,
            due_at: Instant::now() + interval,
        });
    }

    fn cancel(&mut self) {
        self.armed = None;
    }
}

/// Scheduler stand-in for tests; records calls instead of keeping time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualScheduler {
    armed: Option<Duration>,
    arms: usize,
    cancels: usize,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interval of the most recent `arm`, or `None` after a `cancel`.
    #[must_use]
    pub fn armed_interval(&self) -> Option<Duration> {
        self.armed
    }

    #[must_use]
    pub fn arm_calls(&self) -> usize {
        self.arms
    }

    #[must_use]
    pub fn cancel_calls(&self) -> usize {
        self.cancels
    }
}

impl TickScheduler for ManualScheduler {
    fn arm(&mut self, interval: Duration) {
        self.armed = Some(interval);
        self.arms += 1;
    }

    fn cancel(&mut self) {
        self.armed = None;
        self.cancels += 1;
    }
}
