use std::time::{Duration, Instant};

/// A single cancellable periodic task, driven by the caller's clock.
///
/// There is no background thread: the owner asks how many periods have
/// elapsed whenever it gets a chance to run.
pub struct Ticker {
    period: Duration,
    max_catch_up: u32,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration, max_catch_up: u32) -> Self {
        assert!(!period.is_zero());
        Self {
            period,
            max_catch_up: max_catch_up.max(1),
            next_due: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Schedules the first tick one period from `now`.
    ///
    /// Does nothing if the ticker is already active.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Number of ticks that became due by `now`, at most `max_catch_up`.
    ///
    /// When more were missed, the schedule restarts from `now`.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(mut next_due) = self.next_due else {
            return 0;
        };
        let mut ticks = 0;
        while next_due <= now {
            ticks += 1;
            next_due += self.period;
            if ticks == self.max_catch_up {
                if next_due <= now {
                    next_due = now + self.period;
                }
                break;
            }
        }
        self.next_due = Some(next_due);
        ticks
    }

    /// Time left until the next tick, `None` if stopped.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
