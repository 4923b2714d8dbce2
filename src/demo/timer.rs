use std::time::Duration;

/// A repeating timer driven by an external clock.
///
/// Nothing runs in the background: the owner calls [`IntervalTimer::poll`] with the current time.
/// Starting always replaces the previous schedule, so a feature never ends up with two intervals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntervalTimer {
    period: Duration,
    next_due: Option<Duration>,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.next_due
    }

    /// (Re)schedule the first tick one period after `now`.
    pub fn start(&mut self, now: Duration) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Whether a tick is due at `now`; fires at most once per call, then reschedules from `now`.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/timer.rs"]
mod tests;
