//! Wall-clock access behind a trait so the time-of-day rules can be
//! exercised at arbitrary instants in tests.

use chrono::{Local, NaiveDateTime};

pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// The system clock in the server's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
