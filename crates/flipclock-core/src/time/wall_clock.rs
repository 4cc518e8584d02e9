use std::cell::Cell;

use chrono::{DateTime, Utc};

/// Source of the current wall-clock instant.
pub trait WallClock {
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A wall clock that only moves when told to.
///
/// Useful for hosts that replay a fixed time and for tests.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        self.now.set(instant);
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl WallClock for ManualClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl<C: WallClock + ?Sized> WallClock for &C {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
