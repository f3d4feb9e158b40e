use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

use crate::data::TimeProvider;

/// Clock double that only moves when told to.
#[derive(Debug)]
pub struct FakeTimeProvider {
    now: Cell<DateTime<Utc>>,
}

impl FakeTimeProvider {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now: Cell::new(now) }
    }

    /// Clock set to `millis` after the Unix epoch; out-of-range values clamp
    /// to the epoch.
    pub fn from_millis(millis: i64) -> Self {
        Self::at(DateTime::from_timestamp_millis(millis).unwrap_or_default())
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl TimeProvider for FakeTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}
