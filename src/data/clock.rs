use chrono::{DateTime, Utc};

/// Source of the current time, injected wherever freshness has to be judged.
pub trait TimeProvider {
    fn now(&self) -> DateTime<Utc>;
}

impl<P: TimeProvider + ?Sized> TimeProvider for &P {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Wall-clock time provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_time_does_not_go_backwards() {
        let clock = SystemTimeProvider;
        let first = clock.now();
        let second = (&clock).now();

        assert!(second >= first);
    }
}
