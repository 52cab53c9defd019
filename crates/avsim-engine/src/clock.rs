//! Injectable time source for report and quarantine timestamps.

use chrono::{DateTime, Utc};

/// Source of wall-clock timestamps
pub trait Clock: Send + Sync {
    /// The current time
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant, for reproducible tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Create a clock that always reports the given instant
    #[must_use]
    pub const fn at(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_never_moves() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let clock = FixedClock::at(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }
}
