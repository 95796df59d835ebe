//! Clock seam for timestamp stamping.
//!
//! # Responsibility
//! - Produce the three time shapes persisted by the core: RFC 3339
//!   timestamps, `YYYY-MM-DD` calendar days and `HH:MM` wall times.
//! - Keep "now" injectable so lifecycle tests are deterministic.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a timestamp the way records persist it (RFC 3339 with
/// millisecond precision, `Z` suffix).
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Source of "now" for every stamped field in the core.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// RFC 3339 timestamp for `date` and `deliveredAt` fields.
    fn timestamp(&self) -> String {
        format_timestamp(self.now())
    }

    /// Calendar day (`YYYY-MM-DD`) for visitor entry dates.
    fn calendar_day(&self) -> String {
        self.now().format("%Y-%m-%d").to_string()
    }

    /// Wall-clock time (`HH:MM`) for visitor entry/exit times.
    fn wall_time(&self) -> String {
        self.now().format("%H:%M").to_string()
    }
}

/// System UTC clock used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn fixed_clock_produces_all_three_shapes() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 25, 14, 30, 5).unwrap());
        assert_eq!(clock.timestamp(), "2024-01-25T14:30:05.000Z");
        assert_eq!(clock.calendar_day(), "2024-01-25");
        assert_eq!(clock.wall_time(), "14:30");
    }
}
