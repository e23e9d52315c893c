//! Clock abstraction and date parsing at the service boundary.

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::CoreError;

/// Clock abstracts access to the current timestamp so services remain
/// deterministic in tests. Times are naive local, matching the timestamps
/// stored on expense records.
pub trait Clock: Send + Sync {
    /// Returns the current timestamp.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current date. Defaults to `now().date()`.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall-clock implementation used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Parses a `YYYY-MM-DD` calendar date supplied by a caller.
pub fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidDate(value.to_string()))
}

/// Parses a caller-supplied timestamp, accepting a bare date as midnight.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, CoreError> {
    let trimmed = value.trim();
    if let Ok(at) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(at);
    }
    parse_date(trimmed).map(|date| date.and_hms_opt(0, 0, 0).unwrap())
}
