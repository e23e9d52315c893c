//! Shared time primitives for query windows and summary periods.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Resolved reporting window. Both bounds are inclusive: a record landing
/// exactly on either bound is part of the window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl DateWindow {
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.from && at <= self.to
    }

    /// Date-only form of the lower bound, used for summary labels.
    pub fn from_date(&self) -> NaiveDate {
        self.from.date()
    }

    /// Date-only form of the upper bound.
    pub fn to_date(&self) -> NaiveDate {
        self.to.date()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Named reporting periods accepted by the summary operations.
pub enum Period {
    Day,
    Week,
    Month,
    Custom,
}

impl Period {
    /// Case-insensitive keyword lookup. Unknown keywords are a caller
    /// mistake; services surface them as an invalid-period error rather
    /// than defaulting.
    pub fn parse(value: &str) -> Option<Period> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" => Some(Period::Day),
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            "custom" => Some(Period::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Custom => "custom",
        };
        f.write_str(label)
    }
}

/// Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

/// Shifts a date by whole calendar months, clamping the day to the target
/// month's length (Jan 31 + 1 month = Feb 28/29).
pub(crate) fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let zero_based = date.year() * 12 + date.month() as i32 - 1 + months;
    let year = zero_based.div_euclid(12);
    let month = (zero_based.rem_euclid(12) + 1) as u32;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    (first_of_next - Duration::days(1)).day()
}
