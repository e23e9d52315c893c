//! Domain model for expense records and their recurrence cadence.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::shift_month;

/// A single monetary expense entry.
///
/// A freshly constructed record carries the nil id; the store assigns a
/// real identifier on insert and the id never changes afterwards. Amounts
/// are signed so refunds can be recorded as negatives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default = "Expense::default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_end_date: Option<NaiveDate>,
}

impl Expense {
    pub fn new(category: impl Into<String>, amount: f64, date: NaiveDateTime) -> Self {
        Self {
            id: Uuid::nil(),
            title: None,
            amount,
            category: category.into(),
            date,
            recurrence: Recurrence::None,
            active: true,
            note: None,
            tags: None,
            recurrence_end_date: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn with_recurrence_end_date(mut self, end: NaiveDate) -> Self {
        self.recurrence_end_date = Some(end);
        self
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_recurring()
    }

    /// Builds the generated occurrence that supersedes this record on
    /// `date`. Only the display fields and cadence carry over; the new
    /// record starts its own lifecycle at the start of the day, active,
    /// with no note, tags, or end date of its own.
    pub fn next_occurrence(&self, date: NaiveDate) -> Expense {
        Expense {
            id: Uuid::nil(),
            title: self.title.clone(),
            amount: self.amount,
            category: self.category.clone(),
            date: date.and_hms_opt(0, 0, 0).unwrap(),
            recurrence: self.recurrence,
            active: true,
            note: None,
            tags: None,
            recurrence_end_date: None,
        }
    }

    pub fn default_active() -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
/// How often an expense repeats. `None` marks an ordinary one-off entry.
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    pub fn is_recurring(self) -> bool {
        !matches!(self, Recurrence::None)
    }

    /// The next scheduled date one period after `from`, or `None` for
    /// non-recurring entries. Monthly advancement clamps to the target
    /// month's length.
    pub fn next_date(self, from: NaiveDate) -> Option<NaiveDate> {
        match self {
            Recurrence::None => None,
            Recurrence::Daily => Some(from + Duration::days(1)),
            Recurrence::Weekly => Some(from + Duration::weeks(1)),
            Recurrence::Monthly => Some(shift_month(from, 1)),
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Recurrence::None => "none",
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
        };
        f.write_str(label)
    }
}

impl FromStr for Recurrence {
    type Err = ParseRecurrenceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Recurrence::None),
            "daily" => Ok(Recurrence::Daily),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            other => Err(ParseRecurrenceError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raised when a caller supplies a recurrence keyword outside the closed
/// set.
pub struct ParseRecurrenceError(pub String);

impl fmt::Display for ParseRecurrenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized recurrence `{}`", self.0)
    }
}

impl std::error::Error for ParseRecurrenceError {}
