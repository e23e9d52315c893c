//! Typed aggregation results for spending summaries.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::Period;

/// Windowed spending total, optionally narrowed to one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingSummary {
    pub period: Period,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub total_spent: f64,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Per-category totals over a window.
///
/// Keys are the stored category strings verbatim. The category *filter*
/// matches case-insensitively, but grouping does not fold case; "Food" and
/// "food" stay separate buckets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub category_totals: HashMap<String, f64>,
}

/// Per-day totals keyed by calendar date. Days without expenses are simply
/// absent, never zero-filled.
pub type DailyTotals = HashMap<NaiveDate, f64>;
