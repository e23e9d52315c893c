//! Filter and ordering parameters for expense queries.

use chrono::NaiveDateTime;

use crate::expense::Expense;

/// Optional, independently composable predicates over an expense scan.
///
/// Every absent field means "no constraint from that dimension"; fields
/// that are present must all pass. A category-only filter and a
/// date-range-only filter are each satisfiable on their own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    pub category: Option<String>,
    pub date_range: Option<(NaiveDateTime, NaiveDateTime)>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive exact category match.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Record date within `[start, end]`, inclusive on both ends.
    pub fn date_range(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.date_range = Some((start, end));
        self
    }

    pub fn min_amount(mut self, min: f64) -> Self {
        self.min_amount = Some(min);
        self
    }

    pub fn max_amount(mut self, max: f64) -> Self {
        self.max_amount = Some(max);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.date_range.is_none()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = &self.category {
            if !expense.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some((start, end)) = self.date_range {
            if expense.date < start || expense.date > end {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if expense.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if expense.amount > max {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Field a listing is ordered by.
pub enum SortKey {
    #[default]
    Date,
    Amount,
    Title,
    Category,
}

impl SortKey {
    /// Deliberately permissive: anything unrecognized falls back to date
    /// ordering, matching the listing endpoint's long-standing behavior.
    pub fn parse(value: &str) -> SortKey {
        match value.trim().to_ascii_lowercase().as_str() {
            "amount" => SortKey::Amount,
            "title" => SortKey::Title,
            "category" => SortKey::Category,
            _ => SortKey::Date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only an explicit `desc` reverses; everything else sorts ascending.
    pub fn parse(value: &str) -> SortOrder {
        if value.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}
