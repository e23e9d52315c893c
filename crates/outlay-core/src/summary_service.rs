//! Period resolution and windowed spending aggregation.

use std::collections::HashMap;

use chrono::NaiveDate;

use outlay_domain::{
    start_of_month, start_of_week, CategorySummary, DailyTotals, DateWindow, Period,
    SpendingSummary,
};

use crate::{store::ExpenseStore, time::Clock, CoreError};

pub struct SummaryService;

impl SummaryService {
    /// Maps a caller-supplied period keyword onto the closed enum.
    pub fn parse_period(value: &str) -> Result<Period, CoreError> {
        Period::parse(value).ok_or_else(|| CoreError::InvalidPeriod(value.to_string()))
    }

    /// Resolves a period into the concrete window it names. `day`, `week`
    /// and `month` run from the period start up to the current instant;
    /// `custom` spans the given dates whole, start of day to 23:59:59.
    /// A custom period without both bounds is an invalid-period error.
    pub fn resolve_window(
        period: Period,
        custom: Option<(NaiveDate, NaiveDate)>,
        clock: &dyn Clock,
    ) -> Result<DateWindow, CoreError> {
        let now = clock.now();
        let window = match period {
            Period::Day => DateWindow::new(start_of_day(now.date()), now),
            Period::Week => DateWindow::new(start_of_day(start_of_week(now.date())), now),
            Period::Month => DateWindow::new(start_of_day(start_of_month(now.date())), now),
            Period::Custom => {
                let (start, end) = custom.ok_or_else(|| {
                    CoreError::InvalidPeriod("custom period requires start and end dates".into())
                })?;
                DateWindow::new(start_of_day(start), end_of_day(end))
            }
        };
        Ok(window)
    }

    /// Total spend over the resolved window, optionally narrowed to one
    /// category (case-insensitive).
    pub fn total(
        store: &dyn ExpenseStore,
        clock: &dyn Clock,
        period: Period,
        category: Option<&str>,
        custom: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<SpendingSummary, CoreError> {
        let window = Self::resolve_window(period, custom, clock)?;
        let mut expenses = store.scan_by_date_range(window.from, window.to)?;
        if let Some(category) = category {
            expenses.retain(|expense| expense.category.eq_ignore_ascii_case(category));
        }
        let total_spent = expenses.iter().map(|expense| expense.amount).sum();
        Ok(SpendingSummary {
            period,
            category: category.map(str::to_string),
            total_spent,
            from: window.from_date(),
            to: window.to_date(),
        })
    }

    /// Per-category totals over the resolved window. Buckets key on the
    /// stored category string verbatim; see [`CategorySummary`].
    pub fn by_category(
        store: &dyn ExpenseStore,
        clock: &dyn Clock,
        period: Period,
        custom: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<CategorySummary, CoreError> {
        let window = Self::resolve_window(period, custom, clock)?;
        let expenses = store.scan_by_date_range(window.from, window.to)?;
        let mut category_totals = HashMap::new();
        for expense in &expenses {
            *category_totals
                .entry(expense.category.clone())
                .or_insert(0.0) += expense.amount;
        }
        Ok(CategorySummary {
            from: window.from_date(),
            to: window.to_date(),
            category_totals,
        })
    }

    /// Per-day totals over `[start, end]`. Days with no expenses stay
    /// absent from the map.
    pub fn daily(
        store: &dyn ExpenseStore,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DailyTotals, CoreError> {
        let expenses = store.scan_by_date_range(start_of_day(start), end_of_day(end))?;
        let mut totals = DailyTotals::new();
        for expense in &expenses {
            *totals.entry(expense.date.date()).or_insert(0.0) += expense.amount;
        }
        Ok(totals)
    }
}

fn start_of_day(date: NaiveDate) -> chrono::NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap()
}

fn end_of_day(date: NaiveDate) -> chrono::NaiveDateTime {
    date.and_hms_opt(23, 59, 59).unwrap()
}
