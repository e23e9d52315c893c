//! Filtering, keyword search, and ordering over the full record scan.

use std::cmp::Ordering;

use outlay_domain::{Expense, ExpenseFilter, SortKey, SortOrder};

use crate::{store::ExpenseStore, CoreError};

pub struct QueryService;

impl QueryService {
    /// Runs the conjunctive filter set over a full scan. An empty filter
    /// returns the scan unchanged.
    pub fn filtered(
        store: &dyn ExpenseStore,
        filter: &ExpenseFilter,
    ) -> Result<Vec<Expense>, CoreError> {
        let mut expenses = store.scan_all()?;
        expenses.retain(|expense| filter.matches(expense));
        Ok(expenses)
    }

    /// Case-insensitive substring search across title, note, and tags. A
    /// record matches when any of the three fields is present and contains
    /// the keyword.
    pub fn search(store: &dyn ExpenseStore, keyword: &str) -> Result<Vec<Expense>, CoreError> {
        let needle = keyword.to_lowercase();
        let mut expenses = store.scan_all()?;
        expenses.retain(|expense| {
            contains_ci(expense.title.as_deref(), &needle)
                || contains_ci(expense.note.as_deref(), &needle)
                || contains_ci(expense.tags.as_deref(), &needle)
        });
        Ok(expenses)
    }

    /// Stable ordering by the requested key; ties keep the scan order, and
    /// descending reverses the comparison.
    pub fn sorted(
        store: &dyn ExpenseStore,
        key: SortKey,
        order: SortOrder,
    ) -> Result<Vec<Expense>, CoreError> {
        let mut expenses = store.scan_all()?;
        expenses.sort_by(|a, b| {
            let ordering = compare_by_key(key, a, b);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        Ok(expenses)
    }
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .map(|text| text.to_lowercase().contains(needle))
        .unwrap_or(false)
}

fn compare_by_key(key: SortKey, a: &Expense, b: &Expense) -> Ordering {
    match key {
        SortKey::Amount => a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal),
        SortKey::Title => compare_ci(a.title.as_deref(), b.title.as_deref()),
        SortKey::Category => compare_ci(Some(&a.category), Some(&b.category)),
        SortKey::Date => a.date.cmp(&b.date),
    }
}

// Missing titles order as empty strings rather than failing the request.
fn compare_ci(a: Option<&str>, b: Option<&str>) -> Ordering {
    let left = a.unwrap_or("").to_lowercase();
    let right = b.unwrap_or("").to_lowercase();
    left.cmp(&right)
}
