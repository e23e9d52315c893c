//! Record-level operations on the expense store.

use chrono::NaiveDateTime;
use uuid::Uuid;

use outlay_domain::Expense;

use crate::{store::ExpenseStore, CoreError};

/// CRUD and status operations: everything a caller can do to a single
/// expense record.
pub struct ExpenseService;

impl ExpenseService {
    pub fn add(store: &dyn ExpenseStore, expense: Expense) -> Result<Expense, CoreError> {
        store.insert(expense)
    }

    pub fn get(store: &dyn ExpenseStore, id: Uuid) -> Result<Expense, CoreError> {
        store.get(id)
    }

    /// Applies caller-supplied details onto the stored record. The active
    /// flag and the recurrence end date are lifecycle state and are not
    /// taken from the payload.
    pub fn update(
        store: &dyn ExpenseStore,
        id: Uuid,
        details: Expense,
    ) -> Result<Expense, CoreError> {
        let mut existing = store.get(id)?;
        existing.title = details.title;
        existing.amount = details.amount;
        existing.category = details.category;
        existing.date = details.date;
        existing.recurrence = details.recurrence;
        existing.note = details.note;
        existing.tags = details.tags;
        store.update(id, existing)
    }

    pub fn delete(store: &dyn ExpenseStore, id: Uuid) -> Result<(), CoreError> {
        store.delete(id)
    }

    pub fn list(store: &dyn ExpenseStore) -> Result<Vec<Expense>, CoreError> {
        store.scan_all()
    }

    pub fn list_by_category(
        store: &dyn ExpenseStore,
        category: &str,
    ) -> Result<Vec<Expense>, CoreError> {
        store.scan_by_category(category)
    }

    pub fn list_by_date_range(
        store: &dyn ExpenseStore,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<Expense>, CoreError> {
        store.scan_by_date_range(from, to)
    }

    pub fn recurring(store: &dyn ExpenseStore) -> Result<Vec<Expense>, CoreError> {
        store.scan_recurring()
    }

    /// Activates or deactivates a recurring record. A deactivated source
    /// is skipped by the daily recurrence check.
    pub fn set_recurring_status(
        store: &dyn ExpenseStore,
        id: Uuid,
        active: bool,
    ) -> Result<Expense, CoreError> {
        let mut expense = store.get(id)?;
        expense.active = active;
        store.update(id, expense)
    }
}
