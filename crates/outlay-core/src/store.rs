//! Record-store contract and the in-memory reference implementation.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDateTime;
use uuid::Uuid;

use outlay_domain::Expense;

use crate::CoreError;

/// Abstraction over the record store holding expense entries.
///
/// Scans return a snapshot taken at call time; a write landing mid-scan may
/// or may not be reflected. Callers get best-effort consistency, not
/// isolation.
pub trait ExpenseStore: Send + Sync {
    /// Persists a new record, assigning it a fresh identifier.
    fn insert(&self, expense: Expense) -> Result<Expense, CoreError>;

    /// Replaces the record with the given id. The stored id never changes.
    fn update(&self, id: Uuid, expense: Expense) -> Result<Expense, CoreError>;

    /// Removes a record. Removing an unknown id is a no-op.
    fn delete(&self, id: Uuid) -> Result<(), CoreError>;

    fn get(&self, id: Uuid) -> Result<Expense, CoreError>;

    /// Every record, in an order that is unspecified but stable within a
    /// single call.
    fn scan_all(&self) -> Result<Vec<Expense>, CoreError>;

    /// Records whose category matches case-insensitively.
    fn scan_by_category(&self, category: &str) -> Result<Vec<Expense>, CoreError>;

    /// Records dated within `[from, to]`, inclusive on both ends.
    fn scan_by_date_range(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<Expense>, CoreError>;

    /// Records with a recurrence other than `none`.
    fn scan_recurring(&self) -> Result<Vec<Expense>, CoreError>;
}

/// Insertion-ordered in-memory store: the reference implementation behind
/// the JSON backend and the fixture store for service tests.
#[derive(Debug, Default)]
pub struct MemoryExpenseStore {
    records: RwLock<Vec<Expense>>,
}

impl MemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with already-identified records, e.g. loaded from a
    /// persistence backend.
    pub fn with_records(records: Vec<Expense>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Snapshot of the full record set, for persistence backends.
    pub fn snapshot(&self) -> Vec<Expense> {
        self.read().clone()
    }

    // A poisoned lock only means a panicking reader/writer; the data is a
    // plain Vec and stays usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Expense>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Expense>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl ExpenseStore for MemoryExpenseStore {
    fn insert(&self, mut expense: Expense) -> Result<Expense, CoreError> {
        expense.id = Uuid::new_v4();
        self.write().push(expense.clone());
        Ok(expense)
    }

    fn update(&self, id: Uuid, mut expense: Expense) -> Result<Expense, CoreError> {
        let mut records = self.write();
        let slot = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(CoreError::NotFound(id))?;
        expense.id = id;
        *slot = expense.clone();
        Ok(expense)
    }

    fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        self.write().retain(|record| record.id != id);
        Ok(())
    }

    fn get(&self, id: Uuid) -> Result<Expense, CoreError> {
        self.read()
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(CoreError::NotFound(id))
    }

    fn scan_all(&self) -> Result<Vec<Expense>, CoreError> {
        Ok(self.read().clone())
    }

    fn scan_by_category(&self, category: &str) -> Result<Vec<Expense>, CoreError> {
        Ok(self
            .read()
            .iter()
            .filter(|record| record.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect())
    }

    fn scan_by_date_range(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<Expense>, CoreError> {
        Ok(self
            .read()
            .iter()
            .filter(|record| record.date >= from && record.date <= to)
            .cloned()
            .collect())
    }

    fn scan_recurring(&self) -> Result<Vec<Expense>, CoreError> {
        Ok(self
            .read()
            .iter()
            .filter(|record| record.is_recurring())
            .cloned()
            .collect())
    }
}
