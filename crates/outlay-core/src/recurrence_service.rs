//! Daily recurrence check: advancing due recurring expenses by one period.

use std::sync::Mutex;

use chrono::NaiveDate;
use tracing::warn;
use uuid::Uuid;

use outlay_domain::Expense;

use crate::{store::ExpenseStore, CoreError};

/// Outcome of one daily check.
#[derive(Debug, Default)]
pub struct RecurrenceRun {
    /// Occurrences created this run, with their store-assigned ids.
    pub generated: Vec<Expense>,
    /// Records the run could not fully advance. The run continues past
    /// each of these.
    pub failures: Vec<RecurrenceFailure>,
}

/// A deactivate-then-create pair that did not complete.
#[derive(Debug)]
pub struct RecurrenceFailure {
    pub source_id: Uuid,
    pub error: CoreError,
    /// True when the source deactivation had already persisted before the
    /// failing write, leaving the pair half-applied.
    pub source_deactivated: bool,
}

pub struct RecurrenceService;

impl RecurrenceService {
    /// Advances every due recurring record: the source is deactivated and
    /// a fresh occurrence dated `today` takes its place. `today` is an
    /// explicit input; the scheduler passes the current date, tests pass
    /// whatever day they need.
    ///
    /// Because the source is persisted deactivated before the occurrence
    /// is inserted, a second check on the same day finds nothing due and
    /// writes nothing. A failed scan aborts the whole run; the next
    /// scheduled run retries from scratch.
    pub fn run_daily_check(
        store: &dyn ExpenseStore,
        today: NaiveDate,
    ) -> Result<RecurrenceRun, CoreError> {
        let recurring = store.scan_recurring()?;
        let mut run = RecurrenceRun::default();

        for source in recurring {
            if !source.active {
                continue;
            }
            if let Some(end) = source.recurrence_end_date {
                if today > end {
                    continue;
                }
            }
            let Some(next) = source.recurrence.next_date(source.date.date()) else {
                continue;
            };
            if next != today {
                continue;
            }

            match Self::advance(store, &source, next) {
                Ok(occurrence) => run.generated.push(occurrence),
                Err(failure) => {
                    warn!(
                        source_id = %failure.source_id,
                        source_deactivated = failure.source_deactivated,
                        error = %failure.error,
                        "recurrence advancement failed"
                    );
                    run.failures.push(failure);
                }
            }
        }

        Ok(run)
    }

    // Deactivates the source, then inserts the generated occurrence. The
    // two writes are one logical unit; a failure between them is reported
    // with `source_deactivated` set.
    fn advance(
        store: &dyn ExpenseStore,
        source: &Expense,
        next: NaiveDate,
    ) -> Result<Expense, RecurrenceFailure> {
        let mut deactivated = source.clone();
        deactivated.active = false;
        store
            .update(source.id, deactivated)
            .map_err(|error| RecurrenceFailure {
                source_id: source.id,
                error,
                source_deactivated: false,
            })?;

        store
            .insert(source.next_occurrence(next))
            .map_err(|error| RecurrenceFailure {
                source_id: source.id,
                error,
                source_deactivated: true,
            })
    }
}

/// Serializes daily checks so two triggers of the scheduled job never
/// overlap. Read queries are not excluded and may run alongside a check.
#[derive(Debug, Default)]
pub struct RecurrenceEngine {
    run_lock: Mutex<()>,
}

impl RecurrenceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(
        &self,
        store: &dyn ExpenseStore,
        today: NaiveDate,
    ) -> Result<RecurrenceRun, CoreError> {
        // A poisoned lock means a previous run panicked; the check is
        // restartable, so the guard is recovered rather than propagated.
        let _guard = self.run_lock.lock().unwrap_or_else(|e| e.into_inner());
        RecurrenceService::run_daily_check(store, today)
    }
}
