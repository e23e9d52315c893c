//! outlay-core
//!
//! Business logic and services for the expense tracker: querying,
//! aggregation, and recurrence generation over an injected record store.
//! Depends on outlay-domain. No HTTP, no terminal I/O, no direct
//! filesystem access.

pub mod error;
pub mod expense_service;
pub mod query_service;
pub mod recurrence_service;
pub mod store;
pub mod summary_service;
pub mod time;

pub use error::CoreError;
pub use expense_service::ExpenseService;
pub use query_service::QueryService;
pub use recurrence_service::{RecurrenceEngine, RecurrenceFailure, RecurrenceRun, RecurrenceService};
pub use store::{ExpenseStore, MemoryExpenseStore};
pub use summary_service::SummaryService;
pub use time::{parse_date, parse_datetime, Clock, FixedClock, SystemClock};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with sensible defaults. Safe to call more
/// than once; later calls are no-ops.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("outlay_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
    });
}
