//! outlay-domain
//!
//! Pure domain models for expense tracking (Expense, Recurrence, Period,
//! query parameters, summary results). No I/O, no services, no storage.
//! Only data types and core enums.

pub mod common;
pub mod expense;
pub mod query;
pub mod summary;

pub use common::*;
pub use expense::*;
pub use query::*;
pub use summary::*;
