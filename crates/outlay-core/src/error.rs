use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Expense not found: {0}")]
    NotFound(Uuid),
    #[error("Storage error: {0}")]
    Storage(String),
}
