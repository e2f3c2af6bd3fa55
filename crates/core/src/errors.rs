use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type AgendaResult<T> = Result<T, AgendaError>;
