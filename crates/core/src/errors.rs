use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Schedule conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type TimetableResult<T> = Result<T, TimetableError>;
