// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Store contention or timeout. Retryable by the caller; never swallowed.
    #[error("transient store error: {0}")]
    Transient(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
