use thiserror::Error;

use crate::domain::ownership::OwnershipError;

/// Error for TodoState parsing failures.
///
/// Carries the rejected value for logging; the display string is the fixed
/// `detail` message surfaced by the HTTP layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoStateError {
    #[error("invalid value for todo")]
    InvalidValue(String),
}

/// Top-level error for all todo-related operations
#[derive(Debug, Clone, Error)]
pub enum TodoError {
    #[error(transparent)]
    InvalidState(#[from] TodoStateError),

    #[error("todo not found")]
    NotFound,

    #[error("not enough permission")]
    Forbidden(#[from] OwnershipError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
