//! Error types for registry operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// Missing or malformed input field
    #[error("{0}")]
    Validation(String),

    /// Duplicate roll number or email
    #[error("{0}")]
    Conflict(String),

    /// Referenced mentor/mentee/issue absent (or not owned by the caller)
    #[error("{0}")]
    NotFound(String),

    /// Storage failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Map a unique-index violation to Conflict, leaving other storage errors
/// untouched. The unique index is the authoritative duplicate guard; the
/// in-transaction pre-checks only produce friendlier messages.
pub(crate) fn conflict_on_unique(err: sea_orm::DbErr, message: &str) -> RegistryError {
    match err.sql_err() {
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
            RegistryError::Conflict(message.to_string())
        }
        _ => RegistryError::Database(err),
    }
}
