//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use tally_core::error::DomainError;
use tally_core::value_objects::{PostId, TransactionId};

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a foreign key violation to a domain error, anything else to a database error
pub fn map_foreign_key_violation<F>(e: SqlxError, on_violation: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_violation();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "post not found" error
pub fn post_not_found(id: PostId) -> DomainError {
    DomainError::PostNotFound(id)
}

/// Create a "transaction not found" error
pub fn transaction_not_found(id: TransactionId) -> DomainError {
    DomainError::TransactionNotFound(id)
}
