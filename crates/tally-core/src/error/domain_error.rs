//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::TransactionKind;
use crate::value_objects::{CategoryId, PostId, TransactionId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Amount must be greater than 0 and at most 999999999999.99, with 2 decimal places")]
    InvalidAmount,

    #[error("Invalid category '{category}' for {kind}")]
    InvalidCategory {
        kind: TransactionKind,
        category: String,
    },

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("You are not the author of this post")]
    NotPostAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Post {0} was modified concurrently")]
    VersionConflict(PostId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::TransactionNotFound(_) => "UNKNOWN_TRANSACTION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::InvalidCategory { .. } => "INVALID_CATEGORY",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::NotPostAuthor => "NOT_POST_AUTHOR",

            // Conflict
            Self::VersionConflict(_) => "VERSION_CONFLICT",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::TransactionNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidAmount
                | Self::InvalidCategory { .. }
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotPostAuthor)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::VersionConflict(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::PostNotFound(PostId::generate());
        assert_eq!(err.code(), "UNKNOWN_POST");

        let err = DomainError::InvalidCategory {
            kind: TransactionKind::Income,
            category: "Food".to_string(),
        };
        assert_eq!(err.code(), "INVALID_CATEGORY");
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::TransactionNotFound(TransactionId::generate()).is_not_found());
        assert!(DomainError::InvalidAmount.is_validation());
        assert!(DomainError::NotPostAuthor.is_authorization());
        assert!(DomainError::VersionConflict(PostId::generate()).is_conflict());
        assert!(!DomainError::NotPostAuthor.is_not_found());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidCategory {
            kind: TransactionKind::Expense,
            category: "Salary".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid category 'Salary' for expense");
        assert_eq!(
            DomainError::InvalidAmount.to_string(),
            "Amount must be greater than 0 and at most 999999999999.99, with 2 decimal places"
        );
    }
}
