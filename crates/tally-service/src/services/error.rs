//! Service layer error types

use tally_common::domain_status;
use tally_core::DomainError;
use thiserror::Error;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violation, missing record or repository failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request that is well-formed but refers to something unusable
    #[error("{0}")]
    Validation(String),
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status(e),
            Self::Validation(_) => 400,
        }
    }

    /// Machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::PostId;

    #[test]
    fn test_validation_error() {
        let err = ServiceError::validation("Category does not exist");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "Category does not exist");
    }

    #[test]
    fn test_domain_error_mapping() {
        let err: ServiceError = DomainError::NotPostAuthor.into();
        assert_eq!(err.status_code(), 403);

        let err: ServiceError = DomainError::VersionConflict(PostId::generate()).into();
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "VERSION_CONFLICT");

        let err: ServiceError = DomainError::InvalidAmount.into();
        assert_eq!(err.status_code(), 400);
    }
}
