use thiserror::Error;

/// Errors raised by the persistence service layer.
///
/// The resource layer passes these through unmodified; it performs no
/// retries.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("concurrent modification of {resource}/{id}")]
    ConcurrentModification { resource: String, id: String },

    #[error("backend failure: {0}")]
    Backend(String),
}

impl ServiceError {
    /// Create a new ConstraintViolation error
    pub fn constraint_violation(message: impl Into<String>) -> Self {
        Self::ConstraintViolation(message.into())
    }

    /// Create a new ConcurrentModification error
    pub fn concurrent_modification(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::ConcurrentModification {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create a new Backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// Convenience result type for service operations
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_violation_message() {
        let err = ServiceError::constraint_violation("identifier already in use");
        assert_eq!(
            err.to_string(),
            "constraint violation: identifier already in use"
        );
    }

    #[test]
    fn test_concurrent_modification_message() {
        let err = ServiceError::concurrent_modification("program", "p-1");
        assert_eq!(err.to_string(), "concurrent modification of program/p-1");
    }
}
