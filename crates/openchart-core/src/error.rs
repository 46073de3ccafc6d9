use thiserror::Error;

/// Error type for the resource layer.
///
/// Validation and representation errors are raised here, before any service
/// delegate runs; persistence failures from the service layer pass through
/// the transparent `Service` variant unmodified.
#[derive(Debug, Error)]
pub enum RestError {
    #[error("missing required property: {0}")]
    MissingRequiredProperty(String),

    #[error("property not recognized: {0}")]
    UnknownProperty(String),

    #[error("invalid value for property {property}: expected {expected}")]
    InvalidPropertyValue { property: String, expected: String },

    #[error("payload must be a JSON object")]
    InvalidPayload,

    #[error("unknown representation: {0}")]
    UnknownRepresentation(String),

    #[error("representation {representation} is not supported by {resource}")]
    UnsupportedRepresentation {
        resource: String,
        representation: String,
    },

    #[error("resource not found: {resource}/{id}")]
    NotFound { resource: String, id: String },

    #[error("operation {operation} is not supported by {resource}")]
    OperationNotSupported { resource: String, operation: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Service(Box<dyn std::error::Error + Send + Sync>),
}

impl RestError {
    /// Create a new MissingRequiredProperty error
    pub fn missing_required(property: impl Into<String>) -> Self {
        Self::MissingRequiredProperty(property.into())
    }

    /// Create a new UnknownProperty error
    pub fn unknown_property(property: impl Into<String>) -> Self {
        Self::UnknownProperty(property.into())
    }

    /// Create a new InvalidPropertyValue error
    pub fn invalid_value(property: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidPropertyValue {
            property: property.into(),
            expected: expected.into(),
        }
    }

    /// Create a new UnknownRepresentation error
    pub fn unknown_representation(value: impl Into<String>) -> Self {
        Self::UnknownRepresentation(value.into())
    }

    /// Create a new UnsupportedRepresentation error
    pub fn unsupported_representation(
        resource: impl Into<String>,
        representation: impl Into<String>,
    ) -> Self {
        Self::UnsupportedRepresentation {
            resource: resource.into(),
            representation: representation.into(),
        }
    }

    /// Create a new NotFound error
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create a new OperationNotSupported error
    pub fn operation_not_supported(
        resource: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        Self::OperationNotSupported {
            resource: resource.into(),
            operation: operation.into(),
        }
    }

    /// Wrap a service-layer error without altering it.
    pub fn service(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Service(Box::new(err))
    }

    /// Check if this error is the caller's fault (4xx category)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredProperty(_)
                | Self::UnknownProperty(_)
                | Self::InvalidPropertyValue { .. }
                | Self::InvalidPayload
                | Self::UnknownRepresentation(_)
                | Self::UnsupportedRepresentation { .. }
                | Self::NotFound { .. }
                | Self::OperationNotSupported { .. }
                | Self::Json(_)
        )
    }
}

/// Convenience result type for resource operations
pub type Result<T> = std::result::Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_message() {
        let err = RestError::missing_required("identifier");
        assert_eq!(err.to_string(), "missing required property: identifier");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_not_found_message() {
        let err = RestError::not_found("program", "abc-123");
        assert_eq!(err.to_string(), "resource not found: program/abc-123");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_unsupported_representation_message() {
        let err = RestError::unsupported_representation("patientidentifier", "ref");
        assert_eq!(
            err.to_string(),
            "representation ref is not supported by patientidentifier"
        );
    }

    #[test]
    fn test_service_error_passes_through_unmodified() {
        #[derive(Debug, Error)]
        #[error("duplicate key violates unique constraint")]
        struct ConstraintViolation;

        let err = RestError::service(ConstraintViolation);
        assert_eq!(
            err.to_string(),
            "duplicate key violates unique constraint"
        );
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_operation_not_supported_message() {
        let err = RestError::operation_not_supported("patientidentifier", "search");
        assert_eq!(
            err.to_string(),
            "operation search is not supported by patientidentifier"
        );
    }
}
