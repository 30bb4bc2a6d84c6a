//! Error types for Confstore
//!
//! One enum covers every failure a component can return. The HTTP layer
//! maps variants to status codes; nothing is swallowed along the way.

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum ConfstoreError {
    /// Input bytes do not parse as a configuration document
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Parsed document fails required-field checks; carries every violation
    #[error("validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    /// The (service, version) pair already exists; terminal for the request
    #[error("version {version} already exists for service '{service}'")]
    VersionConflict { service: String, version: i64 },

    /// Requested service or (service, version) has no matching row
    #[error("service not found")]
    NotFound,

    /// A `{{ name }}` placeholder has no entry in the render context
    #[error("undefined placeholder '{0}'")]
    UndefinedPlaceholder(String),

    /// A placeholder span is unterminated or its name is unusable
    #[error("malformed template: {0}")]
    MalformedTemplate(String),

    /// The backing store cannot be reached; safe to retry with backoff
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Invariant breach, e.g. a stored payload that no longer decodes
    #[error("internal error: {0}")]
    Internal(String),
}

impl ConfstoreError {
    /// Violation messages carried by a `ValidationFailed`, empty otherwise.
    pub fn violations(&self) -> &[String] {
        match self {
            ConfstoreError::ValidationFailed(errors) => errors,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfstoreError::MalformedInput("empty body".to_string());
        assert_eq!(format!("{}", err), "malformed input: empty body");

        let err = ConfstoreError::VersionConflict {
            service: "billing".to_string(),
            version: 5,
        };
        assert_eq!(
            format!("{}", err),
            "version 5 already exists for service 'billing'"
        );

        let err = ConfstoreError::UndefinedPlaceholder("user".to_string());
        assert_eq!(format!("{}", err), "undefined placeholder 'user'");
    }

    #[test]
    fn test_validation_failed_joins_messages() {
        let err = ConfstoreError::ValidationFailed(vec![
            "Missing required field: database.host".to_string(),
            "Invalid database.port: must be 1..65535".to_string(),
        ]);
        assert_eq!(
            format!("{}", err),
            "validation failed: Missing required field: database.host; \
             Invalid database.port: must be 1..65535"
        );
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_violations_empty_for_other_variants() {
        assert!(ConfstoreError::NotFound.violations().is_empty());
    }
}
