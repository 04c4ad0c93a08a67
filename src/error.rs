//! Error types for the person validation service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the service can report.

use thiserror::Error;

use crate::models::RecordKind;
use crate::validation::Violation;

/// The main error type for the person validation service.
///
/// # Example
///
/// ```
/// use person_validation::error::ServiceError;
///
/// let error = ServiceError::ConfigNotFound {
///     path: "/missing/service.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/service.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds inconsistent values.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },

    /// A record failed one or more validation rules.
    #[error("Invalid {record} record: {} violation(s)", .violations.len())]
    ValidationFailed {
        /// The kind of record that was rejected.
        record: RecordKind,
        /// The failed rules, in evaluation order.
        violations: Vec<Violation>,
    },

    /// The HTTP server could not be started or stopped unexpectedly.
    #[error("Server error: {message}")]
    Server {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ServiceError::ConfigNotFound {
            path: "/missing/service.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/service.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = ServiceError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_message() {
        let error = ServiceError::InvalidConfig {
            message: "staff: salary minimum 500 exceeds maximum 400".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: staff: salary minimum 500 exceeds maximum 400"
        );
    }

    #[test]
    fn test_validation_failed_displays_kind_and_count() {
        let error = ServiceError::ValidationFailed {
            record: RecordKind::Employee,
            violations: vec![
                Violation::new("name", "Invalid Name"),
                Violation::new("email", "Email address is not valid."),
            ],
        };
        assert_eq!(error.to_string(), "Invalid employee record: 2 violation(s)");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ServiceError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_server_error() -> ServiceResult<()> {
            Err(ServiceError::Server {
                message: "address in use".to_string(),
            })
        }

        fn propagates_error() -> ServiceResult<()> {
            returns_server_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
