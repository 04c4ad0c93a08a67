//! Validation outcome types.

use serde::{Deserialize, Serialize};

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The JSON name of the offending field.
    pub field: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The outcome of evaluating every rule against a record.
///
/// Violations are kept in rule evaluation order. The record is valid if
/// and only if there are none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    pub(crate) fn push(&mut self, field: &str, message: impl Into<String>) {
        self.violations.push(Violation::new(field, message));
    }

    /// Returns true if no rule failed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the violation messages in evaluation order.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.message.as_str())
    }

    /// Returns the violations in evaluation order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Consumes the result, returning the violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_valid() {
        let result = ValidationResult::default();
        assert!(result.is_valid());
        assert_eq!(result.errors().count(), 0);
    }

    #[test]
    fn test_errors_preserve_order() {
        let mut result = ValidationResult::default();
        result.push("name", "first");
        result.push("phone", "second");

        assert!(!result.is_valid());
        assert_eq!(result.errors().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(result.violations()[1], Violation::new("phone", "second"));
    }

    #[test]
    fn test_violation_serialization() {
        let json = serde_json::to_string(&Violation::new("email", "bad")).unwrap();
        assert_eq!(json, r#"{"field":"email","message":"bad"}"#);
    }
}
