//! # Call-Time Validation Errors
//!
//! Errors raised while validating one set of incoming arguments. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Schema failures carry the schema name and a structured list of
//!   per-field violations, not a flattened string.
//! - Model failures name the rejecting model and keep the underlying
//!   deserialization message intact.
//! - Nothing here wraps or translates: whoever detects the failure
//!   constructs the error, and it propagates unmodified to the caller.
//!
//! Configuration errors — problems with a signature itself, detected at
//! build time — are a separate family and live with the signature builder
//! in `vargs-schema`.

use std::fmt;

use thiserror::Error;

/// Error validating one invocation's arguments.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// One or more fields failed against a plain schema.
    #[error("validation failed against schema '{schema}':\n{violations}")]
    SchemaViolations {
        /// Name of the schema that was validated against.
        schema: String,
        /// Structured list of individual violations.
        violations: Violations,
    },

    /// A validation model refused to construct itself from the arguments.
    #[error("model '{model}' rejected input: {reason}")]
    ModelRejected {
        /// Declared name of the model.
        model: String,
        /// Underlying deserialization message.
        reason: String,
    },

    /// A model instance could not export its fields as a mapping.
    #[error("model '{model}' could not export fields: {reason}")]
    ModelExport {
        /// Declared name of the model.
        model: String,
        /// Why the export failed.
        reason: String,
    },
}

/// A single field-level violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the violating field.
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {}", self.field, self.message)
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display_format() {
        let v = Violation {
            field: "count".to_string(),
            message: "expected integer, got string".to_string(),
        };
        let display = v.to_string();
        assert!(display.contains("count"));
        assert!(display.contains("expected integer"));
    }

    #[test]
    fn test_violations_display_multiline() {
        let vs: Violations = vec![
            Violation {
                field: "a".to_string(),
                message: "missing required field".to_string(),
            },
            Violation {
                field: "b".to_string(),
                message: "expected bool, got array".to_string(),
            },
        ]
        .into();
        let display = vs.to_string();
        let lines: Vec<&str> = display.lines().collect();
        assert_eq!(lines.len(), 2, "one line per violation, got: {display:?}");
        assert!(lines[0].contains("a"));
        assert!(lines[1].contains("b"));
    }

    #[test]
    fn test_schema_violations_error_names_schema() {
        let err = ValidationError::SchemaViolations {
            schema: "transfer".to_string(),
            violations: vec![Violation {
                field: "amount".to_string(),
                message: "missing required field".to_string(),
            }]
            .into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("transfer"));
        assert!(msg.contains("amount"));
    }
}
