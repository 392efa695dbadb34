//! # Synthesized Plain Schema
//!
//! The schema generated for a signature's plain parameters: a named,
//! immutable table of field rules validated as a unit. Synthesized once
//! when a validator is built, never per call.
//!
//! Validation receives the *entire* incoming argument map and reads only
//! its own declared fields — undeclared keys are ignored, and only
//! declared fields appear in the output. All violations are collected
//! before failing, so a caller sees every bad field at once rather than
//! the first one.

use serde_json::Value;

use vargs_core::{ArgMap, ValidationError, Violation};

use crate::field::{coerce, FieldRule};

/// A fixed-rule schema over a set of plain fields.
#[derive(Debug, Clone)]
pub struct PlainSchema {
    /// Schema name, used in error messages. Conventionally the name of
    /// the signature the schema was synthesized for.
    name: String,
    rules: Vec<FieldRule>,
}

impl PlainSchema {
    /// Creates a schema from a rule table.
    ///
    /// Rule names are assumed unique; the signature builder enforces this
    /// before synthesis.
    pub fn new(name: impl Into<String>, rules: Vec<FieldRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// Returns the schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rule table.
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Validates the argument map against every rule and returns the
    /// coerced `(name, value)` pairs in rule order.
    ///
    /// An absent field takes its default if one exists; an absent field
    /// with no default is a violation when required. Extra keys in `args`
    /// are ignored and never appear in the output.
    ///
    /// # Errors
    ///
    /// Fails with [`ValidationError::SchemaViolations`] carrying one
    /// [`Violation`] per bad field.
    pub fn validate(&self, args: &ArgMap) -> Result<Vec<(String, Value)>, ValidationError> {
        let mut out = Vec::with_capacity(self.rules.len());
        let mut violations = Vec::new();

        for rule in &self.rules {
            match args.get(&rule.name) {
                Some(raw) => match coerce(raw, rule.ty) {
                    Ok(value) => out.push((rule.name.clone(), value)),
                    Err(message) => violations.push(Violation {
                        field: rule.name.clone(),
                        message,
                    }),
                },
                None => match &rule.default {
                    Some(default) => out.push((rule.name.clone(), default.clone())),
                    None if rule.required => violations.push(Violation {
                        field: rule.name.clone(),
                        message: "missing required field".to_string(),
                    }),
                    None => {}
                },
            }
        }

        if violations.is_empty() {
            Ok(out)
        } else {
            Err(ValidationError::SchemaViolations {
                schema: self.name.clone(),
                violations: violations.into(),
            })
        }
    }
}
