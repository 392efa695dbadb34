//! # Field Rules & Lax Coercion
//!
//! A [`FieldRule`] describes one plain field: its name, declared type,
//! whether it is required, and an optional default. Rules are assembled
//! into a [`crate::plain::PlainSchema`] and never change after that.
//!
//! Coercion is lax in the usual dynamic-validation sense: a decimal
//! string passes for an integer, a whole float passes for an integer,
//! numbers and bools render to strings. Arrays and objects are matched
//! exactly. `null` never coerces to anything except [`FieldType::Any`].

use std::fmt;

use serde_json::{Number, Value};

/// Declared type of a plain field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Accepts any value unchanged. Used for parameters whose type the
    /// registering code cannot or does not want to express.
    Any,
    /// Boolean, with `"true"`/`"false"` and 0/1 accepted.
    Bool,
    /// 64-bit integer, with whole floats and decimal strings accepted.
    Integer,
    /// 64-bit float, with decimal strings accepted.
    Float,
    /// String, with numbers and bools rendered to their text form.
    String,
    /// JSON array, matched exactly.
    Array,
    /// JSON object, matched exactly.
    Object,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Any => "any",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

/// Validation rule for one plain field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Field name, unique within its schema.
    pub name: String,
    /// Declared type the incoming value must coerce to.
    pub ty: FieldType,
    /// Whether the field must be present when no default exists.
    pub required: bool,
    /// Value substituted when the field is absent.
    pub default: Option<Value>,
}

impl FieldRule {
    /// A required field with no default.
    pub fn required(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            required: true,
            default: None,
        }
    }

    /// An optional field substituted with `default` when absent.
    pub fn with_default(name: impl Into<String>, ty: FieldType, default: Value) -> Self {
        Self {
            name: name.into(),
            ty,
            required: false,
            default: Some(default),
        }
    }
}

/// Coerce a raw value to the declared type, returning the coerced value
/// or a human-readable reason it does not fit.
pub(crate) fn coerce(value: &Value, ty: FieldType) -> Result<Value, String> {
    match ty {
        FieldType::Any => Ok(value.clone()),

        FieldType::Bool => match value {
            Value::Bool(b) => Ok(Value::Bool(*b)),
            Value::String(s) if s == "true" => Ok(Value::Bool(true)),
            Value::String(s) if s == "false" => Ok(Value::Bool(false)),
            Value::Number(n) if n.as_i64() == Some(0) => Ok(Value::Bool(false)),
            Value::Number(n) if n.as_i64() == Some(1) => Ok(Value::Bool(true)),
            other => Err(mismatch("bool", other)),
        },

        FieldType::Integer => match value {
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    Ok(Value::Number(n.clone()))
                } else {
                    match n.as_f64() {
                        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
                            Ok(Value::Number(Number::from(f as i64)))
                        }
                        _ => Err(mismatch("integer", value)),
                    }
                }
            }
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(|i| Value::Number(Number::from(i)))
                .map_err(|_| mismatch("integer", value)),
            other => Err(mismatch("integer", other)),
        },

        FieldType::Float => match value {
            Value::Number(n) => n
                .as_f64()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| mismatch("float", value)),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| mismatch("float", value)),
            other => Err(mismatch("float", other)),
        },

        FieldType::String => match value {
            Value::String(s) => Ok(Value::String(s.clone())),
            Value::Number(n) => Ok(Value::String(n.to_string())),
            Value::Bool(b) => Ok(Value::String(b.to_string())),
            other => Err(mismatch("string", other)),
        },

        FieldType::Array => match value {
            Value::Array(_) => Ok(value.clone()),
            other => Err(mismatch("array", other)),
        },

        FieldType::Object => match value {
            Value::Object(_) => Ok(value.clone()),
            other => Err(mismatch("object", other)),
        },
    }
}

fn mismatch(expected: &str, got: &Value) -> String {
    format!("expected {expected}, got {}", json_type_name(got))
}

/// JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
