//! # Validation Model Capability
//!
//! A validation model is a named schema type with typed fields: it can
//! construct itself from a raw argument map, failing with a structured
//! error when required fields are missing or mistyped, and it can export
//! its fields back into a plain mapping.
//!
//! Any `Serialize + DeserializeOwned` struct qualifies; implementations
//! only declare a [`ValidationModel::NAME`] for error reporting. Do not
//! put `#[serde(deny_unknown_fields)]` on a model — construction receives
//! the *entire* incoming argument set and is expected to ignore keys it
//! does not declare.
//!
//! The `create`/`apply_to` helpers treat a `null` field as unset: such
//! fields are skipped when projecting a model onto another type, so an
//! `Option` field left at `None` never clobbers an existing value.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::args::ArgMap;
use crate::error::ValidationError;

/// A named, typed schema that validates and constructs itself from a raw
/// argument map.
pub trait ValidationModel: Serialize + DeserializeOwned + Sized + 'static {
    /// Declared model name, used in error messages.
    const NAME: &'static str;

    /// Validates the argument map against this model's declared fields
    /// and constructs an instance.
    ///
    /// Undeclared keys in `args` are ignored. Missing required fields and
    /// type mismatches fail with [`ValidationError::ModelRejected`] naming
    /// this model; the underlying message is kept intact.
    fn from_args(args: &ArgMap) -> Result<Self, ValidationError> {
        serde_json::from_value(Value::Object(args.clone())).map_err(|e| {
            ValidationError::ModelRejected {
                model: Self::NAME.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Exports all declared fields as a name → value mapping.
    ///
    /// # Errors
    ///
    /// Fails with [`ValidationError::ModelExport`] if the model does not
    /// serialize to an object (e.g. a newtype over a scalar).
    fn to_fields(&self) -> Result<ArgMap, ValidationError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(ValidationError::ModelExport {
                model: Self::NAME.to_string(),
                reason: format!("serialized to {other} instead of an object"),
            }),
            Err(e) => Err(ValidationError::ModelExport {
                model: Self::NAME.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Exports the set (non-null) fields as a name → value mapping.
    fn present_fields(&self) -> Result<ArgMap, ValidationError> {
        Ok(self
            .to_fields()?
            .into_iter()
            .filter(|(_, v)| !v.is_null())
            .collect())
    }

    /// Constructs a value of another type from this model's set fields.
    fn create<T: DeserializeOwned>(&self) -> Result<T, ValidationError> {
        serde_json::from_value(Value::Object(self.present_fields()?)).map_err(|e| {
            ValidationError::ModelRejected {
                model: Self::NAME.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Merges this model's set fields over an existing value's fields and
    /// returns the updated value.
    fn apply_to<T: Serialize + DeserializeOwned>(&self, target: T) -> Result<T, ValidationError> {
        let mut base = match serde_json::to_value(&target) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(ValidationError::ModelExport {
                    model: Self::NAME.to_string(),
                    reason: format!("apply_to target serialized to {other} instead of an object"),
                })
            }
            Err(e) => {
                return Err(ValidationError::ModelExport {
                    model: Self::NAME.to_string(),
                    reason: e.to_string(),
                })
            }
        };
        for (name, value) in self.present_fields()? {
            base.insert(name, value);
        }
        serde_json::from_value(Value::Object(base)).map_err(|e| {
            ValidationError::ModelRejected {
                model: Self::NAME.to_string(),
                reason: e.to_string(),
            }
        })
    }
}
