//! # Signature Registration
//!
//! The statically declared classification table for one target operation:
//! an ordered list of parameters, each registered as model-typed or plain.
//! Registration replaces runtime reflection — the caller states the
//! signature once, at setup, and the resulting [`Signature`] is immutable.
//!
//! Misconfiguration is caught here, at build time: duplicate parameter
//! names and defaults that do not coerce to their declared type are
//! [`ConfigError`]s. A signature that builds successfully can no longer
//! fail for configuration reasons during a call.
//!
//! A method receiver is not a parameter. When validating a method-like
//! operation, let the target closure capture its receiver; the signature
//! describes only the named arguments.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use vargs_core::{ArgMap, ArgValue, ValidationError, ValidationModel};

use crate::field::{coerce, FieldRule, FieldType};

/// Error detected while building a signature, independent of any call.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The same parameter name was registered twice.
    #[error("duplicate parameter '{name}' in signature '{signature}'")]
    DuplicateParameter {
        /// Name of the signature being built.
        signature: String,
        /// The repeated parameter name.
        name: String,
    },

    /// A declared default does not fit the parameter's declared type.
    #[error("default for parameter '{name}' in signature '{signature}' is not a valid {expected}: {reason}")]
    InvalidDefault {
        /// Name of the signature being built.
        signature: String,
        /// The parameter whose default is bad.
        name: String,
        /// The declared field type.
        expected: FieldType,
        /// Why the default does not fit.
        reason: String,
    },
}

/// Type-erased constructor for one model type.
type ModelConstructor =
    Arc<dyn Fn(&ArgMap) -> Result<Box<dyn Any + Send + Sync>, ValidationError> + Send + Sync>;

/// Binding of a model-typed parameter to its model's constructor.
///
/// Captures the model type at registration so that per-call construction
/// needs no type information beyond the signature itself.
#[derive(Clone)]
pub struct ModelBinding {
    model_name: &'static str,
    construct: ModelConstructor,
}

impl ModelBinding {
    /// Creates a binding for model type `M`.
    pub fn of<M: ValidationModel + Send + Sync>() -> Self {
        Self {
            model_name: M::NAME,
            construct: Arc::new(|args| {
                M::from_args(args).map(|m| Box::new(m) as Box<dyn Any + Send + Sync>)
            }),
        }
    }

    /// Declared name of the bound model.
    pub fn model_name(&self) -> &'static str {
        self.model_name
    }

    /// Constructs a model instance from the full incoming argument map.
    ///
    /// The model reads only its own declared fields; errors come from the
    /// model's constructor and propagate unmodified.
    pub fn construct(&self, args: &ArgMap) -> Result<ArgValue, ValidationError> {
        (self.construct)(args).map(ArgValue::Model)
    }
}

impl fmt::Debug for ModelBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModelBinding({})", self.model_name)
    }
}

/// Classification of one parameter.
#[derive(Debug, Clone)]
pub enum ParamKind {
    /// Parameter constructed by a validation model.
    Model(ModelBinding),
    /// Parameter validated by the synthesized plain schema.
    Plain(FieldRule),
}

/// One entry in a signature's classification table.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    name: String,
    kind: ParamKind,
}

impl ParamSpec {
    /// Builds a spec directly, without builder checks. Test-only
    /// counterpart of [`Signature::from_parts`].
    #[cfg(test)]
    pub(crate) fn from_parts(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter classification.
    pub fn kind(&self) -> &ParamKind {
        &self.kind
    }

    /// True if the parameter is model-typed.
    pub fn is_model(&self) -> bool {
        matches!(self.kind, ParamKind::Model(_))
    }
}

/// Named, ordered, immutable parameter classification for one operation.
#[derive(Debug, Clone)]
pub struct Signature {
    name: String,
    params: Vec<ParamSpec>,
}

impl Signature {
    /// Starts building a signature with the given name.
    pub fn builder(name: impl Into<String>) -> SignatureBuilder {
        SignatureBuilder {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Builds a signature directly from parts, without builder checks.
    /// Used by in-crate tests to pin merge behavior the builder's
    /// uniqueness check makes unreachable.
    #[cfg(test)]
    pub(crate) fn from_parts(name: impl Into<String>, params: Vec<ParamSpec>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Signature name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All parameters in declaration order.
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(ParamSpec::name)
    }

    /// The model-typed side of the partition, in declaration order.
    pub fn model_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(|p| p.is_model())
    }

    /// The plain side of the partition, in declaration order.
    pub fn plain_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(|p| !p.is_model())
    }

    /// True if any parameter is model-typed.
    pub fn has_model_params(&self) -> bool {
        self.params.iter().any(ParamSpec::is_model)
    }

    /// Clones the plain parameters' rules, in declaration order.
    pub(crate) fn plain_rules(&self) -> Vec<FieldRule> {
        self.params
            .iter()
            .filter_map(|p| match &p.kind {
                ParamKind::Plain(rule) => Some(rule.clone()),
                ParamKind::Model(_) => None,
            })
            .collect()
    }
}

/// Builder for a [`Signature`]; the registration API.
#[derive(Debug)]
pub struct SignatureBuilder {
    name: String,
    params: Vec<ParamSpec>,
}

impl SignatureBuilder {
    /// Registers a model-typed parameter constructed by model `M`.
    pub fn model<M: ValidationModel + Send + Sync>(mut self, name: impl Into<String>) -> Self {
        self.params.push(ParamSpec {
            name: name.into(),
            kind: ParamKind::Model(ModelBinding::of::<M>()),
        });
        self
    }

    /// Registers a required plain parameter of the given type.
    pub fn plain(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        let name = name.into();
        self.params.push(ParamSpec {
            kind: ParamKind::Plain(FieldRule::required(name.clone(), ty)),
            name,
        });
        self
    }

    /// Registers a plain parameter substituted with `default` when absent.
    pub fn plain_with_default(
        mut self,
        name: impl Into<String>,
        ty: FieldType,
        default: Value,
    ) -> Self {
        let name = name.into();
        self.params.push(ParamSpec {
            kind: ParamKind::Plain(FieldRule::with_default(name.clone(), ty, default)),
            name,
        });
        self
    }

    /// Finalizes the signature.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DuplicateParameter`] if two parameters share a name.
    /// - [`ConfigError::InvalidDefault`] if a default does not coerce to
    ///   its declared type. Defaults are stored coerced, so call-time
    ///   substitution never re-validates them.
    pub fn build(self) -> Result<Signature, ConfigError> {
        let Self { name, mut params } = self;

        for i in 1..params.len() {
            if params[..i].iter().any(|p| p.name == params[i].name) {
                return Err(ConfigError::DuplicateParameter {
                    signature: name,
                    name: params[i].name.clone(),
                });
            }
        }

        for param in &mut params {
            if let ParamKind::Plain(rule) = &mut param.kind {
                if let Some(default) = &rule.default {
                    let coerced = coerce(default, rule.ty).map_err(|reason| {
                        ConfigError::InvalidDefault {
                            signature: name.clone(),
                            name: param.name.clone(),
                            expected: rule.ty,
                            reason,
                        }
                    })?;
                    rule.default = Some(coerced);
                }
            }
        }

        Ok(Signature { name, params })
    }
}
