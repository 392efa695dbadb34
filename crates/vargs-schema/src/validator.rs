//! # Validating Dispatcher
//!
//! A [`Validator`] binds a [`Signature`] to a target operation and makes
//! the two call paths explicit: `call` validates and then invokes, while
//! `call_unvalidated` invokes with the raw arguments untouched. Code that
//! only wants the validation half uses `validate` directly.
//!
//! ## Strategy Selection
//!
//! The strategy is chosen once, when the validator is built, and never
//! re-evaluated:
//!
//! - at least one model-typed parameter → **model dispatch**: each model
//!   parameter constructs its model from the full argument map, then the
//!   plain schema (synthesized over the plain parameters) contributes the
//!   rest;
//! - no model-typed parameters → **whole signature**: a single plain
//!   schema over every parameter.
//!
//! ## Merge Precedence
//!
//! Model instances are inserted first, plain-schema values second, and
//! insertion overwrites. On a name collision the plain value wins. A
//! collision cannot be registered through [`SignatureBuilder`]
//! (duplicate names are a [`crate::ConfigError`]), but the precedence is
//! part of the validated-output contract and is pinned by tests against
//! a hand-assembled signature.
//!
//! [`SignatureBuilder`]: crate::SignatureBuilder

use vargs_core::{ArgMap, ArgValue, ValidatedArgs, ValidationError};

use crate::plain::PlainSchema;
use crate::signature::{ParamKind, Signature};

/// Which validation strategy a validator selected at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Per-model construction plus a plain schema over the rest.
    ModelDispatch,
    /// One plain schema over the whole signature.
    WholeSignature,
}

/// Build-time artifacts for one strategy.
#[derive(Debug, Clone)]
enum Dispatch {
    Models {
        /// Schema over the plain side of the partition.
        plain: PlainSchema,
    },
    Whole {
        /// Schema over every parameter.
        schema: PlainSchema,
    },
}

/// A target operation paired with the validation artifacts for its
/// signature.
///
/// All artifacts are built once here and never mutated; per-call
/// validation only reads them and allocates its own output. A `Validator`
/// is therefore `Send + Sync` whenever its target is, and one instance
/// can serve concurrent callers.
#[derive(Debug)]
pub struct Validator<F> {
    signature: Signature,
    dispatch: Dispatch,
    target: F,
}

impl<F, R> Validator<F>
where
    F: Fn(ValidatedArgs) -> R,
{
    /// Binds a signature to a target operation, synthesizing the plain
    /// schema and selecting the strategy.
    ///
    /// The plain schema is named after the signature, so validation
    /// errors point back to the operation they belong to.
    pub fn new(signature: Signature, target: F) -> Self {
        let rules = signature.plain_rules();
        let dispatch = if signature.has_model_params() {
            Dispatch::Models {
                plain: PlainSchema::new(signature.name(), rules),
            }
        } else {
            Dispatch::Whole {
                schema: PlainSchema::new(signature.name(), rules),
            }
        };
        Self {
            signature,
            dispatch,
            target,
        }
    }

    /// The bound signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The strategy selected at build time.
    pub fn strategy(&self) -> Strategy {
        match self.dispatch {
            Dispatch::Models { .. } => Strategy::ModelDispatch,
            Dispatch::Whole { .. } => Strategy::WholeSignature,
        }
    }

    /// The unwrapped target operation, for callers bypassing validation
    /// entirely.
    pub fn target(&self) -> &F {
        &self.target
    }

    /// Validates one invocation's arguments without invoking the target.
    ///
    /// The result's keys are exactly the signature's parameter names;
    /// incoming keys that match no parameter and no model field are
    /// dropped. Errors from model constructors and the plain schema
    /// propagate unmodified.
    pub fn validate(&self, args: &ArgMap) -> Result<ValidatedArgs, ValidationError> {
        let mut out = ValidatedArgs::new();
        match &self.dispatch {
            Dispatch::Models { plain } => {
                for spec in self.signature.model_params() {
                    if let ParamKind::Model(binding) = spec.kind() {
                        out.insert(spec.name(), binding.construct(args)?);
                    }
                }
                for (name, value) in plain.validate(args)? {
                    out.insert(name, ArgValue::Plain(value));
                }
            }
            Dispatch::Whole { schema } => {
                for (name, value) in schema.validate(args)? {
                    out.insert(name, ArgValue::Plain(value));
                }
            }
        }
        Ok(out)
    }

    /// Validates, then invokes the target with the validated arguments.
    pub fn call(&self, args: &ArgMap) -> Result<R, ValidationError> {
        Ok((self.target)(self.validate(args)?))
    }

    /// Invokes the target with the raw arguments wrapped as plain values.
    /// No validation happens on this path.
    pub fn call_unvalidated(&self, args: ArgMap) -> R {
        (self.target)(ValidatedArgs::from_plain(args))
    }
}
