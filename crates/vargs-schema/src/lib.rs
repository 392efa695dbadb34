//! # vargs-schema — Signatures, Field Rules, and the Validating Dispatcher
//!
//! This crate turns a statically registered signature into a validator for
//! incoming argument maps:
//!
//! 1. A [`Signature`] is built once through [`SignatureBuilder`], which
//!    classifies every parameter as model-typed or plain. Misconfigured
//!    signatures (duplicate names, defaults that do not match their
//!    declared type) fail at build time, never during a call.
//! 2. For plain parameters a [`PlainSchema`] is synthesized once — a fixed
//!    table of [`FieldRule`]s validated as a unit with lax coercion.
//! 3. A [`Validator`] wraps a target operation and exposes validation and
//!    invocation as separate, explicit entry points: `validate`, `call`,
//!    and `call_unvalidated`.
//!
//! Everything built at construction time is immutable; per-call validation
//! allocates only its own output, so a `Validator` can be shared freely
//! across threads.

pub mod field;
pub mod plain;
pub mod signature;
pub mod validator;

// Re-export primary types for ergonomic imports.
pub use field::{FieldRule, FieldType};
pub use plain::PlainSchema;
pub use signature::{ConfigError, ModelBinding, ParamKind, ParamSpec, Signature, SignatureBuilder};
pub use validator::{Strategy, Validator};
