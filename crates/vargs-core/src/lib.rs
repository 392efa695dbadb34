//! # vargs-core — Foundational Types for the vargs Validation Layer
//!
//! This crate defines the types shared by every part of the vargs workspace:
//! the raw argument map handed to a validator, the validated argument map
//! handed to a target operation, the `ValidationModel` capability trait, and
//! the structured error hierarchy for call-time validation failures.
//!
//! ## Key Design Principles
//!
//! 1. **One raw-value representation.** Incoming arguments are a
//!    [`serde_json::Map`] of name → JSON value ([`ArgMap`]). Every schema in
//!    the workspace validates this one shape; there is no second wire model.
//!
//! 2. **Models are ordinary serde types.** A [`ValidationModel`] is any
//!    `Serialize + DeserializeOwned` type with a declared name. Construction
//!    from an argument map ignores undeclared keys and rejects missing or
//!    mistyped fields, which is exactly serde's default struct behavior.
//!
//! 3. **Validated output is typed, not stringly.** [`ValidatedArgs`] holds
//!    either a constructed model instance or a coerced plain value per
//!    parameter, and insertion order follows the declaring signature.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vargs-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod args;
pub mod error;
pub mod model;

// Re-export primary types for ergonomic imports.
pub use args::{ArgMap, ArgValue, ValidatedArgs};
pub use error::{ValidationError, Violation, Violations};
pub use model::ValidationModel;
