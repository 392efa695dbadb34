//! # Argument Maps
//!
//! The two argument shapes the library deals in: the raw keyword-argument
//! map a caller supplies ([`ArgMap`]) and the validated map a target
//! operation receives ([`ValidatedArgs`]).
//!
//! ## Merge Semantics
//!
//! [`ValidatedArgs::insert`] replaces an existing entry with the same name
//! in place. The dispatcher inserts constructed model instances first and
//! plain-schema values second, so on a name collision the plain value wins.
//! That precedence is part of the documented merge contract and is pinned
//! by tests.

use std::any::Any;
use std::fmt;

use serde_json::{Map, Value};

/// Raw keyword arguments for one invocation: field name → JSON value.
pub type ArgMap = Map<String, Value>;

/// One validated argument: either a constructed model instance or a
/// coerced plain value.
pub enum ArgValue {
    /// A model instance, type-erased for storage. Recover the concrete
    /// type with [`ValidatedArgs::model`] or [`ValidatedArgs::take_model`].
    Model(Box<dyn Any + Send + Sync>),
    /// A plain value that passed field-rule coercion.
    Plain(Value),
}

impl ArgValue {
    /// Returns the plain value, if this argument is plain.
    pub fn as_plain(&self) -> Option<&Value> {
        match self {
            Self::Plain(v) => Some(v),
            Self::Model(_) => None,
        }
    }

    /// Returns a reference to the model instance, if this argument holds
    /// a model of type `M`.
    pub fn downcast<M: Any>(&self) -> Option<&M> {
        match self {
            Self::Model(boxed) => boxed.downcast_ref::<M>(),
            Self::Plain(_) => None,
        }
    }

    /// True if this argument holds a model instance.
    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }
}

impl fmt::Debug for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model(_) => f.write_str("Model(..)"),
            Self::Plain(v) => write!(f, "Plain({v})"),
        }
    }
}

/// Validated arguments for one invocation, keyed by parameter name.
///
/// Created fresh per call by a validator and consumed by the target
/// operation. Entries keep insertion order, which follows the declaring
/// signature's parameter order.
#[derive(Debug, Default)]
pub struct ValidatedArgs {
    entries: Vec<(String, ArgValue)>,
}

impl ValidatedArgs {
    /// Creates an empty argument map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a raw argument map as plain values, with no validation.
    ///
    /// This is the passthrough path: every value is taken as-is.
    pub fn from_plain(args: ArgMap) -> Self {
        Self {
            entries: args
                .into_iter()
                .map(|(name, value)| (name, ArgValue::Plain(value)))
                .collect(),
        }
    }

    /// Inserts an argument, replacing any existing entry with the same
    /// name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: ArgValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Looks up an argument by name.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Borrows the model instance stored under `name`, if present and of
    /// type `M`.
    pub fn model<M: Any>(&self, name: &str) -> Option<&M> {
        self.get(name).and_then(ArgValue::downcast::<M>)
    }

    /// Removes and returns the model instance stored under `name`, if
    /// present and of type `M`. The entry is left untouched on a type
    /// mismatch.
    pub fn take_model<M: Any>(&mut self, name: &str) -> Option<M> {
        let idx = self.entries.iter().position(|(n, v)| {
            n == name && matches!(v, ArgValue::Model(b) if b.is::<M>())
        })?;
        let (_, value) = self.entries.remove(idx);
        match value {
            ArgValue::Model(boxed) => boxed.downcast::<M>().ok().map(|m| *m),
            ArgValue::Plain(_) => None,
        }
    }

    /// Borrows the plain value stored under `name`, if present and plain.
    pub fn plain(&self, name: &str) -> Option<&Value> {
        self.get(name).and_then(ArgValue::as_plain)
    }

    /// True if an argument with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Iterates argument names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
