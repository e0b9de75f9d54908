//! Ambient context carriers.
//!
//! Two shapes are supported:
//! - a generic, read-only context built by layering values over a parent
//!   ([`with_value`]); lookups search outward through the layers
//! - a typed store ([`ContextStore`]) with one flat table mutated in place
//!
//! Code that only has a [`ContextRef`] can probe for the store shape with
//! [`Context::as_store`].

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Opaque value carried by a context.
pub type ContextValue = Arc<dyn Any + Send + Sync>;

/// Shared handle to any context shape.
pub type ContextRef = Arc<dyn Context>;

/// Key identifying a value in a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextKey(&'static str);

impl ContextKey {
    /// Create a key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Borrow the key name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.0)
    }
}

/// Generic read-only context.
pub trait Context: Send + Sync {
    /// Look up a value, searching outward through parent layers.
    fn value(&self, key: ContextKey) -> Option<ContextValue>;

    /// Returns the mutable store view when this context supports it.
    fn as_store(&self) -> Option<&dyn ContextStore> {
        None
    }
}

/// Context with direct, in-place mutable key-value access.
pub trait ContextStore: Context {
    /// Insert or replace a value in the flat table.
    fn set(&self, key: &str, value: ContextValue);

    /// Read a value from the flat table.
    fn get(&self, key: &str) -> Option<ContextValue>;
}

/// Returns an empty root context.
#[must_use]
pub fn background() -> ContextRef {
    Arc::new(Background)
}

/// Layer a value over `parent`, returning a new context.
///
/// The parent is left untouched; the new layer shadows any outer value
/// stored under the same key.
#[must_use]
pub fn with_value(parent: &ContextRef, key: ContextKey, value: ContextValue) -> ContextRef {
    Arc::new(ValueLayer {
        parent: Arc::clone(parent),
        key,
        value,
    })
}

struct Background;

impl Context for Background {
    fn value(&self, _key: ContextKey) -> Option<ContextValue> {
        None
    }
}

struct ValueLayer {
    parent: ContextRef,
    key: ContextKey,
    value: ContextValue,
}

impl Context for ValueLayer {
    fn value(&self, key: ContextKey) -> Option<ContextValue> {
        if self.key == key {
            return Some(Arc::clone(&self.value));
        }
        self.parent.value(key)
    }
}

/// Request-scoped typed store.
///
/// Values set on the store are visible through both [`ContextStore::get`] and
/// [`Context::value`]; `value` falls through to the parent context on a miss.
#[derive(Default)]
pub struct RequestStore {
    parent: Option<ContextRef>,
    table: RwLock<HashMap<Box<str>, ContextValue>>,
}

impl RequestStore {
    /// Create an empty store with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store layered over `parent`.
    #[must_use]
    pub fn with_parent(parent: ContextRef) -> Self {
        Self {
            parent: Some(parent),
            table: RwLock::default(),
        }
    }

    /// Wrap the store into a shared context handle.
    #[must_use]
    pub fn into_context(self) -> ContextRef {
        Arc::new(self)
    }

    /// Number of entries in the flat table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true when the flat table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for RequestStore {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<&str> = table.keys().map(|key| &**key).collect();
        keys.sort_unstable();
        formatter
            .debug_struct("RequestStore")
            .field("keys", &keys)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

impl Context for RequestStore {
    fn value(&self, key: ContextKey) -> Option<ContextValue> {
        self.get(key.as_str())
            .or_else(|| self.parent.as_ref().and_then(|parent| parent.value(key)))
    }

    fn as_store(&self) -> Option<&dyn ContextStore> {
        Some(self)
    }
}

impl ContextStore for RequestStore {
    fn set(&self, key: &str, value: ContextValue) {
        self.table
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value);
    }

    fn get(&self, key: &str) -> Option<ContextValue> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}
