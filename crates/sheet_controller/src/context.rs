//! Explicit ambient-context propagation.
//!
//! A [`SheetContext`] is a small typed map handed down the view tree during
//! input dispatch. It replaces implicit environment lookup with an explicit
//! provider: whoever composes the tree decides what descendants can see.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Typed bag of shared values keyed by their type.
///
/// Values live behind `Arc`, so cloning a context is cheap and clones share
/// the stored values.
#[derive(Clone, Default)]
pub struct SheetContext {
    values: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl SheetContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value of the same type.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Arc::new(value));
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Look up a value by type.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.values
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|value| value.downcast::<T>().ok())
    }
}
