//! Store configuration.
//!
//! [`StoreOptions`] controls how a [`TypedStore`](crate::TypedStore) sizes
//! its map. It derives serde traits so an application can embed it in its
//! own configuration file.

use serde::{Deserialize, Serialize};

/// Options for constructing a store.
///
/// Use the builder pattern to configure options:
///
/// ```
/// use typedstore_storage::{StoreOptions, TypedStore};
///
/// let opts = StoreOptions::new().initial_capacity(1024);
/// let store = TypedStore::with_options(opts);
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Number of entries the map is pre-sized for, on construction and
    /// after every flush.
    pub initial_capacity: usize,
}

impl StoreOptions {
    /// Create a new `StoreOptions` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of entries the map is pre-sized for.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
