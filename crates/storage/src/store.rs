//! Lock-guarded typed key-value store
//!
//! # Design
//!
//! - One `parking_lot::RwLock` over one `FxHashMap<String, Value>`
//! - Reads (`get`, `exists`, typed accessors) take the lock shared
//! - Writes (`set`, `delete`, `flush`) take the lock exclusive
//! - The map never leaves the lock: reads hand back owned copies
//!
//! Every operation is a single acquire, map operation, release. Nothing
//! outside this module runs while the lock is held; decoding finishes before
//! the store is built, and the map discarded by `flush` is dropped after the
//! write guard is released.
//!
//! # Example
//!
//! ```
//! use typedstore_storage::TypedStore;
//!
//! let store = TypedStore::from_json(r#"{"name": "ron", "age": 47}"#)?;
//! assert_eq!(store.get_string("name"), "ron");
//! assert_eq!(store.get_int("age"), 47);
//!
//! store.set("enabled", true);
//! assert!(store.get_bool("enabled"));
//! # Ok::<(), typedstore_core::StoreError>(())
//! ```

use crate::access::KeyValueAccess;
use crate::options::StoreOptions;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::str::FromStr;
use tracing::{debug, warn};
use typedstore_core::{Decoder, FromValue, JsonDecoder, StoreError, StoreResult, Value};

/// Thread-safe, dynamically-typed key-value store
///
/// Share between threads with `Arc<TypedStore>`.
pub struct TypedStore {
    entries: RwLock<FxHashMap<String, Value>>,
    options: StoreOptions,
}

fn empty_map(capacity: usize) -> FxHashMap<String, Value> {
    FxHashMap::with_capacity_and_hasher(capacity, Default::default())
}

impl TypedStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Create an empty store configured by `options`
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            entries: RwLock::new(empty_map(options.initial_capacity)),
            options,
        }
    }

    /// Build a store from `blob` using `decoder`
    ///
    /// Each decoded pair is inserted with its own `set`. On failure no store
    /// is produced and the decoder's error is returned.
    pub fn from_encoded<D: Decoder>(blob: &str, decoder: D) -> StoreResult<Self> {
        Self::from_encoded_with_options(blob, decoder, StoreOptions::default())
    }

    /// Build a store from `blob` using `decoder`, configured by `options`
    pub fn from_encoded_with_options<D: Decoder>(
        blob: &str,
        decoder: D,
        options: StoreOptions,
    ) -> StoreResult<Self> {
        let pairs = decoder.decode(blob).map_err(|e| {
            warn!(target: "typedstore::store", error = %e, "failed to decode store contents");
            e
        })?;

        let store = Self::with_options(options);
        let count = pairs.len();
        for (key, value) in pairs {
            store.set(key, value);
        }
        debug!(target: "typedstore::store", entries = count, "seeded store from encoded input");
        Ok(store)
    }

    /// Build a store from a JSON object
    ///
    /// Numbers are stored in the generic `F64` form and can be read through
    /// any integer or float accessor.
    pub fn from_json(blob: &str) -> StoreResult<Self> {
        Self::from_encoded(blob, JsonDecoder)
    }

    /// Options this store was built with
    pub fn options(&self) -> StoreOptions {
        self.options
    }

    // ========================================================================
    // Primitives
    // ========================================================================

    /// Copy of the value stored under `key`, or `None` if absent
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    /// Value stored under `key`, or `fallback` if absent
    ///
    /// Presence check and read happen under one read guard.
    pub fn get_or_default(&self, key: &str, fallback: impl Into<Value>) -> Value {
        match self.entries.read().get(key) {
            Some(value) => value.clone(),
            None => fallback.into(),
        }
    }

    /// Whether `key` is present; a stored zero, `false` or null counts
    pub fn exists(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Insert or overwrite `key`
    ///
    /// The previous value and its type are discarded. The value keeps the
    /// exact tag of the Rust type passed in: an unsuffixed integer literal
    /// is an `i32` and stores `Value::I32`, readable through
    /// [`get_i32`](Self::get_i32) but not [`get_int`](Self::get_int). Use
    /// `47isize` for `get_int`.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        self.entries.write().insert(key, value);
    }

    /// Remove `key`; absent keys are ignored
    pub fn delete(&self, key: &str) {
        self.entries.write().remove(key);
    }

    /// Replace the whole map with an empty one
    pub fn flush(&self) {
        let discarded = {
            let mut entries = self.entries.write();
            std::mem::replace(&mut *entries, empty_map(self.options.initial_capacity))
        };
        debug!(target: "typedstore::store", entries = discarded.len(), "flushed store");
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    // ========================================================================
    // Typed accessors
    // ========================================================================

    /// Value under `key` coerced to `T`, or `T`'s zero value
    ///
    /// Only the coerced result is copied out of the map.
    pub fn get_as<T: FromValue>(&self, key: &str) -> T {
        T::coerce_or_zero(self.entries.read().get(key))
    }

    /// Bytes under `key`, or empty
    pub fn get_bytes(&self, key: &str) -> Vec<u8> {
        self.get_as(key)
    }

    /// String under `key`, or empty
    pub fn get_string(&self, key: &str) -> String {
        self.get_as(key)
    }

    /// String sequence under `key`, or empty
    pub fn get_strings(&self, key: &str) -> Vec<String> {
        self.get_as(key)
    }

    /// Boolean under `key`, or `false`
    pub fn get_bool(&self, key: &str) -> bool {
        self.get_as(key)
    }

    /// `isize` under `key` (narrowed from `F64`), or `0`
    ///
    /// Only `Value::Int` and `Value::F64` match. `set(key, 47)` stores an
    /// `i32` and reads back `0` here; store `47isize` instead.
    pub fn get_int(&self, key: &str) -> isize {
        self.get_as(key)
    }

    /// `i8` under `key` (narrowed from `F64`), or `0`
    pub fn get_i8(&self, key: &str) -> i8 {
        self.get_as(key)
    }

    /// `i16` under `key` (narrowed from `F64`), or `0`
    pub fn get_i16(&self, key: &str) -> i16 {
        self.get_as(key)
    }

    /// `i32` under `key` (narrowed from `F64`), or `0`
    pub fn get_i32(&self, key: &str) -> i32 {
        self.get_as(key)
    }

    /// `i64` under `key` (narrowed from `F64`), or `0`
    pub fn get_i64(&self, key: &str) -> i64 {
        self.get_as(key)
    }

    /// `f32` under `key` (narrowed from `F64`), or `0.0`
    pub fn get_f32(&self, key: &str) -> f32 {
        self.get_as(key)
    }

    /// `f64` under `key`, or `0.0`
    pub fn get_f64(&self, key: &str) -> f64 {
        self.get_as(key)
    }
}

impl Default for TypedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for TypedStore {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl std::fmt::Debug for TypedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedStore")
            .field("entries", &self.len())
            .field("options", &self.options)
            .finish()
    }
}

impl KeyValueAccess for TypedStore {
    fn get(&self, key: &str) -> Option<Value> {
        TypedStore::get(self, key)
    }

    fn get_or_default(&self, key: &str, fallback: Value) -> Value {
        TypedStore::get_or_default(self, key, fallback)
    }

    fn exists(&self, key: &str) -> bool {
        TypedStore::exists(self, key)
    }

    fn set(&self, key: String, value: Value) {
        TypedStore::set(self, key, value)
    }

    fn delete(&self, key: &str) {
        TypedStore::delete(self, key)
    }

    fn flush(&self) {
        TypedStore::flush(self)
    }

    fn get_bytes(&self, key: &str) -> Vec<u8> {
        self.get_as(key)
    }

    fn get_string(&self, key: &str) -> String {
        self.get_as(key)
    }

    fn get_strings(&self, key: &str) -> Vec<String> {
        self.get_as(key)
    }

    fn get_bool(&self, key: &str) -> bool {
        self.get_as(key)
    }

    fn get_int(&self, key: &str) -> isize {
        self.get_as(key)
    }

    fn get_i8(&self, key: &str) -> i8 {
        self.get_as(key)
    }

    fn get_i16(&self, key: &str) -> i16 {
        self.get_as(key)
    }

    fn get_i32(&self, key: &str) -> i32 {
        self.get_as(key)
    }

    fn get_i64(&self, key: &str) -> i64 {
        self.get_as(key)
    }

    fn get_f32(&self, key: &str) -> f32 {
        self.get_as(key)
    }

    fn get_f64(&self, key: &str) -> f64 {
        self.get_as(key)
    }
}
