//! Access interface for typed key-value stores
//!
//! [`KeyValueAccess`] is the object-safe capability callers program
//! against. Implementors supply the six primitives; the typed accessors have
//! default implementations that apply [`FromValue`] to the result of
//! [`KeyValueAccess::get`].

use typedstore_core::{FromValue, Value};

/// Read and write access to a dynamically-typed key-value store
///
/// Typed accessors never fail: a missing key, a mismatched type and a
/// stored zero all read back as the target type's zero value. Use
/// [`exists`](KeyValueAccess::exists) or [`get`](KeyValueAccess::get) to
/// tell those cases apart.
pub trait KeyValueAccess: Send + Sync {
    /// Copy of the value stored under `key`, or `None` if absent
    fn get(&self, key: &str) -> Option<Value>;

    /// Value stored under `key`, or `fallback` if absent
    fn get_or_default(&self, key: &str, fallback: Value) -> Value;

    /// Whether `key` is present, regardless of its value
    fn exists(&self, key: &str) -> bool;

    /// Insert or overwrite `key`
    fn set(&self, key: String, value: Value);

    /// Remove `key`; absent keys are ignored
    fn delete(&self, key: &str);

    /// Remove every entry
    fn flush(&self);

    /// Bytes under `key`, or empty
    fn get_bytes(&self, key: &str) -> Vec<u8> {
        FromValue::coerce_or_zero(self.get(key).as_ref())
    }

    /// String under `key`, or empty
    fn get_string(&self, key: &str) -> String {
        FromValue::coerce_or_zero(self.get(key).as_ref())
    }

    /// String sequence under `key`, or empty
    fn get_strings(&self, key: &str) -> Vec<String> {
        FromValue::coerce_or_zero(self.get(key).as_ref())
    }

    /// Boolean under `key`, or `false`
    fn get_bool(&self, key: &str) -> bool {
        FromValue::coerce_or_zero(self.get(key).as_ref())
    }

    /// `isize` under `key` (narrowed from `F64`), or `0`
    fn get_int(&self, key: &str) -> isize {
        FromValue::coerce_or_zero(self.get(key).as_ref())
    }

    /// `i8` under `key` (narrowed from `F64`), or `0`
    fn get_i8(&self, key: &str) -> i8 {
        FromValue::coerce_or_zero(self.get(key).as_ref())
    }

    /// `i16` under `key` (narrowed from `F64`), or `0`
    fn get_i16(&self, key: &str) -> i16 {
        FromValue::coerce_or_zero(self.get(key).as_ref())
    }

    /// `i32` under `key` (narrowed from `F64`), or `0`
    fn get_i32(&self, key: &str) -> i32 {
        FromValue::coerce_or_zero(self.get(key).as_ref())
    }

    /// `i64` under `key` (narrowed from `F64`), or `0`
    fn get_i64(&self, key: &str) -> i64 {
        FromValue::coerce_or_zero(self.get(key).as_ref())
    }

    /// `f32` under `key` (narrowed from `F64`), or `0.0`
    fn get_f32(&self, key: &str) -> f32 {
        FromValue::coerce_or_zero(self.get(key).as_ref())
    }

    /// `f64` under `key`, or `0.0`
    fn get_f64(&self, key: &str) -> f64 {
        FromValue::coerce_or_zero(self.get(key).as_ref())
    }
}
