//! Seams between the store and its collaborators

use crate::error::StoreResult;
use crate::value::Value;

/// Turns an encoded blob into the key/value pairs a store is seeded with
///
/// Decoding runs before the store exists, so implementations never execute
/// while a store lock is held.
pub trait Decoder {
    /// Decode `blob` into top-level key/value pairs
    fn decode(&self, blob: &str) -> StoreResult<Vec<(String, Value)>>;
}

impl<D: Decoder + ?Sized> Decoder for &D {
    fn decode(&self, blob: &str) -> StoreResult<Vec<(String, Value)>> {
        (**self).decode(blob)
    }
}
