//! JSON decoding
//!
//! Maps `serde_json` documents onto [`Value`]:
//!
//! | JSON    | Value            |
//! |---------|------------------|
//! | null    | `Value::Null`    |
//! | boolean | `Value::Bool`    |
//! | number  | `Value::F64`     |
//! | string  | `Value::String`  |
//! | array   | `Value::Array`   |
//! | object  | `Value::Object`  |
//!
//! Every number becomes the generic `F64` form, whatever its literal looks
//! like, so `47` and `47.0` decode identically.
//!
//! A top-level `null` decodes to no entries. Any other non-object top level
//! is rejected.

use crate::error::{StoreError, StoreResult};
use crate::traits::Decoder;
use crate::value::Value;

/// Decoder for JSON text whose top level is an object
///
/// # Examples
///
/// ```
/// use typedstore_core::{Decoder, JsonDecoder, Value};
///
/// let pairs = JsonDecoder.decode(r#"{"age": 47}"#).unwrap();
/// assert_eq!(pairs, vec![("age".to_string(), Value::F64(47.0))]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl Decoder for JsonDecoder {
    fn decode(&self, blob: &str) -> StoreResult<Vec<(String, Value)>> {
        let doc: serde_json::Value = serde_json::from_str(blob)?;
        match doc {
            serde_json::Value::Object(map) => {
                Ok(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
            serde_json::Value::Null => Ok(Vec::new()),
            other => Err(StoreError::not_an_object(json_kind(&other))),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "Null",
        serde_json::Value::Bool(_) => "Bool",
        serde_json::Value::Number(_) => "Number",
        serde_json::Value::String(_) => "String",
        serde_json::Value::Array(_) => "Array",
        serde_json::Value::Object(_) => "Object",
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::F64),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
