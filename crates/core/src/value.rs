//! Dynamic value model
//!
//! Every entry in a store is a [`Value`]: a closed tagged union over the
//! primitive and aggregate kinds the store understands.
//!
//! # The generic numeric form
//!
//! Values arriving through a decoder carry no width information. Every
//! decoded number is stored as [`Value::F64`], and the typed accessors
//! narrow it on read (see [`crate::coerce`]). Values set directly by callers
//! keep the exact tag they were created with.
//!
//! # Absence
//!
//! A missing key is never a `Value`. Lookups return `Option<Value>`, so a
//! stored [`Value::Null`] and an absent key stay distinguishable.

use std::collections::BTreeMap;
use std::fmt;

/// A dynamically-typed value held by the store
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Explicit null (JSON `null`)
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// Platform-default width signed integer
    Int(isize),
    /// 32-bit float
    F32(f32),
    /// 64-bit float, also the generic decoded numeric form
    F64(f64),
    /// UTF-8 string
    String(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Sequence of strings
    Strings(Vec<String>),
    /// Sequence of values (decoder output)
    Array(Vec<Value>),
    /// String-keyed mapping of values (decoder output)
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Name of this value's variant, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::I8(_) => "I8",
            Value::I16(_) => "I16",
            Value::I32(_) => "I32",
            Value::I64(_) => "I64",
            Value::Int(_) => "Int",
            Value::F32(_) => "F32",
            Value::F64(_) => "F64",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Strings(_) => "Strings",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        }
    }

    /// Check whether this is an explicit null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::I8(n) => write!(f, "{}", n),
            Value::I16(n) => write!(f, "{}", n),
            Value::I32(n) => write!(f, "{}", n),
            Value::I64(n) => write!(f, "{}", n),
            Value::Int(n) => write!(f, "{}", n),
            Value::F32(n) => write!(f, "{}", n),
            Value::F64(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Value::Strings(items) => write!(f, "{:?}", items),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{:?}:{}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Int,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    Vec<String> => Strings,
    Vec<Value> => Array,
    BTreeMap<String, Value> => Object,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::Strings(v.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
