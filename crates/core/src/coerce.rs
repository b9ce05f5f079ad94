//! Coercion from stored values to requested primitive types
//!
//! [`FromValue`] is the single rule set behind every typed accessor:
//!
//! 1. If the stored tag is exactly the requested type, the value is returned
//!    unchanged.
//! 2. If the requested type is numeric (any integer width or `f32`) and the
//!    stored value is the generic decoded numeric form ([`Value::F64`]), it
//!    is converted with a native `as` cast.
//! 3. Anything else yields no value, and the caller substitutes the type's
//!    zero value via [`FromValue::coerce_or_zero`].
//!
//! # Narrowing hazard
//!
//! The float-to-integer step is not range checked. Rust's `as` cast
//! truncates toward zero, clamps out-of-range values to the target's
//! `MIN`/`MAX`, and maps NaN to `0`. `f64 -> f32` rounds to nearest and
//! overflows to infinity. No error is ever reported.

use crate::value::Value;

/// A type that can be read out of a [`Value`] under the store's coercion rules
pub trait FromValue: Sized + Default {
    /// Convert `value` if its tag matches or a numeric widening applies
    fn coerce(value: &Value) -> Option<Self>;

    /// Convert `value`, falling back to the zero value of `Self`
    ///
    /// `None` stands for an absent key and also yields the zero value.
    fn coerce_or_zero(value: Option<&Value>) -> Self {
        value.and_then(Self::coerce).unwrap_or_default()
    }
}

macro_rules! impl_exact {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromValue for $ty {
                fn coerce(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v.clone()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

macro_rules! impl_numeric {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromValue for $ty {
                fn coerce(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(*v),
                        Value::F64(v) => Some(*v as $ty),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_exact! {
    bool => Bool,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    Vec<String> => Strings,
}

impl_numeric! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Int,
    f32 => F32,
}
