//! Core types for typedstore
//!
//! This crate defines the pieces every other layer builds on:
//! - Value: the dynamic tagged union stored per key
//! - FromValue: the coercion rules behind the typed accessors
//! - StoreError: construction-time error type
//! - Decoder: the seam for seeding a store from encoded input, with a JSON
//!   implementation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coerce;
pub mod error;
pub mod json;
pub mod traits;
pub mod value;

pub use coerce::FromValue;
pub use error::{StoreError, StoreResult};
pub use json::JsonDecoder;
pub use traits::Decoder;
pub use value::Value;
