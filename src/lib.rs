//! typedstore: a thread-safe, dynamically-typed in-memory key-value store.
//!
//! Values of any supported kind live under string keys and are read back
//! through typed accessors that coerce instead of failing:
//!
//! ```
//! use typedstore::TypedStore;
//!
//! let store = TypedStore::new();
//! store.set("name", "ron");
//! store.set("height", 6.1f64);
//!
//! assert_eq!(store.get_string("name"), "ron");
//! assert!((store.get_f64("height") - 6.1).abs() < 0.001);
//!
//! // Wrong type or missing key: zero value, never an error
//! assert_eq!(store.get_i32("name"), 0);
//! assert_eq!(store.get_string("missing"), "");
//! ```
//!
//! Stores can be seeded from JSON. Numbers arrive in a generic `f64` form
//! and narrow to whatever width is requested:
//!
//! ```
//! use typedstore::TypedStore;
//!
//! let store = TypedStore::from_json(r#"{"age": 47}"#)?;
//! assert_eq!(store.get_i8("age"), 47);
//! assert_eq!(store.get_int("age"), 47);
//! # Ok::<(), typedstore::StoreError>(())
//! ```

#![warn(missing_docs)]

pub mod types;

pub use types::*;
