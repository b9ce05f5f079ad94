//! Public types for the typedstore API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// The store and its access interface
pub use typedstore_storage::{KeyValueAccess, TypedStore};

// Configuration
pub use typedstore_storage::StoreOptions;

// Value model and coercion
pub use typedstore_core::{FromValue, Value};

// Decoding
pub use typedstore_core::{Decoder, JsonDecoder};

// Errors
pub use typedstore_core::{StoreError, StoreResult};
