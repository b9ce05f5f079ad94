//! Storage layer for typedstore
//!
//! This crate provides the store itself:
//! - TypedStore: lock-guarded map from string keys to dynamic values
//! - KeyValueAccess: object-safe access interface implemented by the store
//! - StoreOptions: construction-time configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod access;
pub mod options;
pub mod store;

pub use access::KeyValueAccess;
pub use options::StoreOptions;
pub use store::TypedStore;
