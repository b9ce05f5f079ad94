//! Black-box consumer of the typedstore facade.
//!
//! Only the public `typedstore` crate is reachable from here; the tests in
//! `tests/` use nothing else.

use typedstore::KeyValueAccess;

/// Copy `keys` from one store into another, skipping absent keys.
///
/// Written against the access trait, as an external caller would.
pub fn copy_keys(from: &dyn KeyValueAccess, to: &dyn KeyValueAccess, keys: &[&str]) -> usize {
    let mut copied = 0;
    for key in keys {
        if let Some(value) = from.get(key) {
            to.set(key.to_string(), value);
            copied += 1;
        }
    }
    copied
}
