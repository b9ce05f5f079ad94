//! Tier 3: existence, delete, flush and fallbacks

use crate::test_utils::{populated_store, POPULATED_KEYS};
use typedstore::{TypedStore, Value};

#[test]
fn exists_is_independent_of_value() {
    let store = TypedStore::new();
    store.set("flag", false);
    store.set("zero", 0i64);
    store.set("empty", "");
    store.set("nothing", Value::Null);

    for key in ["flag", "zero", "empty", "nothing"] {
        assert!(store.exists(key), "{} should exist", key);
    }
    assert!(!store.exists("other"));
}

#[test]
fn exists_and_delete() {
    let store = TypedStore::new();
    store.set("exists", "yes");
    assert!(store.exists("exists"));

    store.delete("exists");
    assert!(!store.exists("exists"));
    assert_eq!(store.get("exists"), None);
}

#[test]
fn delete_absent_key_leaves_store_unchanged() {
    let store = populated_store();
    let before = store.len();

    store.delete("never-set");
    store.delete("never-set");

    assert_eq!(store.len(), before);
    for key in POPULATED_KEYS {
        assert!(store.exists(key));
    }
}

#[test]
fn flush_clears_every_key() {
    let store = populated_store();
    store.flush();

    for key in POPULATED_KEYS {
        assert!(!store.exists(key), "{} survived flush", key);
    }
    assert!(store.is_empty());
}

#[test]
fn store_accepts_writes_after_flush() {
    let store = TypedStore::new();
    store.set("one", 1i64);
    store.set("two", 2i64);
    store.flush();

    store.set("one", "again");
    assert_eq!(store.get_string("one"), "again");
    assert!(!store.exists("two"));
    assert_eq!(store.len(), 1);
}

#[test]
fn flush_on_empty_store() {
    let store = TypedStore::new();
    store.flush();
    assert!(store.is_empty());
}

#[test]
fn get_or_default_scenario() {
    let store = TypedStore::new();

    assert_eq!(store.get_or_default("missing", "default"), Value::from("default"));
    store.set("present", "here");
    assert_eq!(store.get_or_default("present", "default"), Value::from("here"));
}

#[test]
fn get_or_default_does_not_coerce() {
    let store = TypedStore::new();
    store.set("age", 47i64);

    // Present with another type: the stored value wins, untouched
    assert_eq!(store.get_or_default("age", "default"), Value::I64(47));
}

#[test]
fn overwrite_replaces_type() {
    let store = TypedStore::new();
    store.set("k", 1i32);
    store.set("k", vec!["x"]);

    assert_eq!(store.get_i32("k"), 0);
    assert_eq!(store.get_strings("k"), vec!["x"]);
}
