//! Tier 4: building stores from encoded input

use crate::test_utils::init_tracing;
use typedstore::{Decoder, JsonDecoder, StoreError, StoreOptions, TypedStore, Value};

#[test]
fn scenario_from_json() {
    init_tracing();

    let store = TypedStore::from_json(r#"{"name":"ron","age":47}"#).unwrap();
    assert_eq!(store.get_string("name"), "ron");
    assert_eq!(store.get_int("age"), 47);
}

#[test]
fn from_json_full_record() {
    let json = r#"{
        "name": "ron",
        "age": 47,
        "enabled": true,
        "height": 6.1
    }"#;

    let store = TypedStore::from_json(json).unwrap();

    assert_eq!(store.get_string("name"), "ron");
    assert_eq!(store.get_int("age"), 47);
    assert!(store.get_bool("enabled"));
    assert!((store.get_f64("height") - 6.1).abs() < 0.001);
    assert_eq!(store.len(), 4);
}

#[test]
fn decoded_numbers_use_generic_form() {
    let store = TypedStore::from_json(r#"{"a": 1, "b": 1.0, "c": -2e3}"#).unwrap();

    assert_eq!(store.get("a"), Some(Value::F64(1.0)));
    assert_eq!(store.get("b"), Some(Value::F64(1.0)));
    assert_eq!(store.get_i16("c"), -2000);
}

#[test]
fn decode_failure_is_returned() {
    init_tracing();

    let err = TypedStore::from_json(r#"{"name": "#).unwrap_err();
    assert!(matches!(err, StoreError::Decode { .. }));
    assert!(err.to_string().starts_with("decode failed"));
}

#[test]
fn non_object_top_level_is_rejected() {
    let err = TypedStore::from_json(r#""just a string""#).unwrap_err();
    assert_eq!(err, StoreError::NotAnObject { actual: "String" });
}

#[test]
fn null_document_builds_empty_store() {
    let store = TypedStore::from_json("null").unwrap();
    assert!(store.is_empty());

    store.set("k", "v");
    assert_eq!(store.get_string("k"), "v");

    for blob in ["[]", "1", "false", r#""s""#] {
        assert!(
            matches!(TypedStore::from_json(blob), Err(StoreError::NotAnObject { .. })),
            "{} should be rejected",
            blob
        );
    }
}

#[test]
fn parse_via_from_str() {
    let store: TypedStore = r#"{"enabled": false}"#.parse().unwrap();
    assert!(store.exists("enabled"));
    assert!(!store.get_bool("enabled"));

    assert!("[]".parse::<TypedStore>().is_err());
}

#[test]
fn from_encoded_with_options() {
    let opts = StoreOptions::new().initial_capacity(32);
    let store = TypedStore::from_encoded_with_options(r#"{"k": "v"}"#, JsonDecoder, opts).unwrap();

    assert_eq!(store.options(), opts);
    assert_eq!(store.get_string("k"), "v");
}

#[test]
fn json_decoder_directly() {
    let pairs = JsonDecoder.decode(r#"{"x": true}"#).unwrap();
    assert_eq!(pairs, vec![("x".to_string(), Value::Bool(true))]);
}

#[test]
fn options_from_config_json() {
    let opts: StoreOptions = serde_json::from_str(r#"{"initial_capacity": 128}"#).unwrap();
    let store = TypedStore::with_options(opts);
    assert_eq!(store.options().initial_capacity, 128);
}
