#![cfg(feature = "serde")]

//! Integration tests for serde support on `Value`.
//!
//! These tests go through `serde_json`, which shares the JSON data model
//! `Value` is built on.

use gunderscore::value::Value;
use gunderscore::{array, object};
use rstest::rstest;

// =============================================================================
// Serialization
// =============================================================================

#[rstest]
#[case(Value::Null, "null")]
#[case(Value::Undefined, "null")]
#[case(Value::Bool(true), "true")]
#[case(Value::from(42), "42")]
#[case(Value::from(-0.0), "0")]
#[case(Value::from(1.5), "1.5")]
#[case(Value::from("hi"), "\"hi\"")]
#[case(array![1, "a", Value::Null], "[1,\"a\",null]")]
fn test_serialize_scalars_and_arrays(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
}

#[rstest]
fn test_serialize_object_in_key_order() {
    let record = object! { "b" => 2, "a" => array![true] };
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        "{\"a\":[true],\"b\":2}"
    );
}

// =============================================================================
// Deserialization
// =============================================================================

#[rstest]
fn test_deserialize_nested_document() {
    let json = r#"{"name": "moe", "tags": ["a", "b"], "age": 40, "ratio": 0.5, "spouse": null}"#;
    let value: Value = serde_json::from_str(json).unwrap();
    assert_eq!(
        value,
        object! {
            "name" => "moe",
            "tags" => array!["a", "b"],
            "age" => 40,
            "ratio" => 0.5,
            "spouse" => Value::Null,
        }
    );
}

#[rstest]
fn test_json_roundtrip() {
    let original = array![
        object! { "n" => 1, "t" => "a" },
        object! { "n" => -2.25, "t" => Value::Null },
        array![],
    ];
    let json = serde_json::to_string(&original).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(original, restored);
}

#[rstest]
fn test_undefined_does_not_survive_roundtrip() {
    let json = serde_json::to_string(&array![Value::Undefined]).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, array![Value::Null]);
}

#[cfg(feature = "collection")]
#[rstest]
fn test_deserialized_value_feeds_operators() {
    use gunderscore::collection::select;

    let people: Value =
        serde_json::from_str(r#"[{"name": "moe"}, {"name": "larry"}, {}]"#).unwrap();
    assert_eq!(
        select(&people, "name").unwrap(),
        vec![Value::from("moe"), Value::from("larry"), Value::Undefined]
    );
}
