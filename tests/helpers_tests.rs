#![cfg(feature = "helpers")]

//! Integration tests for the helper functions.

use std::sync::atomic::{AtomicUsize, Ordering};

use gunderscore::collection::{CollectionError, each, map};
use gunderscore::helpers::{
    exists, first, has, is_greater_than, is_number, is_object, keys, memoize, mixin, range,
    range_step, tail, times, to_array, to_hexadecimal, vals,
};
use gunderscore::value::Value;
use gunderscore::{array, object};
use rstest::rstest;

// =============================================================================
// Predicates
// =============================================================================

#[rstest]
fn test_predicates_as_filter_arguments() {
    let mixed = array![1, Value::Null, "2", "two", Value::Undefined, array![3]];
    let present = gunderscore::collection::filter(&mixed, exists).unwrap();
    assert_eq!(present.len(), 4);
    let numeric = gunderscore::collection::filter(&mixed, is_number).unwrap();
    assert_eq!(
        Value::from(numeric),
        array![1, Value::Null, "2", array![3]]
    );
}

#[rstest]
#[case(Value::from("b"), Value::from("a"), true)]
#[case(Value::from("B"), Value::from("a"), false)]
#[case(Value::from(2), Value::from("10"), false)]
#[case(Value::Null, Value::from(-1), true)]
fn test_is_greater_than_rules(#[case] left: Value, #[case] right: Value, #[case] expected: bool) {
    assert_eq!(is_greater_than(&left, &right), expected);
}

#[rstest]
fn test_is_object_includes_arrays() {
    assert!(is_object(&array![]));
    assert!(is_object(&object! {}));
    assert!(!is_object(&Value::Null));
}

// =============================================================================
// Object helpers
// =============================================================================

#[rstest]
fn test_keys_and_vals_line_up() {
    let record = object! { "moe" => 40, "larry" => 50, "curly" => 60 };
    let names = keys(&record).unwrap();
    let ages = vals(&record).unwrap();
    assert_eq!(names, vec!["curly", "larry", "moe"]);
    assert_eq!(Value::from(ages), array![60, 50, 40]);
    for (name, age) in names.iter().zip(vals(&record).unwrap()) {
        assert!(has(&record, name));
        assert_eq!(record.get(name), age);
    }
}

#[rstest]
fn test_mixin_does_not_touch_inputs() {
    let base = object! { "a" => 1 };
    let extra = object! { "a" => 2, "b" => 3 };
    let merged = mixin(&[&base, &extra]).unwrap();
    assert_eq!(Value::from(merged), object! { "a" => 2, "b" => 3 });
    assert_eq!(base, object! { "a" => 1 });
}

#[rstest]
fn test_mixin_rejects_scalar_source() {
    assert_eq!(
        mixin(&[&object! {}, &Value::from(true)]).unwrap_err(),
        CollectionError::NotAContainer {
            operation: "mixin",
            found: "boolean"
        }
    );
}

#[rstest]
fn test_first_and_tail_split_collection() {
    let collection = array![1, 2, 3];
    let head = first(&collection).unwrap();
    let rest = tail(&collection).unwrap();
    assert_eq!(head, Some(Value::from(1)));
    assert_eq!(Value::from(rest), array![2, 3]);
    assert_eq!(first(&Value::Null).unwrap(), None);
    assert!(tail(&Value::Null).unwrap().is_empty());
}

// =============================================================================
// Sequence helpers
// =============================================================================

#[rstest]
fn test_range_drives_each() {
    let indices: Value = range(5.0).into_iter().map(Value::from).collect();
    let mut calls = 0;
    each(&indices, |element, index| {
        assert_eq!(element.to_number(), index as f64);
        calls += 1;
    })
    .unwrap();
    assert_eq!(calls, 5);
}

#[rstest]
#[case(0.0, 10.0, 2.5, vec![0.0, 2.5, 5.0, 7.5])]
#[case(-3.0, 0.0, 1.0, vec![-3.0, -2.0, -1.0])]
#[case(2.0, 2.0, 1.0, vec![])]
fn test_range_step(
    #[case] start: f64,
    #[case] stop: f64,
    #[case] step: f64,
    #[case] expected: Vec<f64>,
) {
    assert_eq!(range_step(start, stop, step).unwrap(), expected);
}

#[rstest]
fn test_range_step_error_message() {
    let error = range_step(0.0, 5.0, -1.0).unwrap_err();
    assert_eq!(error.to_string(), "range: invalid argument, step must be positive");
}

#[rstest]
fn test_times_counts() {
    let mut seen = Vec::new();
    times(3, |index| seen.push(index));
    assert_eq!(seen, vec![0, 1, 2]);
}

#[rstest]
fn test_to_array_then_map() {
    let characters = to_array(&Value::from("hey")).unwrap();
    let codes = map(&Value::from(characters), |character| {
        Value::from(character.to_string().len())
    })
    .unwrap();
    assert_eq!(Value::from(codes), array![1, 1, 1]);
}

#[rstest]
#[case(10.0, "a")]
#[case(4096.0, "1000")]
#[case(0.0625, "0.1")]
#[case(-1.5, "-1.8")]
#[case(1e21, "3635c9adc5dea00000")]
fn test_to_hexadecimal(#[case] number: f64, #[case] expected: &str) {
    assert_eq!(to_hexadecimal(number), expected);
}

#[rstest]
fn test_to_hexadecimal_random_fraction_is_hex() {
    let text = to_hexadecimal(0.734_182_956_1);
    assert!(text.starts_with("0."));
    assert!(text[2..].chars().all(|character| character.is_ascii_hexdigit()));
}

// =============================================================================
// Memoization
// =============================================================================

#[rstest]
fn test_memoize_computes_once_per_key() {
    let calls = AtomicUsize::new(0);
    let add = memoize(|arguments: &[Value]| {
        calls.fetch_add(1, Ordering::SeqCst);
        Value::from(arguments.iter().map(Value::to_number).sum::<f64>())
    });

    assert_eq!(add.call(&[Value::from(1), Value::from(2)]), Value::from(3));
    assert_eq!(add.call(&[Value::from(1), Value::from(2)]), Value::from(3));
    assert_eq!(add.call(&[Value::from(2), Value::from(1)]), Value::from(3));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(add.len(), 2);
}

#[rstest]
fn test_memoize_keys_by_string_form() {
    let calls = AtomicUsize::new(0);
    let echo = memoize(|arguments: &[Value]| {
        calls.fetch_add(1, Ordering::SeqCst);
        Value::from(arguments.to_vec())
    });

    let nested = echo.call(&[array![1, 2]]);
    let flat = echo.call(&[Value::from(1), Value::from(2)]);
    assert_eq!(flat, nested);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
