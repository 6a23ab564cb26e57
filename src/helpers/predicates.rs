//! Predicates: functions that always return a `bool`.

use crate::value::{Truthy, Value};

/// Returns `true` unless `value` is `Null` or `Undefined`.
#[inline]
pub const fn exists(value: &Value) -> bool {
    !value.is_absent()
}

/// Returns `true` for every value except `false`, `Null` and `Undefined`.
///
/// ```
/// use gunderscore::helpers::is_truthy;
/// use gunderscore::value::Value;
///
/// assert!(is_truthy(&Value::from(0)));
/// assert!(is_truthy(&Value::from("")));
/// assert!(!is_truthy(&Value::Null));
/// ```
#[inline]
pub fn is_truthy(value: &Value) -> bool {
    value.is_truthy()
}

/// Negation of [`is_truthy`].
#[inline]
pub fn is_falsy(value: &Value) -> bool {
    value.is_falsy()
}

/// Returns `true` if `value` converts to a number other than `NaN`.
///
/// Numeric strings, booleans, `Null` and short arrays all convert.
///
/// ```
/// use gunderscore::helpers::is_number;
/// use gunderscore::value::Value;
///
/// assert!(is_number(&Value::from(4.5)));
/// assert!(is_number(&Value::from(" 12 ")));
/// assert!(is_number(&Value::Null));
/// assert!(!is_number(&Value::from("twelve")));
/// assert!(!is_number(&Value::Undefined));
/// ```
pub fn is_number(value: &Value) -> bool {
    !value.to_number().is_nan()
}

/// Returns `true` for strings.
#[inline]
pub const fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Returns `true` for arrays.
#[inline]
pub const fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Returns `true` for arrays and objects.
#[inline]
pub const fn is_object(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Strict equality: same kind and same content, with `NaN` unequal to itself.
#[inline]
pub fn is_equal(left: &Value, right: &Value) -> bool {
    left == right
}

/// Returns `true` if `left > right`.
///
/// Two strings compare lexicographically; anything else compares by
/// numeric conversion, and a `NaN` on either side makes the answer `false`.
///
/// ```
/// use gunderscore::helpers::is_greater_than;
/// use gunderscore::value::Value;
///
/// assert!(is_greater_than(&Value::from("b"), &Value::from("abc")));
/// assert!(is_greater_than(&Value::from("10"), &Value::from(9)));
/// assert!(!is_greater_than(&Value::from(1), &Value::Undefined));
/// ```
pub fn is_greater_than(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::String(left), Value::String(right)) => left > right,
        _ => left.to_number() > right.to_number(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array, object};
    use rstest::rstest;

    #[rstest]
    #[case(Value::Undefined, false)]
    #[case(Value::Null, false)]
    #[case(Value::Bool(false), true)]
    #[case(Value::from(0), true)]
    fn test_exists(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(exists(&value), expected);
    }

    #[rstest]
    #[case(Value::Bool(false), false)]
    #[case(Value::Null, false)]
    #[case(Value::from(f64::NAN), true)]
    #[case(array![], true)]
    fn test_is_truthy(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_truthy(&value), expected);
        assert_eq!(is_falsy(&value), !expected);
    }

    #[rstest]
    #[case(Value::from(true), true)]
    #[case(Value::from(""), true)]
    #[case(array![7], true)]
    #[case(array![1, 2], false)]
    #[case(object! {}, false)]
    #[case(Value::from(f64::NAN), false)]
    fn test_is_number(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_number(&value), expected);
    }

    #[rstest]
    fn test_kind_predicates() {
        let text = Value::from("a");
        let list = array![1];
        let record = object! { "a" => 1 };
        assert!(is_string(&text) && !is_string(&list));
        assert!(is_array(&list) && !is_array(&record));
        assert!(is_object(&list) && is_object(&record) && !is_object(&text));
    }

    #[rstest]
    fn test_is_equal() {
        assert!(is_equal(&Value::from(1), &Value::from(1.0)));
        assert!(!is_equal(&Value::from(1), &Value::from("1")));
        assert!(!is_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(is_equal(&array![1, "a"], &array![1, "a"]));
    }

    #[rstest]
    #[case(Value::from(3), Value::from(2), true)]
    #[case(Value::from(2), Value::from(3), false)]
    #[case(Value::from("10"), Value::from("9"), false)]
    #[case(Value::from(true), Value::from(0), true)]
    #[case(Value::from(f64::NAN), Value::from(0), false)]
    fn test_is_greater_than(#[case] left: Value, #[case] right: Value, #[case] expected: bool) {
        assert_eq!(is_greater_than(&left, &right), expected);
    }
}
