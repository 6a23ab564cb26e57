//! Key, value and element accessors.
//!
//! These accept any container, like the collection operators: sequence
//! positions act as the decimal-string keys `"0"`, `"1"`, ... and absent
//! input has no keys.

use std::borrow::Cow;

use crate::collection::{CollectionError, Container};
use crate::value::{Map, Value};

/// Returns the keys of `collection` in traversal order.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
///
/// # Examples
///
/// ```
/// use gunderscore::helpers::keys;
/// use gunderscore::value::Value;
/// use gunderscore::{array, object};
///
/// assert_eq!(keys(&object! { "b" => 1, "a" => 2 }).unwrap(), vec!["a", "b"]);
/// assert_eq!(keys(&array![true, false]).unwrap(), vec!["0", "1"]);
/// assert!(keys(&Value::Null).unwrap().is_empty());
/// ```
pub fn keys(collection: &Value) -> Result<Vec<String>, CollectionError> {
    let container = Container::classify("keys", collection)?;
    Ok(container.keys().map(|key| key.to_string()).collect())
}

/// Returns the elements of `collection` in traversal order.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
pub fn vals(collection: &Value) -> Result<Vec<Value>, CollectionError> {
    let container = Container::classify("vals", collection)?;
    Ok(container
        .elements()
        .map(|(_, element)| element.into_owned())
        .collect())
}

/// Returns `true` if `value` has its own field or position `key`.
///
/// ```
/// use gunderscore::helpers::has;
/// use gunderscore::value::Value;
/// use gunderscore::object;
///
/// let record = object! { "name" => Value::Undefined };
/// assert!(has(&record, "name"));
/// assert!(!has(&record, "age"));
/// assert!(has(&Value::from("abc"), "2"));
/// ```
pub fn has(value: &Value, key: &str) -> bool {
    value.lookup(key).is_some()
}

/// Merges the entries of `sources` into a new mapping.
///
/// Sources are applied in order, so a key present in several sources takes
/// the value of the last one. Absent sources contribute nothing and the
/// inputs are left untouched.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if any source is a boolean
/// or a number.
///
/// # Examples
///
/// ```
/// use gunderscore::helpers::mixin;
/// use gunderscore::value::Value;
/// use gunderscore::object;
///
/// let defaults = object! { "color" => "red", "size" => 1 };
/// let overrides = object! { "size" => 3 };
/// let merged = mixin(&[&defaults, &Value::Null, &overrides]).unwrap();
/// assert_eq!(Value::from(merged), object! { "color" => "red", "size" => 3 });
/// assert_eq!(defaults.get("size"), Value::from(1));
/// ```
pub fn mixin(sources: &[&Value]) -> Result<Map, CollectionError> {
    let mut result = Map::new();
    for &source in sources {
        let container = Container::classify("mixin", source)?;
        for (key, (_, element)) in container.keys().zip(container.elements()) {
            result.insert(key.to_string(), element.into_owned());
        }
    }
    Ok(result)
}

/// Returns the first traversed element, or `None` when there is none.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
pub fn first(collection: &Value) -> Result<Option<Value>, CollectionError> {
    let container = Container::classify("first", collection)?;
    Ok(container.element_at(0).map(Cow::into_owned))
}

/// Returns every element after the first, in traversal order.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
///
/// # Examples
///
/// ```
/// use gunderscore::helpers::tail;
/// use gunderscore::array;
/// use gunderscore::value::Value;
///
/// assert_eq!(tail(&array![1, 2, 3]).unwrap(), vec![Value::from(2), Value::from(3)]);
/// assert!(tail(&array![1]).unwrap().is_empty());
/// ```
pub fn tail(collection: &Value) -> Result<Vec<Value>, CollectionError> {
    let container = Container::classify("tail", collection)?;
    Ok(container
        .elements()
        .skip(1)
        .map(|(_, element)| element.into_owned())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array, object};
    use rstest::rstest;

    #[rstest]
    fn test_keys_of_string_are_positions() {
        assert_eq!(keys(&Value::from("hé")).unwrap(), vec!["0", "1"]);
    }

    #[rstest]
    fn test_keys_reject_number() {
        assert_eq!(
            keys(&Value::from(5)).unwrap_err(),
            CollectionError::NotAContainer {
                operation: "keys",
                found: "number"
            }
        );
    }

    #[rstest]
    fn test_vals_follow_key_order() {
        let record = object! { "z" => 1, "a" => 2 };
        assert_eq!(vals(&record).unwrap(), vec![Value::from(2), Value::from(1)]);
    }

    #[rstest]
    #[case(array![1, 2], "1", true)]
    #[case(array![1, 2], "2", false)]
    #[case(array![1, 2], "01", false)]
    #[case(Value::from(3), "0", false)]
    #[case(Value::Null, "a", false)]
    fn test_has(#[case] value: Value, #[case] key: &str, #[case] expected: bool) {
        assert_eq!(has(&value, key), expected);
    }

    #[rstest]
    fn test_mixin_sequence_contributes_positions() {
        let merged = mixin(&[&object! { "0" => "zero", "x" => 1 }, &array!["first"]]).unwrap();
        assert_eq!(Value::from(merged), object! { "0" => "first", "x" => 1 });
    }

    #[rstest]
    fn test_mixin_of_nothing_is_empty() {
        assert!(mixin(&[]).unwrap().is_empty());
    }

    #[rstest]
    #[case(array![4, 5], Some(Value::from(4)))]
    #[case(Value::from("xyz"), Some(Value::from("x")))]
    #[case(object! { "b" => 2, "a" => 1 }, Some(Value::from(1)))]
    #[case(array![], None)]
    #[case(Value::Undefined, None)]
    fn test_first(#[case] collection: Value, #[case] expected: Option<Value>) {
        assert_eq!(first(&collection).unwrap(), expected);
    }

    #[rstest]
    fn test_tail_of_characters() {
        assert_eq!(
            tail(&Value::from("abc")).unwrap(),
            vec![Value::from("b"), Value::from("c")]
        );
    }
}
