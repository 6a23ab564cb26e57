//! Operators that build a new collection from a traversal.
//!
//! Every operator here classifies its input once, walks it once through the
//! traversal engine, and returns a freshly allocated result. Absent input
//! yields an empty result. When a fallible closure fails, the partially
//! built result is dropped and only the error is returned.
//!
//! # Examples
//!
//! ```rust
//! use gunderscore::collection::{filter, map, not, select};
//! use gunderscore::{array, object};
//! use gunderscore::value::Value;
//!
//! let numbers = array![1, 2, 3, 4];
//! let doubled = map(&numbers, |x| Value::from(x.to_number() * 2.0)).unwrap();
//! assert_eq!(Value::from(doubled), array![2, 4, 6, 8]);
//!
//! let even = |x: &Value| x.to_number() % 2.0 == 0.0;
//! assert_eq!(filter(&numbers, even).unwrap(), vec![Value::from(2), Value::from(4)]);
//! assert_eq!(not(&numbers, even).unwrap(), vec![Value::from(1), Value::from(3)]);
//!
//! let stooges = array![object! { "name" => "moe" }, object! { "name" => "larry" }];
//! assert_eq!(
//!     select(&stooges, "name").unwrap(),
//!     vec![Value::from("moe"), Value::from("larry")]
//! );
//! ```

use std::ops::ControlFlow;

use smallvec::SmallVec;

use super::error::CollectionError;
use super::shape::{Container, Elements, Shape};
use super::traversal::{traverse, walk};
use crate::value::{Map, Truthy, Value};

/// Containers zipped alongside the first one; most calls zip a handful.
const ZIP_INLINE_CAPACITY: usize = 4;

/// Applies `function` to every element, collecting the results in traversal order.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
///
/// # Examples
///
/// ```rust
/// use gunderscore::collection::map;
/// use gunderscore::value::Value;
/// use gunderscore::object;
///
/// let record = object! { "a" => 1, "b" => 2 };
/// let kinds = map(&record, |value| Value::from(value.kind())).unwrap();
/// assert_eq!(kinds, vec![Value::from("number"), Value::from("number")]);
///
/// assert!(map(&Value::Undefined, Value::clone).unwrap().is_empty());
/// ```
pub fn map<F>(collection: &Value, mut function: F) -> Result<Vec<Value>, CollectionError>
where
    F: FnMut(&Value) -> Value,
{
    try_map(collection, |element| Ok(function(element)))
}

/// Fallible [`map`]: stops at the first error and discards partial results.
///
/// # Errors
///
/// Returns the first error produced by `function`, or a classification
/// error converted into `E`.
pub fn try_map<E, F>(collection: &Value, mut function: F) -> Result<Vec<Value>, E>
where
    E: From<CollectionError>,
    F: FnMut(&Value) -> Result<Value, E>,
{
    let mut result = Vec::new();
    traverse::<E, _>("map", collection, |element, _| {
        result.push(function(element)?);
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(result)
}

/// Keeps the elements for which `predicate` returns a truthy result.
///
/// The predicate may return any [`Truthy`] type; `0` and `""` are truthy.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
///
/// # Examples
///
/// ```rust
/// use gunderscore::collection::filter;
/// use gunderscore::array;
/// use gunderscore::value::Value;
///
/// // Returning the element itself keeps everything except false and null.
/// let kept = filter(&array![0, false, "", Value::Null, 3], Value::clone).unwrap();
/// assert_eq!(kept, vec![Value::from(0), Value::from(""), Value::from(3)]);
/// ```
pub fn filter<P, T>(collection: &Value, mut predicate: P) -> Result<Vec<Value>, CollectionError>
where
    P: FnMut(&Value) -> T,
    T: Truthy,
{
    try_filter(collection, |element| Ok(predicate(element)))
}

/// Fallible [`filter`]: stops at the first error and discards partial results.
///
/// # Errors
///
/// Returns the first error produced by `predicate`, or a classification
/// error converted into `E`.
pub fn try_filter<E, P, T>(collection: &Value, predicate: P) -> Result<Vec<Value>, E>
where
    E: From<CollectionError>,
    P: FnMut(&Value) -> Result<T, E>,
    T: Truthy,
{
    retain("filter", collection, predicate, true)
}

/// Keeps the elements for which `predicate` returns a falsy result.
///
/// `filter` and `not` with the same predicate partition the traversed
/// elements.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
pub fn not<P, T>(collection: &Value, mut predicate: P) -> Result<Vec<Value>, CollectionError>
where
    P: FnMut(&Value) -> T,
    T: Truthy,
{
    retain("not", collection, |element| Ok(predicate(element)), false)
}

fn retain<E, P, T>(
    operation: &'static str,
    collection: &Value,
    mut predicate: P,
    keep_truthy: bool,
) -> Result<Vec<Value>, E>
where
    E: From<CollectionError>,
    P: FnMut(&Value) -> Result<T, E>,
    T: Truthy,
{
    let mut result = Vec::new();
    traverse::<E, _>(operation, collection, |element, _| {
        if predicate(element)?.is_truthy() == keep_truthy {
            result.push(element.clone());
        }
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(result)
}

/// Plucks the field `key` from every element.
///
/// Elements without the field contribute `Undefined`.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
pub fn select(collection: &Value, key: &str) -> Result<Vec<Value>, CollectionError> {
    let mut result = Vec::new();
    traverse("select", collection, |element, _| {
        result.push(element.get(key));
        Ok::<_, CollectionError>(ControlFlow::Continue(()))
    })?;
    Ok(result)
}

/// Keeps the elements that carry every field of `criteria` with an equal value.
///
/// An element missing a required field is excluded. Empty criteria keep
/// every element.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
///
/// # Examples
///
/// ```rust
/// use gunderscore::collection::where_matches;
/// use gunderscore::value::Value;
/// use gunderscore::{array, object};
///
/// let items = array![
///     object! { "n" => 1, "t" => "a" },
///     object! { "n" => 2, "t" => "a" },
///     object! { "n" => 3, "t" => "b" },
/// ];
/// let Value::Object(criteria) = object!("t" => "a") else { unreachable!() };
/// let matched = where_matches(&items, &criteria).unwrap();
/// assert_eq!(matched.len(), 2);
/// assert_eq!(matched[1].get("n"), Value::from(2));
/// ```
pub fn where_matches(collection: &Value, criteria: &Map) -> Result<Vec<Value>, CollectionError> {
    retain(
        "where",
        collection,
        |element| {
            Ok::<_, CollectionError>(criteria.iter().all(|(key, expected)| {
                element
                    .lookup(key)
                    .is_some_and(|actual| *actual == *expected)
            }))
        },
        true,
    )
}

/// Swaps the keys and values of a mapping.
///
/// Values become keys through their string form (`String(value)`); when two
/// keys hold the same value, the key traversed last wins.
///
/// Absent input has no keys, so it inverts to an empty mapping.
///
/// # Errors
///
/// Returns [`CollectionError::ShapeMismatch`] for a sequence and
/// [`CollectionError::NotAContainer`] for a boolean or a number.
///
/// # Examples
///
/// ```rust
/// use gunderscore::collection::invert;
/// use gunderscore::object;
/// use gunderscore::value::Value;
///
/// let inverted = invert(&object! { "a" => "x", "b" => "x", "c" => 1 }).unwrap();
/// assert_eq!(Value::from(inverted), object! { "x" => "b", "1" => "c" });
///
/// assert!(invert(&Value::Null).unwrap().is_empty());
/// ```
pub fn invert(collection: &Value) -> Result<Map, CollectionError> {
    let container = Container::classify("invert", collection)?;
    match container.shape() {
        Shape::Absent => Ok(Map::new()),
        Shape::Sequence => Err(CollectionError::shape_mismatch(
            "invert",
            Shape::Mapping,
            Shape::Sequence,
        )),
        Shape::Mapping => {
            let mut result = Map::new();
            let mut keys = container.keys();
            walk(container, |element, _| {
                if let Some(key) = keys.next() {
                    result.insert(element.to_string(), Value::String(key.to_string()));
                }
                Ok::<_, CollectionError>(ControlFlow::Continue(()))
            })?;
            Ok(result)
        }
    }
}

/// Groups the elements at each position across several containers.
///
/// Tuple `i` is `[c1[i], c2[i], ...]` as a `Value::Array`. The result has
/// as many tuples as the first container has elements; positions missing
/// from a later, shorter container are filled with `Undefined`.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if any argument is a boolean
/// or a number.
///
/// # Examples
///
/// ```rust
/// use gunderscore::collection::zip;
/// use gunderscore::array;
/// use gunderscore::value::Value;
///
/// let tuples = zip(&[&array![1, 2, 3], &Value::from("ab")]).unwrap();
/// assert_eq!(
///     tuples,
///     vec![array![1, "a"], array![2, "b"], array![3, Value::Undefined]]
/// );
/// ```
pub fn zip(collections: &[&Value]) -> Result<Vec<Value>, CollectionError> {
    let Some((first, rest)) = collections.split_first() else {
        return Ok(Vec::new());
    };
    // Partners advance in lockstep with the first container.
    let mut partners: SmallVec<[Elements<'_>; ZIP_INLINE_CAPACITY]> = SmallVec::new();
    for collection in rest {
        partners.push(Container::classify("zip", collection)?.elements());
    }

    let mut result = Vec::new();
    traverse("zip", first, |element, _| {
        let mut tuple = Vec::with_capacity(partners.len() + 1);
        tuple.push(element.clone());
        tuple.extend(partners.iter_mut().map(|partner| {
            partner
                .next()
                .map_or(Value::Undefined, |(_, partnered)| partnered.into_owned())
        }));
        result.push(Value::Array(tuple));
        Ok::<_, CollectionError>(ControlFlow::Continue(()))
    })?;
    Ok(result)
}
