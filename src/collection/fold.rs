//! Operators that reduce a traversal to a single value.
//!
//! [`reduce`] and [`fold`] are the unseeded and seeded forms of the same
//! left fold. [`find`], [`any`] and [`all`] stop traversing as soon as the
//! answer is known. [`max`] and [`min`] only accept sequences of numbers.
//!
//! # Examples
//!
//! ```rust
//! use gunderscore::collection::{fold, reduce};
//! use gunderscore::array;
//! use gunderscore::value::Value;
//!
//! let add = |accumulator: Value, element: &Value, _: usize| {
//!     Value::from(accumulator.to_number() + element.to_number())
//! };
//!
//! assert_eq!(reduce(&array![1, 2, 3], add).unwrap(), Some(Value::from(6)));
//! assert_eq!(reduce(&array![], add).unwrap(), None);
//! assert_eq!(fold(&array![1, 2, 3], Value::from(10), add).unwrap(), Value::from(16));
//! ```

use std::ops::ControlFlow;

use super::error::CollectionError;
use super::shape::{Container, Shape};
use super::traversal::{traverse, walk};
use crate::value::{Truthy, Value};

/// Folds the elements left to right, seeding with the first element.
///
/// The first element becomes the accumulator without passing through
/// `function`; every later element is combined as
/// `function(accumulator, element, index)`. Returns `Ok(None)` for empty
/// or absent input.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
pub fn reduce<F>(collection: &Value, mut function: F) -> Result<Option<Value>, CollectionError>
where
    F: FnMut(Value, &Value, usize) -> Value,
{
    try_reduce(collection, |accumulator, element, index| {
        Ok(function(accumulator, element, index))
    })
}

/// Fallible [`reduce`].
///
/// # Errors
///
/// Returns the first error produced by `function`, or a classification
/// error converted into `E`.
pub fn try_reduce<E, F>(collection: &Value, mut function: F) -> Result<Option<Value>, E>
where
    E: From<CollectionError>,
    F: FnMut(Value, &Value, usize) -> Result<Value, E>,
{
    let mut accumulator: Option<Value> = None;
    traverse::<E, _>("reduce", collection, |element, index| {
        accumulator = Some(match accumulator.take() {
            None => element.clone(),
            Some(current) => function(current, element, index)?,
        });
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(accumulator)
}

/// Folds the elements left to right starting from `seed`.
///
/// `function` is applied to every element, the first one included. Empty
/// or absent input returns `seed` unchanged.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
pub fn fold<F>(collection: &Value, seed: Value, mut function: F) -> Result<Value, CollectionError>
where
    F: FnMut(Value, &Value, usize) -> Value,
{
    try_fold(collection, seed, |accumulator, element, index| {
        Ok(function(accumulator, element, index))
    })
}

/// Fallible [`fold`].
///
/// # Errors
///
/// Returns the first error produced by `function`, or a classification
/// error converted into `E`.
pub fn try_fold<E, F>(collection: &Value, seed: Value, mut function: F) -> Result<Value, E>
where
    E: From<CollectionError>,
    F: FnMut(Value, &Value, usize) -> Result<Value, E>,
{
    let mut accumulator = seed;
    traverse::<E, _>("reduce", collection, |element, index| {
        accumulator = function(std::mem::take(&mut accumulator), element, index)?;
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(accumulator)
}

/// Returns the first element, in traversal order, satisfying `predicate`.
///
/// Traversal stops at the first match, so `predicate` is never called on
/// later elements.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
///
/// # Examples
///
/// ```rust
/// use gunderscore::collection::find;
/// use gunderscore::array;
/// use gunderscore::value::Value;
///
/// let mut calls = 0;
/// let found = find(&array![1, 2, 3, 4], |x| {
///     calls += 1;
///     x.to_number() > 2.0
/// })
/// .unwrap();
/// assert_eq!(found, Some(Value::from(3)));
/// assert_eq!(calls, 3);
/// ```
pub fn find<P, T>(collection: &Value, mut predicate: P) -> Result<Option<Value>, CollectionError>
where
    P: FnMut(&Value) -> T,
    T: Truthy,
{
    try_find(collection, |element| Ok(predicate(element)))
}

/// Fallible [`find`].
///
/// # Errors
///
/// Returns the first error produced by `predicate`, or a classification
/// error converted into `E`.
pub fn try_find<E, P, T>(collection: &Value, mut predicate: P) -> Result<Option<Value>, E>
where
    E: From<CollectionError>,
    P: FnMut(&Value) -> Result<T, E>,
    T: Truthy,
{
    let mut found = None;
    traverse::<E, _>("find", collection, |element, _| {
        if predicate(element)?.is_truthy() {
            found = Some(element.clone());
            return Ok(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(found)
}

/// Returns `true` if every element satisfies `predicate`.
///
/// Vacuously `true` for empty or absent input. Stops at the first element
/// that fails.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
pub fn all<P, T>(collection: &Value, mut predicate: P) -> Result<bool, CollectionError>
where
    P: FnMut(&Value) -> T,
    T: Truthy,
{
    let mut satisfied = true;
    traverse("all", collection, |element, _| {
        if predicate(element).is_falsy() {
            satisfied = false;
            return Ok::<_, CollectionError>(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(satisfied)
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// `false` for empty or absent input. Stops at the first element that
/// passes.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
pub fn any<P, T>(collection: &Value, mut predicate: P) -> Result<bool, CollectionError>
where
    P: FnMut(&Value) -> T,
    T: Truthy,
{
    let mut satisfied = false;
    traverse("any", collection, |element, _| {
        if predicate(element).is_truthy() {
            satisfied = true;
            return Ok::<_, CollectionError>(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(satisfied)
}

/// Returns the largest number in a sequence.
///
/// The current maximum is replaced only by a strictly greater number, so
/// the earliest of equal maxima is the one kept. `NaN` never replaces
/// anything. The search starts from negative infinity, which is what an
/// empty or all-`NaN` sequence returns. Returns `Ok(None)` for absent input.
///
/// # Errors
///
/// Returns [`CollectionError::ShapeMismatch`] for a mapping,
/// [`CollectionError::NotANumber`] for a sequence holding a non-number, and
/// [`CollectionError::NotAContainer`] for a boolean or a number.
///
/// # Examples
///
/// ```rust
/// use gunderscore::collection::{max, min};
/// use gunderscore::{array, object};
/// use gunderscore::value::Value;
///
/// assert_eq!(max(&array![3, -7, 12, 5]).unwrap(), Some(12.0));
/// assert_eq!(min(&array![3, -7, 12, 5]).unwrap(), Some(-7.0));
/// assert_eq!(max(&array![]).unwrap(), Some(f64::NEG_INFINITY));
/// assert_eq!(max(&Value::Null).unwrap(), None);
/// assert!(max(&object! { "a" => 1 }).is_err());
/// ```
pub fn max(collection: &Value) -> Result<Option<f64>, CollectionError> {
    extremum("max", collection, f64::NEG_INFINITY, |candidate, current| {
        candidate > current
    })
}

/// Returns the smallest number in a sequence.
///
/// The mirror image of [`max`]: only a strictly smaller number replaces the
/// current minimum, and the search starts from positive infinity.
///
/// # Errors
///
/// Same as [`max`].
pub fn min(collection: &Value) -> Result<Option<f64>, CollectionError> {
    extremum("min", collection, f64::INFINITY, |candidate, current| {
        candidate < current
    })
}

fn extremum(
    operation: &'static str,
    collection: &Value,
    start: f64,
    improves: fn(f64, f64) -> bool,
) -> Result<Option<f64>, CollectionError> {
    let container = Container::classify(operation, collection)?;
    match container.shape() {
        Shape::Absent => return Ok(None),
        Shape::Mapping => {
            return Err(CollectionError::shape_mismatch(
                operation,
                Shape::Sequence,
                Shape::Mapping,
            ));
        }
        Shape::Sequence => {}
    }

    let mut best = start;
    walk(container, |element, index| {
        let &Value::Number(candidate) = element else {
            return Err(CollectionError::not_a_number(operation, index, element.kind()));
        };
        // NaN compares false either way, so it never replaces the current extreme.
        if improves(candidate, best) {
            best = candidate;
        }
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(Some(best))
}
