//! The traversal engine: the `each` primitive every operator is built on.
//!
//! [`each`] visits every element of a container once, in traversal order,
//! passing the element and its position. Sequences are visited from index
//! `0` upwards; mappings are visited in key order and the position passed
//! is the key's rank, not the key itself. Absent input is visited zero
//! times.
//!
//! Operators that need to stop early or to fail use the crate-internal
//! [`traverse`], whose visitor returns `Result<ControlFlow<()>, E>`.

use std::ops::ControlFlow;

use super::error::CollectionError;
use super::shape::Container;
use crate::value::Value;

/// Calls `visitor` once per element of `collection`, in traversal order.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
///
/// # Examples
///
/// ```rust
/// use gunderscore::collection::each;
/// use gunderscore::array;
/// use gunderscore::value::Value;
///
/// let mut visited = Vec::new();
/// each(&array![10, 20, 30], |element, index| {
///     visited.push((index, element.clone()));
/// })
/// .unwrap();
/// assert_eq!(
///     visited,
///     vec![(0, Value::from(10)), (1, Value::from(20)), (2, Value::from(30))]
/// );
///
/// let mut calls = 0;
/// each(&Value::Null, |_, _| calls += 1).unwrap();
/// assert_eq!(calls, 0);
/// ```
pub fn each<F>(collection: &Value, mut visitor: F) -> Result<(), CollectionError>
where
    F: FnMut(&Value, usize),
{
    traverse("each", collection, |element, index| {
        visitor(element, index);
        Ok(ControlFlow::Continue(()))
    })
}

/// Calls a fallible `visitor` once per element, stopping at the first error.
///
/// The error type only needs to absorb [`CollectionError`], so callers can
/// route classification failures and their own visitor failures through one
/// type.
///
/// # Errors
///
/// Returns the first error produced by `visitor`, or a classification error
/// converted into `E`. Elements after a failing one are not visited.
///
/// # Examples
///
/// ```rust
/// use gunderscore::collection::{CollectionError, try_each};
/// use gunderscore::array;
///
/// #[derive(Debug, PartialEq)]
/// enum VisitError {
///     Collection(CollectionError),
///     TooLarge(usize),
/// }
///
/// impl From<CollectionError> for VisitError {
///     fn from(error: CollectionError) -> Self {
///         Self::Collection(error)
///     }
/// }
///
/// let mut seen = 0;
/// let result = try_each(&array![1, 2, 30, 4], |element, index| {
///     seen += 1;
///     if element.as_number() > Some(10.0) {
///         Err(VisitError::TooLarge(index))
///     } else {
///         Ok(())
///     }
/// });
/// assert_eq!(result, Err(VisitError::TooLarge(2)));
/// assert_eq!(seen, 3);
/// ```
pub fn try_each<E, F>(collection: &Value, mut visitor: F) -> Result<(), E>
where
    E: From<CollectionError>,
    F: FnMut(&Value, usize) -> Result<(), E>,
{
    traverse("each", collection, |element, index| {
        visitor(element, index).map(|()| ControlFlow::Continue(()))
    })
}

/// Classifies `collection` on behalf of `operation` and walks it.
pub(crate) fn traverse<E, F>(
    operation: &'static str,
    collection: &Value,
    visitor: F,
) -> Result<(), E>
where
    E: From<CollectionError>,
    F: FnMut(&Value, usize) -> Result<ControlFlow<()>, E>,
{
    let container = Container::classify(operation, collection)?;
    walk(container, visitor)
}

/// Walks an already classified container until the visitor breaks or fails.
pub(crate) fn walk<E, F>(container: Container<'_>, mut visitor: F) -> Result<(), E>
where
    F: FnMut(&Value, usize) -> Result<ControlFlow<()>, E>,
{
    for (index, element) in container.elements() {
        if visitor(&*element, index)?.is_break() {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array, object};
    use rstest::rstest;

    #[rstest]
    fn test_each_visits_sequence_in_order() {
        let mut indices = Vec::new();
        each(&array![5, 6, 7, 8], |_, index| indices.push(index)).unwrap();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[rstest]
    fn test_each_visits_mapping_with_ranks() {
        let record = object! { "foo" => "bar", "qux" => "baz" };
        let mut visits = Vec::new();
        each(&record, |element, rank| visits.push((rank, element.clone()))).unwrap();
        assert_eq!(
            visits,
            vec![(0, Value::from("bar")), (1, Value::from("baz"))]
        );
    }

    #[rstest]
    fn test_each_visits_characters() {
        let mut characters = String::new();
        each(&Value::from("abc"), |element, _| {
            characters.push_str(element.as_str().unwrap_or_default());
        })
        .unwrap();
        assert_eq!(characters, "abc");
    }

    #[rstest]
    #[case(Value::Null)]
    #[case(Value::Undefined)]
    fn test_each_absent_is_noop(#[case] absent: Value) {
        let mut calls = 0;
        assert!(each(&absent, |_, _| calls += 1).is_ok());
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_each_rejects_number() {
        let mut calls = 0;
        let error = each(&Value::Number(3.0), |_, _| calls += 1).unwrap_err();
        assert_eq!(error.operation(), "each");
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_try_each_stops_at_first_error() {
        let mut visited = Vec::new();
        let result: Result<(), CollectionError> = try_each(&array![1, 2, 3], |element, index| {
            visited.push(element.clone());
            if index == 1 {
                Err(CollectionError::invalid_argument("visitor", "stop"))
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
        assert_eq!(visited, vec![Value::from(1), Value::from(2)]);
    }

    #[rstest]
    fn test_traverse_break_stops_walk() {
        let mut visited = 0;
        let result: Result<(), CollectionError> =
            traverse("test", &array![1, 2, 3, 4], |_, index| {
                visited += 1;
                Ok(if index == 1 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                })
            });
        assert!(result.is_ok());
        assert_eq!(visited, 2);
    }
}
