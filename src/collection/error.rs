//! Error types for the collection operators.
//!
//! Absent input (`Null` or `Undefined`) is never an error: every operator
//! has a defined result for it. Errors are reserved for values that cannot
//! be traversed at all, containers of the wrong shape, and helper
//! arguments outside their domain.

use std::fmt;

use super::shape::Shape;

/// Represents errors raised by collection operators and helpers.
///
/// # Examples
///
/// ```rust
/// use gunderscore::collection::{CollectionError, map};
/// use gunderscore::value::Value;
///
/// let error = map(&Value::Bool(true), Value::clone).unwrap_err();
/// assert_eq!(
///     error,
///     CollectionError::NotAContainer { operation: "map", found: "boolean" }
/// );
/// assert_eq!(format!("{error}"), "map: expected a container, found boolean");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A scalar was passed where a sequence, mapping or absent value was required.
    NotAContainer {
        /// The operator that rejected the value.
        operation: &'static str,
        /// The kind of the rejected value.
        found: &'static str,
    },
    /// The container has a shape the operator does not accept.
    ShapeMismatch {
        /// The operator that rejected the container.
        operation: &'static str,
        /// The shape the operator accepts.
        expected: Shape,
        /// The shape that was passed.
        found: Shape,
    },
    /// A numeric operator met an element that is not a number.
    NotANumber {
        /// The operator that rejected the element.
        operation: &'static str,
        /// The traversal position of the element.
        index: usize,
        /// The kind of the rejected element.
        found: &'static str,
    },
    /// An argument is outside the domain of the operator.
    InvalidArgument {
        /// The operator that rejected the argument.
        operation: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },
}

impl CollectionError {
    pub(crate) fn not_a_container(operation: &'static str, found: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, found, "value is not a container");
        Self::NotAContainer { operation, found }
    }

    pub(crate) fn shape_mismatch(operation: &'static str, expected: Shape, found: Shape) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            operation,
            expected = expected.name(),
            found = found.name(),
            "container shape mismatch"
        );
        Self::ShapeMismatch {
            operation,
            expected,
            found,
        }
    }

    pub(crate) fn not_a_number(operation: &'static str, index: usize, found: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, index, found, "element is not a number");
        Self::NotANumber {
            operation,
            index,
            found,
        }
    }

    #[cfg_attr(not(feature = "helpers"), allow(dead_code))]
    pub(crate) fn invalid_argument(operation: &'static str, reason: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, reason, "invalid argument");
        Self::InvalidArgument { operation, reason }
    }

    /// Returns the name of the operator that raised this error.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::NotAContainer { operation, .. }
            | Self::ShapeMismatch { operation, .. }
            | Self::NotANumber { operation, .. }
            | Self::InvalidArgument { operation, .. } => *operation,
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAContainer { operation, found } => {
                write!(formatter, "{operation}: expected a container, found {found}")
            }
            Self::ShapeMismatch {
                operation,
                expected,
                found,
            } => write!(formatter, "{operation}: expected a {expected}, found a {found}"),
            Self::NotANumber {
                operation,
                index,
                found,
            } => write!(
                formatter,
                "{operation}: element {index} is not a number, found {found}"
            ),
            Self::InvalidArgument { operation, reason } => {
                write!(formatter, "{operation}: invalid argument, {reason}")
            }
        }
    }
}

impl std::error::Error for CollectionError {}

static_assertions::assert_impl_all!(CollectionError: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_shape_mismatch_display() {
        let error = CollectionError::shape_mismatch("invert", Shape::Mapping, Shape::Sequence);
        assert_eq!(
            format!("{error}"),
            "invert: expected a mapping, found a sequence"
        );
    }

    #[rstest]
    fn test_not_a_number_display() {
        let error = CollectionError::not_a_number("max", 2, "string");
        assert_eq!(
            format!("{error}"),
            "max: element 2 is not a number, found string"
        );
    }

    #[rstest]
    fn test_invalid_argument_display() {
        let error = CollectionError::invalid_argument("range", "step must be positive");
        assert_eq!(
            format!("{error}"),
            "range: invalid argument, step must be positive"
        );
    }

    #[rstest]
    #[case(CollectionError::not_a_container("each", "number"), "each")]
    #[case(CollectionError::not_a_number("min", 0, "null"), "min")]
    fn test_operation(#[case] error: CollectionError, #[case] expected: &str) {
        assert_eq!(error.operation(), expected);
    }

    #[rstest]
    fn test_equality() {
        let first = CollectionError::not_a_container("map", "boolean");
        let second = CollectionError::not_a_container("map", "boolean");
        let third = CollectionError::not_a_container("filter", "boolean");
        assert_eq!(first, second);
        assert_ne!(first, third);
    }
}
