//! The truthiness rule shared by every predicate-taking operator.
//!
//! Only `false`, `Null`, `Undefined` and `None` are falsy. Unlike native
//! JavaScript coercion, `0`, `NaN` and the empty string are truthy.

use super::Value;

/// Types whose values can stand in for a boolean predicate result.
///
/// Predicates passed to [`filter`](crate::collection::filter),
/// [`find`](crate::collection::find) and friends may return any `Truthy`
/// type, so both `|x| x.as_number() > Some(2.0)` and a closure returning a
/// `Value` work.
///
/// # Examples
///
/// ```rust
/// use gunderscore::value::{Truthy, Value};
///
/// assert!(Value::Number(0.0).is_truthy());
/// assert!(Value::from("").is_truthy());
/// assert!(Value::Bool(false).is_falsy());
/// assert!(Value::Null.is_falsy());
/// assert!(None::<Value>.is_falsy());
/// assert!(Some(true).is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` unless the value is falsy.
    fn is_truthy(&self) -> bool;

    /// Returns the negation of [`is_truthy`](Truthy::is_truthy).
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Null | Self::Undefined)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}
