//! Value-level combinators.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: builds a function that ignores its input
//!
//! Both are generic, so they slot into the collection operators as well as
//! into [`pipeline`](super::pipeline).

/// Returns the value unchanged.
///
/// Passing `identity` where a transformation is expected is the usual way
/// to say "no transformation".
///
/// # Examples
///
/// ```
/// use gunderscore::compose::identity;
/// use gunderscore::collection::map;
/// use gunderscore::array;
/// use gunderscore::value::Value;
///
/// assert_eq!(identity(42), 42);
///
/// let copied = map(&array![1, "two"], |element| identity(element.clone())).unwrap();
/// assert_eq!(copied, vec![Value::from(1), Value::from("two")]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns a clone of `value`, ignoring its input.
///
/// # Examples
///
/// ```
/// use gunderscore::compose::constant;
/// use gunderscore::value::Value;
///
/// let three = Value::from(3);
/// let always_null = constant::<_, &Value>(Value::Null);
/// assert_eq!(always_null(&three), Value::Null);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}
