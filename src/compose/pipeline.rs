//! Left-to-right function application.
//!
//! [`pipeline`] threads a seed through a runtime list of functions of one
//! type; [`pipeline!`](crate::pipeline!) does the same for a fixed list of
//! functions written at the call site, whose types may differ from step to
//! step. Its `?` form chains fallible steps such as the collection
//! operators and stops at the first error.

/// Applies `functions` to `seed` left to right.
///
/// `pipeline(x, [f, g, h])` is `h(g(f(x)))`. With no functions the seed is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use gunderscore::compose::pipeline;
///
/// let steps: Vec<Box<dyn FnOnce(i32) -> i32>> = vec![
///     Box::new(|x| x * 2),
///     Box::new(|x| x + 1),
/// ];
/// assert_eq!(pipeline(5, steps), 11);
///
/// let no_steps: Vec<fn(i32) -> i32> = Vec::new();
/// assert_eq!(pipeline(5, no_steps), 5);
/// ```
pub fn pipeline<T, I, F>(seed: T, functions: I) -> T
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> T,
{
    functions
        .into_iter()
        .fold(seed, |accumulator, function| function(accumulator))
}

/// Pipes a value through functions from left to right.
///
/// - `pipeline!(x)` returns `x`
/// - `pipeline!(x, f)` returns `f(x)`
/// - `pipeline!(x, f, g, ...)` returns `...g(f(x))`
///
/// Each function is called exactly once, so [`FnOnce`] closures are
/// accepted, and each step may change the type flowing through.
///
/// # Examples
///
/// ```
/// use gunderscore::collection::{filter, reduce};
/// use gunderscore::value::Value;
/// use gunderscore::{array, pipeline};
///
/// let total = pipeline!(
///     array![1, 2, 3, 4, 5, 6],
///     |numbers: Value| filter(&numbers, |x| x.to_number() % 2.0 == 0.0).unwrap(),
///     Value::from,
///     |evens: Value| {
///         reduce(&evens, |sum, x, _| Value::from(sum.to_number() + x.to_number())).unwrap()
///     }
/// );
/// assert_eq!(total, Some(Value::from(12)));
/// ```
///
/// Prefixing the seed with `?` threads it through steps that return
/// [`Result`], such as the collection operators. The first `Err` is
/// returned and the remaining steps never run. Every step must share one
/// error type, and `pipeline!(? x)` is `Ok(x)`.
///
/// ```
/// use gunderscore::collection::{CollectionError, filter, map};
/// use gunderscore::value::Value;
/// use gunderscore::{array, pipeline};
///
/// let kept = pipeline!(
///     ? array![1, 2, 3],
///     |numbers: Value| map(&numbers, |x| Value::from(x.to_number() * 10.0)).map(Value::from),
///     |tens: Value| filter(&tens, |x| x.to_number() > 15.0)
/// );
/// assert_eq!(kept, Ok(vec![Value::from(20), Value::from(30)]));
///
/// let failed = pipeline!(
///     ? Value::Bool(true),
///     |flag: Value| map(&flag, Value::clone).map(Value::from),
///     |_: Value| -> Result<Vec<Value>, CollectionError> { unreachable!() }
/// );
/// assert!(failed.is_err());
/// ```
#[macro_export]
macro_rules! pipeline {
    (? $value:expr $(,)?) => {
        ::core::result::Result::Ok($value)
    };

    (? $value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    (? $value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        match $function($value) {
            ::core::result::Result::Ok(value) => {
                $crate::pipeline!(? value, $($remaining_functions),+)
            }
            ::core::result::Result::Err(error) => ::core::result::Result::Err(error),
        }
    };

    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipeline!($function($value), $($remaining_functions),+)
    };
}
