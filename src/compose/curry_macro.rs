//! The `curry!` macro for two-argument functions.
//!
//! `curry!(f)` splits `f(a, b)` into `f(a)(b)`. The function and the first
//! argument are shared through `std::rc::Rc`, so a curried function and each
//! of its partial applications can be called any number of times.
//!
//! `curry!(operator, argument)` fixes the trailing argument of a collection
//! operator instead and leaves the collection open, which turns `filter`,
//! `select` and friends into one-argument steps for
//! [`pipeline!`](crate::pipeline!).

/// Converts a two-argument function into curried form.
///
/// Given `f(a, b) -> c`, `curry!(f)` returns a closure that takes `a` and
/// returns another closure that takes `b` and returns `c`. The first
/// argument must implement [`Clone`] when a partial application is called
/// more than once.
///
/// # Examples
///
/// ```
/// use gunderscore::curry;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried_add = curry!(add);
/// assert_eq!(curried_add(5)(3), 8);
///
/// let add_ten = curried_add(10);
/// assert_eq!(add_ten(1), 11);
/// assert_eq!(add_ten(2), 12);
/// ```
///
/// Currying a predicate to reuse it with the collection operators:
///
/// ```
/// use gunderscore::collection::filter;
/// use gunderscore::value::Value;
/// use gunderscore::{array, curry};
///
/// let above = curry!(|limit: f64, number: f64| number > limit);
/// let above_two = above(2.0);
/// let kept = filter(&array![1, 2, 3, 4], |element| above_two(element.to_number())).unwrap();
/// assert_eq!(kept, vec![Value::from(3), Value::from(4)]);
/// ```
///
/// Fixing the trailing argument of an operator so that only the collection
/// is left open. The argument is cloned on every call, so function items,
/// non-capturing closures, `&str` and `&Map` all work:
///
/// ```
/// use gunderscore::collection::{filter, select};
/// use gunderscore::value::Value;
/// use gunderscore::{array, curry, object};
///
/// let names = curry!(select, "name");
/// let adults = curry!(filter, |person: &Value| person.get("age").to_number() >= 18.0);
///
/// let people = array![
///     object! { "name" => "moe", "age" => 40 },
///     object! { "name" => "kid", "age" => 9 },
/// ];
/// let grown = Value::from(adults(&people).unwrap());
/// assert_eq!(names(&grown).unwrap(), vec![Value::from("moe")]);
/// ```
#[macro_export]
macro_rules! curry {
    ($operator:expr, $argument:expr $(,)?) => {{
        let operator = $operator;
        let argument = $argument;
        move |collection: &$crate::value::Value| {
            operator(collection, ::std::clone::Clone::clone(&argument))
        }
    }};

    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                    second,
                )
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn test_curry_reuses_partial_application() {
        let concatenate = curry!(|prefix: String, suffix: &str| format!("{prefix}{suffix}"));
        let greet = concatenate(String::from("hello, "));
        assert_eq!(greet("moe"), "hello, moe");
        assert_eq!(greet("larry"), "hello, larry");
    }

    #[cfg(feature = "collection")]
    #[rstest]
    fn test_curry_fixes_operator_argument() {
        use crate::collection::{not, select};
        use crate::value::Value;
        use crate::{array, object};

        fn is_even(element: &Value) -> bool {
            element.to_number() % 2.0 == 0.0
        }

        let odds = curry!(not, is_even);
        assert_eq!(
            odds(&array![1, 2, 3]).unwrap(),
            vec![Value::from(1), Value::from(3)]
        );
        assert_eq!(odds(&array![4, 5]).unwrap(), vec![Value::from(5)]);

        let ages = curry!(select, "age");
        let stooges = array![object! { "age" => 40 }, object! { "age" => 50 }];
        assert_eq!(ages(&stooges).unwrap(), vec![Value::from(40), Value::from(50)]);
        assert!(ages(&Value::Bool(true)).is_err());
    }

    #[rstest]
    fn test_curry_with_function_item() {
        fn subtract(minuend: i32, subtrahend: i32) -> i32 {
            minuend - subtrahend
        }

        let curried = curry!(subtract);
        assert_eq!(curried(10)(3), 7);
        assert_eq!(curried(3)(10), -7);
    }
}
