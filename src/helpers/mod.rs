//! Utility functions around the collection operators.
//!
//! - **Predicates**: [`exists`], [`is_truthy`], [`is_falsy`], [`is_number`],
//!   [`is_string`], [`is_array`], [`is_object`], [`is_equal`],
//!   [`is_greater_than`]
//! - **Objects**: [`keys`], [`vals`], [`has`], [`mixin`], [`first`], [`tail`]
//! - **Sequences**: [`range`], [`range_step`], [`times`], [`to_array`],
//!   [`to_hexadecimal`]
//! - **Memoization**: [`memoize`]
//!
//! # Examples
//!
//! ```
//! use gunderscore::collection::map;
//! use gunderscore::helpers::{is_number, keys, range};
//! use gunderscore::value::Value;
//! use gunderscore::object;
//!
//! let numbers: Value = range(4.0).into_iter().map(Value::from).collect();
//! let squares = map(&numbers, |x| Value::from(x.to_number().powi(2))).unwrap();
//! assert_eq!(squares, vec![Value::from(0), Value::from(1), Value::from(4), Value::from(9)]);
//!
//! let record = object! { "id" => "7", "name" => "moe" };
//! let numeric: Vec<String> = keys(&record)
//!     .unwrap()
//!     .into_iter()
//!     .filter(|key| is_number(&record.get(key)))
//!     .collect();
//! assert_eq!(numeric, vec!["id"]);
//! ```

mod memoize;
mod object;
mod predicates;
mod sequence;

pub use memoize::{Memoized, memoize};
pub use object::{first, has, keys, mixin, tail, vals};
pub use predicates::{
    exists, is_array, is_equal, is_falsy, is_greater_than, is_number, is_object, is_string,
    is_truthy,
};
pub use sequence::{range, range_step, times, to_array, to_hexadecimal};
