//! Collection operators over dynamic values.
//!
//! Every operator accepts a [`Value`](crate::value::Value) and treats it as
//! one of three shapes:
//!
//! - a **sequence**: an array, or a string whose elements are its characters
//! - a **mapping**: an object, whose elements are its values in key order
//! - **absent**: `Null` or `Undefined`, which has no elements
//!
//! Booleans and numbers are not containers and are rejected with
//! [`CollectionError::NotAContainer`].
//!
//! All operators are built on [`each`], which visits elements in traversal
//! order: ascending index for sequences, ascending key order for mappings.
//! No operator mutates its input.
//!
//! # Overview
//!
//! | Operator | Result |
//! |----------|--------|
//! | [`each`] | visits every element |
//! | [`map`] | one result per element |
//! | [`filter`] / [`not`] | elements that pass / fail a predicate |
//! | [`reduce`] / [`fold`] | left fold without / with a seed |
//! | [`find`] | first matching element |
//! | [`all`] / [`any`] | whether every / some element matches |
//! | [`select`] | one field plucked from every element |
//! | [`where_matches`] | elements carrying every given field |
//! | [`invert`] | a mapping with keys and values swapped |
//! | [`zip`] | tuples of elements at the same position |
//! | [`max`] / [`min`] | the extreme number of a sequence |
//!
//! Closures that can fail go through the `try_` variants, which stop at the
//! first error.
//!
//! # Examples
//!
//! ```rust
//! use gunderscore::collection::{each, filter, reduce};
//! use gunderscore::array;
//! use gunderscore::value::Value;
//!
//! let numbers = array![1, 2, 3, 4, 5];
//!
//! let mut total = 0.0;
//! each(&numbers, |element, _| total += element.to_number()).unwrap();
//! assert_eq!(total, 15.0);
//!
//! let odd = filter(&numbers, |x| x.to_number() % 2.0 == 1.0).unwrap();
//! let product = reduce(&Value::from(odd), |accumulator, element, _| {
//!     Value::from(accumulator.to_number() * element.to_number())
//! })
//! .unwrap();
//! assert_eq!(product, Some(Value::from(15)));
//! ```

mod error;
mod fold;
mod shape;
mod transform;
mod traversal;

pub use error::CollectionError;
pub use fold::{all, any, find, fold, max, min, reduce, try_find, try_fold, try_reduce};
pub use shape::{Container, Elements, Key, Keys, Shape};
pub use transform::{filter, invert, map, not, select, try_filter, try_map, where_matches, zip};
pub use traversal::{each, try_each};
