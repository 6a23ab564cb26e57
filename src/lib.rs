//! # gunderscore
//!
//! Functional collection operators over dynamically typed values.
//!
//! ## Overview
//!
//! Data is a [`Value`](value::Value): undefined, null, boolean, number,
//! string, array or object. The collection operators treat arrays and
//! strings as sequences, objects as mappings, and `Null`/`Undefined` as an
//! absent container with no elements. Every operator is built on a single
//! traversal primitive, [`each`](collection::each).
//!
//! - **Values**: the [`Value`](value::Value) model, the `array!`/`object!`
//!   constructors and the [`Truthy`](value::Truthy) rule
//! - **Collection operators**: each, map, filter, not, reduce, find, all,
//!   any, select, where, invert, zip, max, min
//! - **Helpers**: predicates, key/value accessors, ranges, memoization
//! - **Composition**: pipeline, curry, identity, constant
//!
//! ## Feature Flags
//!
//! - `collection`: collection operators (default)
//! - `compose`: function combinators (default)
//! - `helpers`: utility functions (default, implies `collection`)
//! - `serde`: `Serialize`/`Deserialize` for `Value`
//! - `fxhash`: `rustc-hash` hasher for the memoization cache
//! - `tracing`: `tracing` events when an operator rejects its input
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use gunderscore::prelude::*;
//! use gunderscore::{array, object};
//!
//! let stooges = array![
//!     object! { "name" => "moe", "age" => 40 },
//!     object! { "name" => "larry", "age" => 50 },
//!     object! { "name" => "curly", "age" => 60 },
//! ];
//!
//! let older = filter(&stooges, |stooge| stooge.get("age").to_number() > 45.0).unwrap();
//! let names = select(&Value::from(older), "name").unwrap();
//! assert_eq!(names, vec![Value::from("larry"), Value::from("curly")]);
//!
//! let ages = Value::from(select(&stooges, "age").unwrap());
//! assert_eq!(max(&ages).unwrap(), Some(60.0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the value model and every enabled operator, helper and
/// combinator.
///
/// # Usage
///
/// ```rust
/// use gunderscore::prelude::*;
/// ```
pub mod prelude {
    pub use crate::value::{Map, Truthy, Value};

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "helpers")]
    pub use crate::helpers::*;
}

pub mod value;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "helpers")]
pub mod helpers;
