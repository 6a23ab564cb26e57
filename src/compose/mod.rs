//! Function combinators.
//!
//! - [`pipeline`] and [`pipeline!`]: left-to-right application,
//!   `pipeline!(x, f, g) == g(f(x))`
//! - [`curry!`]: turns `f(a, b)` into `f(a)(b)`
//! - [`identity`] and [`constant`]
//!
//! # Examples
//!
//! ```
//! use gunderscore::compose::{constant, identity};
//! use gunderscore::{curry, pipeline};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let add_one = curry!(add)(1);
//! assert_eq!(pipeline!(5, identity, add_one, |x| x * 2), 12);
//! assert_eq!(constant::<_, i32>("fixed")(99), "fixed");
//! ```
//!
//! # Laws
//!
//! - **Left identity**: `pipeline!(x, identity, f) == f(x)`
//! - **Right identity**: `pipeline!(x, f, identity) == f(x)`
//! - **Currying**: `curry!(f)(a)(b) == f(a, b)`

mod curry_macro;
mod pipeline;
mod utils;

pub use pipeline::pipeline;
pub use utils::{constant, identity};

pub use crate::curry;
pub use crate::pipeline;
