//! Memoization of functions over argument lists.
//!
//! A [`Memoized`] function remembers the result of every argument list it
//! has been called with. Argument lists are identified by their string
//! form: each argument is stringified, absent arguments become empty
//! strings, and the pieces are joined with `,`. Distinct argument lists
//! with the same string form therefore share one cache entry.
//!
//! The cache sits behind a `parking_lot::Mutex`, so a `Memoized` can be
//! shared between threads when the wrapped function can. The lock is not
//! held while the wrapped function runs.

use std::collections::HashMap;
use std::fmt::{self, Write};

use parking_lot::Mutex;

use crate::value::Value;

#[cfg(feature = "fxhash")]
type CacheHasher = rustc_hash::FxBuildHasher;

#[cfg(not(feature = "fxhash"))]
type CacheHasher = std::collections::hash_map::RandomState;

/// A function wrapped with a result cache. Built by [`memoize`].
pub struct Memoized<F> {
    function: F,
    cache: Mutex<HashMap<String, Value, CacheHasher>>,
}

/// Wraps `function` so that it runs at most once per distinct argument list.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use gunderscore::helpers::memoize;
/// use gunderscore::value::Value;
///
/// let calls = Cell::new(0);
/// let square = memoize(|arguments: &[Value]| {
///     calls.set(calls.get() + 1);
///     let number = arguments.first().map_or(f64::NAN, Value::to_number);
///     Value::from(number * number)
/// });
///
/// assert_eq!(square.call(&[Value::from(4)]), Value::from(16));
/// assert_eq!(square.call(&[Value::from(4)]), Value::from(16));
/// // The string "4" has the same cache key as the number 4.
/// assert_eq!(square.call(&[Value::from("4")]), Value::from(16));
/// assert_eq!(calls.get(), 1);
/// ```
pub fn memoize<F>(function: F) -> Memoized<F>
where
    F: Fn(&[Value]) -> Value,
{
    Memoized {
        function,
        cache: Mutex::new(HashMap::with_hasher(CacheHasher::default())),
    }
}

impl<F> Memoized<F>
where
    F: Fn(&[Value]) -> Value,
{
    /// Returns the cached result for `arguments`, computing it on a miss.
    ///
    /// Every result is cached, falsy ones included. If two threads miss on
    /// the same key at once, both compute and the first stored result wins.
    pub fn call(&self, arguments: &[Value]) -> Value {
        let key = cache_key(arguments);
        if let Some(cached) = self.cache.lock().get(&key) {
            return cached.clone();
        }
        let computed = (self.function)(arguments);
        self.cache.lock().entry(key).or_insert(computed).clone()
    }
}

impl<F> Memoized<F> {
    /// Returns the number of cached argument lists.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Forgets every cached result.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}

impl<F> fmt::Debug for Memoized<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("cached", &self.len())
            .finish_non_exhaustive()
    }
}

fn cache_key(arguments: &[Value]) -> String {
    let mut key = String::new();
    for (index, argument) in arguments.iter().enumerate() {
        if index > 0 {
            key.push(',');
        }
        if !argument.is_absent() {
            // Writing into a String cannot fail.
            let _ = write!(key, "{argument}");
        }
    }
    key
}

static_assertions::assert_impl_all!(Memoized<fn(&[Value]) -> Value>: Send, Sync);
