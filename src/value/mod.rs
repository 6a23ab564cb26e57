//! Dynamic values accepted by every collection operator.
//!
//! This module provides the [`Value`] type, a dynamically shaped value in the
//! JSON data model extended with an explicit `Undefined`, and the [`Map`]
//! type used for string-keyed records.
//!
//! Collection operators never inspect a `Value` directly; they classify it
//! once into a [`Container`](crate::collection::Container) and traverse that.
//!
//! # Examples
//!
//! ```rust
//! use gunderscore::value::Value;
//! use gunderscore::{array, object};
//!
//! let numbers = array![1, 2, 3];
//! assert_eq!(numbers.kind(), "array");
//!
//! let record = object! { "name" => "moe", "age" => 40 };
//! assert_eq!(record.lookup("age").as_deref(), Some(&Value::Number(40.0)));
//! assert!(record.lookup("missing").is_none());
//! ```

mod coerce;
mod truthy;

pub use coerce::format_number;
pub use truthy::Truthy;

use std::borrow::Cow;
use std::collections::BTreeMap;

/// A string-keyed record. Keys enumerate in ascending order.
pub type Map = BTreeMap<String, Value>;

/// A dynamically shaped value.
///
/// Equality is structural: two arrays are equal when their elements are
/// equal, and `Number(NaN)` is never equal to anything, itself included.
///
/// # Examples
///
/// ```rust
/// use gunderscore::value::Value;
///
/// assert_eq!(Value::from(3), Value::Number(3.0));
/// assert_eq!(Value::from("x"), Value::String("x".to_string()));
/// assert_eq!(Value::from(None::<i32>), Value::Undefined);
/// assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A missing value.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double precision number.
    Number(f64),
    /// A string, traversed character by character.
    String(String),
    /// An ordered array of values.
    Array(Vec<Self>),
    /// A string-keyed record.
    Object(Map),
}

impl Value {
    /// Returns the name of this value's kind, as used in error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gunderscore::value::Value;
    ///
    /// assert_eq!(Value::Null.kind(), "null");
    /// assert_eq!(Value::Bool(true).kind(), "boolean");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns `true` for `Null` and `Undefined`.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns the number if this is a `Number`.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements if this is an `Array`.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the record if this is an `Object`.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up an own field of this value.
    ///
    /// Objects are looked up by key. Arrays and strings are looked up by a
    /// decimal position, a string yielding a one-character string. Every
    /// other kind has no fields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gunderscore::array;
    /// use gunderscore::value::Value;
    ///
    /// let letters = Value::from("abc");
    /// assert_eq!(letters.lookup("1").as_deref(), Some(&Value::from("b")));
    ///
    /// let numbers = array![10, 20];
    /// assert_eq!(numbers.lookup("0").as_deref(), Some(&Value::from(10)));
    /// assert!(numbers.lookup("length").is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Cow<'_, Self>> {
        match self {
            Self::Object(map) => map.get(key).map(Cow::Borrowed),
            Self::Array(elements) => parse_position(key)
                .and_then(|position| elements.get(position))
                .map(Cow::Borrowed),
            Self::String(text) => parse_position(key)
                .and_then(|position| text.chars().nth(position))
                .map(|character| Cow::Owned(Self::String(character.to_string()))),
            _ => None,
        }
    }

    /// Returns the field at `key`, or `Undefined` when there is none.
    #[must_use]
    pub fn get(&self, key: &str) -> Self {
        self.lookup(key).map_or(Self::Undefined, Cow::into_owned)
    }
}

/// Reads `key` as a canonical decimal index: digits only, no leading zero.
fn parse_position(key: &str) -> Option<usize> {
    let canonical = !key.is_empty()
        && key.bytes().all(|byte| byte.is_ascii_digit())
        && (key.len() == 1 || !key.starts_with('0'));
    if !canonical {
        return None;
    }
    key.parse().ok()
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Self)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Self)>>(iter: I) -> Self {
        Self::Object(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }
}

// =============================================================================
// Construction Macros
// =============================================================================

/// Builds a [`Value::Array`] from a list of expressions convertible into
/// [`Value`].
///
/// # Examples
///
/// ```rust
/// use gunderscore::array;
/// use gunderscore::value::Value;
///
/// let mixed = array![1, "two", true];
/// assert_eq!(
///     mixed,
///     Value::Array(vec![Value::from(1), Value::from("two"), Value::Bool(true)])
/// );
/// assert_eq!(array![], Value::Array(Vec::new()));
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::value::Value::Array(::std::vec::Vec::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::value::Value::Array(::std::vec![$($crate::value::Value::from($element)),+])
    };
}

/// Builds a [`Value::Object`] from `key => value` pairs.
///
/// # Examples
///
/// ```rust
/// use gunderscore::object;
/// use gunderscore::value::Value;
///
/// let stooge = object! { "name" => "moe", "age" => 40 };
/// assert_eq!(stooge.get("name"), Value::from("moe"));
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::value::Value::Object($crate::value::Map::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::value::Map::new();
        $(
            map.insert(::std::string::String::from($key), $crate::value::Value::from($value));
        )+
        $crate::value::Value::Object(map)
    }};
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    #[allow(clippy::cast_possible_truncation)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::{SerializeMap, SerializeSeq};
        match self {
            Self::Undefined | Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Number(number) => {
                // Integral numbers inside the exactly representable range go out as integers.
                if number.fract() == 0.0 && number.abs() <= 9_007_199_254_740_992.0 {
                    serializer.serialize_i64(*number as i64)
                } else {
                    serializer.serialize_f64(*number)
                }
            }
            Self::String(text) => serializer.serialize_str(text),
            Self::Array(elements) => {
                let mut sequence = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    sequence.serialize_element(element)?;
                }
                sequence.end()
            }
            Self::Object(map) => {
                let mut entries = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    entries.serialize_entry(key, value)?;
                }
                entries.end()
            }
        }
    }
}

#[cfg(feature = "serde")]
struct ValueVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("any JSON-like value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
        Ok(Value::Bool(value))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Value::Number(value as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Value::Number(value as f64))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Value::Number(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Value::String(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
        Ok(Value::String(value))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(element) = access.next_element()? {
            elements.push(element);
        }
        Ok(Value::Array(elements))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = Map::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Map: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
