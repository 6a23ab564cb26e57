//! Container-shape classification.
//!
//! Every operator classifies its input exactly once into a [`Container`],
//! a borrowed view that is either a sequence (array elements or string
//! characters), a mapping (record values in key order), or absent. The rest
//! of the crate only ever sees the uniform position iterator a `Container`
//! exposes, never the raw [`Value`] shape.
//!
//! # Examples
//!
//! ```rust
//! use gunderscore::collection::{Container, Shape};
//! use gunderscore::value::Value;
//! use gunderscore::{array, object};
//!
//! let numbers = array![1, 2, 3];
//! let container = Container::classify("example", &numbers).unwrap();
//! assert_eq!(container.shape(), Shape::Sequence);
//! assert_eq!(container.len(), 3);
//!
//! let letters = Value::from("hey");
//! let container = Container::classify("example", &letters).unwrap();
//! assert_eq!(container.shape(), Shape::Sequence);
//! assert_eq!(container.element_at(1).as_deref(), Some(&Value::from("e")));
//!
//! let record = object! { "b" => 2, "a" => 1 };
//! let container = Container::classify("example", &record).unwrap();
//! let ranks: Vec<usize> = container.elements().map(|(rank, _)| rank).collect();
//! assert_eq!(ranks, vec![0, 1]);
//!
//! assert!(Container::classify("example", &Value::Number(1.0)).is_err());
//! ```

use std::borrow::Cow;
use std::collections::btree_map;
use std::fmt;
use std::iter::FusedIterator;

use super::error::CollectionError;
use crate::value::{Map, Value};

/// The shape tag of a classified container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `Null` or `Undefined`: no container at all.
    Absent,
    /// An ordered, integer-indexed container: an array or a string.
    Sequence,
    /// A string-keyed record.
    Mapping,
}

impl Shape {
    /// Returns the lowercase name of this shape.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Absent => "absent value",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A classified, borrowed view of a [`Value`].
///
/// Strings and arrays both have the [`Shape::Sequence`] shape; a string's
/// elements are its characters, each surfaced as a one-character
/// `Value::String`. Mapping elements are the record's values in key order.
#[derive(Debug, Clone, Copy)]
pub enum Container<'a> {
    /// No container.
    Absent,
    /// The elements of an array.
    Sequence(&'a [Value]),
    /// The characters of a string.
    Characters(&'a str),
    /// The entries of a record.
    Mapping(&'a Map),
}

impl<'a> Container<'a> {
    /// Classifies `value` on behalf of `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NotAContainer`] for booleans and numbers,
    /// which have no elements to traverse.
    pub fn classify(operation: &'static str, value: &'a Value) -> Result<Self, CollectionError> {
        match value {
            Value::Undefined | Value::Null => Ok(Self::Absent),
            Value::Array(elements) => Ok(Self::Sequence(elements)),
            Value::String(text) => Ok(Self::Characters(text)),
            Value::Object(map) => Ok(Self::Mapping(map)),
            Value::Bool(_) | Value::Number(_) => {
                Err(CollectionError::not_a_container(operation, value.kind()))
            }
        }
    }

    /// Returns the shape tag of this container.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Absent => Shape::Absent,
            Self::Sequence(_) | Self::Characters(_) => Shape::Sequence,
            Self::Mapping(_) => Shape::Mapping,
        }
    }

    /// Returns the number of traversable positions.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Sequence(elements) => elements.len(),
            Self::Characters(text) => text.chars().count(),
            Self::Mapping(map) => map.len(),
        }
    }

    /// Returns `true` if there is nothing to traverse.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Sequence(elements) => elements.is_empty(),
            Self::Characters(text) => text.is_empty(),
            Self::Mapping(map) => map.is_empty(),
        }
    }

    /// Returns the element at traversal position `position`.
    ///
    /// For a mapping this is the value of the `position`-th key.
    #[must_use]
    pub fn element_at(&self, position: usize) -> Option<Cow<'a, Value>> {
        match *self {
            Self::Absent => None,
            Self::Sequence(elements) => elements.get(position).map(Cow::Borrowed),
            Self::Characters(text) => text.chars().nth(position).map(character_value),
            Self::Mapping(map) => map.values().nth(position).map(Cow::Borrowed),
        }
    }

    /// Returns an iterator over `(position, element)` pairs in traversal order.
    #[must_use]
    pub fn elements(&self) -> Elements<'a> {
        let source = match *self {
            Self::Absent => ElementSource::Empty,
            Self::Sequence(elements) => ElementSource::Sequence(elements.iter()),
            Self::Characters(text) => ElementSource::Characters(text.chars()),
            Self::Mapping(map) => ElementSource::Mapping(map.values()),
        };
        Elements {
            source,
            position: 0,
        }
    }

    /// Returns an iterator over the keys of each position, in traversal order.
    ///
    /// Sequences yield [`Key::Index`]; mappings yield [`Key::Name`].
    #[must_use]
    pub fn keys(&self) -> Keys<'a> {
        let source = match *self {
            Self::Absent => KeySource::Indices(0..0),
            Self::Sequence(elements) => KeySource::Indices(0..elements.len()),
            Self::Characters(text) => KeySource::Indices(0..text.chars().count()),
            Self::Mapping(map) => KeySource::Names(map.keys()),
        };
        Keys { source }
    }
}

fn character_value<'a>(character: char) -> Cow<'a, Value> {
    Cow::Owned(Value::String(character.to_string()))
}

/// The key of one traversal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// A position in a sequence.
    Index(usize),
    /// A key of a mapping.
    Name(&'a str),
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => formatter.write_str(name),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

#[derive(Debug, Clone)]
enum ElementSource<'a> {
    Empty,
    Sequence(std::slice::Iter<'a, Value>),
    Characters(std::str::Chars<'a>),
    Mapping(btree_map::Values<'a, String, Value>),
}

/// Iterator over the elements of a [`Container`], paired with their positions.
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    source: ElementSource<'a>,
    position: usize,
}

impl<'a> Iterator for Elements<'a> {
    type Item = (usize, Cow<'a, Value>);

    fn next(&mut self) -> Option<Self::Item> {
        let element = match &mut self.source {
            ElementSource::Empty => None,
            ElementSource::Sequence(iterator) => iterator.next().map(Cow::Borrowed),
            ElementSource::Characters(iterator) => iterator.next().map(character_value),
            ElementSource::Mapping(iterator) => iterator.next().map(Cow::Borrowed),
        }?;
        let position = self.position;
        self.position += 1;
        Some((position, element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            ElementSource::Empty => (0, Some(0)),
            ElementSource::Sequence(iterator) => iterator.size_hint(),
            ElementSource::Characters(iterator) => iterator.size_hint(),
            ElementSource::Mapping(iterator) => iterator.size_hint(),
        }
    }
}

impl FusedIterator for Elements<'_> {}

#[derive(Debug, Clone)]
enum KeySource<'a> {
    Indices(std::ops::Range<usize>),
    Names(btree_map::Keys<'a, String, Value>),
}

/// Iterator over the [`Key`]s of a [`Container`].
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    source: KeySource<'a>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = Key<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.source {
            KeySource::Indices(range) => range.next().map(Key::Index),
            KeySource::Names(iterator) => iterator.next().map(|name| Key::Name(name)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            KeySource::Indices(range) => range.size_hint(),
            KeySource::Names(iterator) => iterator.size_hint(),
        }
    }
}

impl ExactSizeIterator for Keys<'_> {}

impl FusedIterator for Keys<'_> {}

static_assertions::assert_impl_all!(Container<'static>: Copy, Send, Sync);
