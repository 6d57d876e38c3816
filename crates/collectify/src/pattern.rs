//! Pattern objects for shape-based matching.
//!
//! A [`Pattern`] is a partial description of an element: a list of property
//! names, each with the value the element must hold under strict equality.

use crate::record::Record;
use crate::traits::Fields;
use crate::value::Scalar;

/// A partial property-to-value specification.
///
/// An element matches a pattern iff, for every entry of the pattern, the
/// element's property of that name is strictly equal to the entry's value.
/// The empty pattern matches every element. Entries keep insertion order;
/// inserting an existing name replaces its value in place.
///
/// # Example
///
/// ```
/// use collectify::{Pattern, Record};
///
/// let pattern = Pattern::new().with("a", 1);
///
/// let mut hit = Record::new();
/// hit.insert("a", 1);
/// hit.insert("b", 2);
/// assert!(pattern.matches(&hit));
///
/// let mut miss = Record::new();
/// miss.insert("a", 2);
/// assert!(!pattern.matches(&miss));
///
/// assert!(Pattern::new().matches(&miss));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    entries: Vec<(String, Scalar)>,
}

impl Pattern {
    /// Creates an empty pattern, which matches everything.
    pub fn new() -> Self {
        Pattern::default()
    }

    /// Adds an entry and returns the pattern.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds an entry, replacing the value of an existing entry of the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Scalar>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the expected value for a property name.
    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the pattern has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Evaluates this pattern against a candidate element.
    ///
    /// Stops at the first entry that does not match.
    pub fn matches<T: Fields + ?Sized>(&self, candidate: &T) -> bool {
        self.entries
            .iter()
            .all(|(name, expected)| candidate.field(name) == expected.as_value())
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for Pattern {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut pattern = Pattern::new();
        for (name, value) in iter {
            pattern.insert(name, value);
        }
        pattern
    }
}

/// A record used as a pattern requires every one of its fields.
impl From<Record> for Pattern {
    fn from(record: Record) -> Self {
        record.into_iter().collect()
    }
}
