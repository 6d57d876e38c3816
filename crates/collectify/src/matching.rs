//! Shape-based filtering and property projection.
//!
//! These operations are available on any `Collection<T>` whose elements
//! implement [`Fields`]: they specialise `filter`/`find`/`map` to "matches this
//! pattern" and "read this property".

use crate::collection::Collection;
use crate::pattern::Pattern;
use crate::predicate::{matches, not, partial, property};
use crate::record::Record;
use crate::traits::Fields;
use crate::value::{Number, Value};

impl<T: Fields> Collection<T> {
    /// Returns the first element matching `pattern`, or `None`.
    ///
    /// Scans left to right and stops at the first hit.
    pub fn find_where(&self, pattern: &Pattern) -> Option<&T> {
        self.find(partial(matches::<T>, pattern.clone()))
    }

    /// Returns the first element not matching `pattern`, or `None`.
    pub fn find_where_not(&self, pattern: &Pattern) -> Option<&T> {
        self.find(not(partial(matches::<T>, pattern.clone())))
    }

    /// Maps every element to its value for the named property. Transform.
    ///
    /// Elements without the property yield [`Value::None`].
    pub fn pluck(&self, name: &str) -> Collection<Value<'_>> {
        let accessor = property(name);
        self.map(|item| accessor.get(item))
    }

    /// Maps every element to a [`Record`] of the given properties, in the
    /// order given. Transform.
    ///
    /// Properties the element lacks, and compound properties with no scalar
    /// form, are left out of its record.
    pub fn pick(&self, names: &[&str]) -> Collection<Record> {
        self.map(|item| {
            let mut record = Record::with_capacity(names.len());
            for name in names {
                if let Some(value) = item.field(name).to_scalar() {
                    record.insert(*name, value);
                }
            }
            record
        })
    }

    /// Smallest numeric value of the named property; non-numbers are skipped.
    pub fn min_of(&self, name: &str) -> Option<Number> {
        self.numbers_of(name).reduce(smaller)
    }

    /// Largest numeric value of the named property; non-numbers are skipped.
    pub fn max_of(&self, name: &str) -> Option<Number> {
        self.numbers_of(name).reduce(larger)
    }

    fn numbers_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Number> + 'a {
        self.iter()
            .filter_map(move |item| item.field(name).as_number())
            .filter(|n| n.compare(*n).is_some())
    }
}

impl<T: Fields + Clone> Collection<T> {
    /// Keeps every element matching `pattern`. Transform.
    ///
    /// The empty pattern keeps everything.
    ///
    /// ```
    /// use collectify::{pattern, records_from_header_and_rows, row};
    ///
    /// let people = records_from_header_and_rows(
    ///     ["name", "age"],
    ///     vec![row!["joe", 30], row!["jane", 35], row!["jim", 30]],
    /// );
    /// let thirty = people.filter_where(&pattern! { "age" => 30 });
    /// assert_eq!(thirty.len(), 2);
    /// ```
    pub fn filter_where(&self, pattern: &Pattern) -> Collection<T> {
        self.filter(partial(matches::<T>, pattern.clone()))
    }

    /// Keeps every element not matching `pattern`. Transform.
    pub fn filter_where_not(&self, pattern: &Pattern) -> Collection<T> {
        self.filter(not(partial(matches::<T>, pattern.clone())))
    }
}

fn smaller(best: Number, candidate: Number) -> Number {
    if candidate < best {
        candidate
    } else {
        best
    }
}

fn larger(best: Number, candidate: Number) -> Number {
    if candidate > best {
        candidate
    } else {
        best
    }
}
