//! Collectify - chainable collections with pattern matching, set algebra and
//! tabular record conversion.
//!
//! [`Collection<T>`] wraps an ordered vector and adds a library of functional,
//! chainable operations on top of the slice API:
//!
//! - Shape-based matching: [`filter_where`](Collection::filter_where),
//!   [`find_where`](Collection::find_where) and friends keep or find the
//!   elements whose properties equal a [`Pattern`]
//! - Set algebra: [`union`](Collection::union),
//!   [`intersection`](Collection::intersection),
//!   [`difference`](Collection::difference), [`unique`](Collection::unique)
//! - Binary [`partition`](Collection::partition)
//! - Conversion of tables (header + rows, CSV, JSON) into [`Record`]s
//!
//! # Quick Start
//!
//! ```rust
//! use collectify::{pattern, records_from_table, row, Scalar};
//!
//! let table = vec![
//!     row!["name", "age", "team"],
//!     row!["joe", 30, "red"],
//!     row!["jane", 35, "blue"],
//!     row!["jim", 30, "blue"],
//! ];
//!
//! let people = records_from_table(table, 0).unwrap();
//!
//! let blue = people.filter_where(&pattern! { "team" => "blue" });
//! assert_eq!(blue.len(), 2);
//!
//! let jim = people.find_where(&pattern! { "age" => 30, "team" => "blue" });
//! assert_eq!(jim.and_then(|r| r.get("name")), Some(&Scalar::from("jim")));
//!
//! let parts = people.partition(|r| r.get("age") == Some(&Scalar::from(30)));
//! assert_eq!(parts[0].len(), 2);
//! assert_eq!(parts[1].len(), 1);
//! ```
//!
//! # Method Contracts
//!
//! Every method is either a **transform** (`&self` in, new `Collection` out,
//! receiver untouched) or **mutate-and-chain** (`&mut self` in, receiver
//! changed in place and returned as `&mut Self`):
//!
//! ```rust
//! use collectify::collection;
//!
//! let mut queue = collection![2, 3];
//! queue.unshift(1).push(4).shift().pop();
//! assert_eq!(queue.to_vec(), vec![2, 3]);
//! ```
//!
//! # Equality
//!
//! Matching and set algebra use strict equality: no coercion between strings,
//! numbers and booleans. For elements, that is the element type's `PartialEq`;
//! every set operation has a `*_by` variant taking a custom equality, such as
//! `Rc::ptr_eq` for identity.
//!
//! # Extending
//!
//! `Collection` is an ordinary public type: add operations by defining your
//! own trait and implementing it for `Collection<T>`, the same way
//! [`IntoCollection`] extends every iterable.

// Lets `#[derive(Fields)]` output, which names `::collectify`, compile inside
// this crate's own tests.
extern crate self as collectify;

mod collection;
mod error;
mod factory;
mod matching;
mod partition;
mod pattern;
mod predicate;
mod record;
mod set;
mod tabular;
mod traits;
mod value;

// Re-export public API
pub use collection::Collection;
pub use error::{CollectifyError, Result};
pub use factory::{collect, is_collection, IntoCollection};
pub use pattern::Pattern;
pub use predicate::{contains_strict, flip, matches, not, partial, property, Property};
pub use record::Record;
pub use tabular::{
    records_from_csv, records_from_header_and_rows, records_from_header_and_rows_with,
    records_from_json, records_from_table, records_from_table_with, ShortRowPolicy, TableOptions,
};
pub use traits::{AsValue, Fields, Truthy};
pub use value::{Number, Scalar, Value};

#[cfg(feature = "derive")]
pub use collectify_macros::Fields;

/// Creates a [`Collection`] from a list of elements, like `vec!`.
///
/// ```
/// use collectify::{collection, Collection};
///
/// let empty: Collection<u8> = collection![];
/// let items = collection![1, 2, 3];
/// assert!(empty.is_empty());
/// assert_eq!(items.len(), 3);
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Collection::from(vec![$($item),+])
    };
}

/// Creates a [`Pattern`] from `name => value` pairs.
///
/// ```
/// use collectify::pattern;
///
/// let p = pattern! { "name" => "joe", "age" => 30 };
/// assert_eq!(p.len(), 2);
/// assert!(pattern! {}.is_empty());
/// ```
#[macro_export]
macro_rules! pattern {
    () => {
        $crate::Pattern::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::Pattern::new()$(.with($name, $value))+
    };
}

/// Creates a table row (`Vec<Scalar>`) from mixed cell values.
///
/// ```
/// use collectify::{row, Scalar};
///
/// let cells = row!["joe", 30, true];
/// assert_eq!(cells[1], Scalar::from(30));
/// ```
#[macro_export]
macro_rules! row {
    () => {
        ::std::vec::Vec::<$crate::Scalar>::new()
    };
    ($($cell:expr),+ $(,)?) => {
        vec![$($crate::Scalar::from($cell)),+]
    };
}
