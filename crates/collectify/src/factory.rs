//! Entry points that turn sequence-like input into a [`Collection`].

use std::any::Any;

use crate::collection::Collection;

/// Builds a collection from any sequence-like input, keeping its order.
///
/// ```
/// use collectify::collect;
///
/// let letters = collect("abc".chars());
/// assert_eq!(letters.to_vec(), vec!['a', 'b', 'c']);
///
/// let empty = collect(Vec::<i32>::new());
/// assert!(empty.is_empty());
/// ```
pub fn collect<I: IntoIterator>(input: I) -> Collection<I::Item> {
    input.into_iter().collect()
}

/// Returns `true` if `value` is a `Collection<T>`.
///
/// ```
/// use collectify::{collection, is_collection};
///
/// let numbers = collection![1, 2, 3];
/// assert!(is_collection::<i32>(&numbers));
/// assert!(!is_collection::<i32>(&vec![1, 2, 3]));
/// ```
pub fn is_collection<T: 'static>(value: &dyn Any) -> bool {
    value.is::<Collection<T>>()
}

/// Extension trait adding `.into_collection()` to every iterable.
pub trait IntoCollection: IntoIterator + Sized {
    /// Collects `self` into a [`Collection`].
    fn into_collection(self) -> Collection<Self::Item> {
        collect(self)
    }
}

impl<I: IntoIterator> IntoCollection for I {}
