//! The [`Collection`] type and its chaining contract.
//!
//! Every method is one of two kinds:
//!
//! - **Transform**: takes `&self`, builds and returns a new `Collection`,
//!   leaving the receiver untouched.
//! - **Mutate-and-chain**: takes `&mut self`, changes the receiver in place and
//!   returns `&mut Self`, so calls can be strung together.
//!
//! Each method's doc comment names its kind. Read-only lookups (`find`,
//! `first`, `min`, ...) return borrowed elements and are neither.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::predicate::{contains_strict, not};
use crate::traits::Truthy;

/// An ordered, indexable, growable sequence with chainable operations.
///
/// `Collection<T>` owns a private `Vec<T>` and dereferences to `[T]`, so the
/// whole slice API (indexing, `len`, `iter`, `contains`, `sort`, ...) is
/// available. Insertion order is significant and preserved by every
/// non-reordering operation. Nested collections are ordinary elements; nothing
/// is flattened.
///
/// Transforms clone the elements they keep. Wrap elements in `Rc`/`Arc` to
/// share them between collections instead of copying.
///
/// # Example
///
/// ```
/// use collectify::{collection, Collection};
///
/// let mut numbers: Collection<i32> = collection![3, 1, 2];
/// numbers.push(4).unshift(0).pop();
/// assert_eq!(numbers.to_vec(), vec![0, 3, 1, 2]);
///
/// let evens = numbers.select(|n| n % 2 == 0);
/// assert_eq!(evens.to_vec(), vec![0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Collection { items: Vec::new() }
    }

    /// Creates an empty collection with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Collection {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Borrows the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwraps into the backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    // ========================================================================
    // Mutate-and-chain
    // ========================================================================

    /// Appends an element at the end. Mutate-and-chain.
    pub fn push(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Appends every element of `items` at the end, in order. Mutate-and-chain.
    pub fn append(&mut self, items: impl IntoIterator<Item = T>) -> &mut Self {
        self.items.extend(items);
        self
    }

    /// Removes the last element, if any. Mutate-and-chain.
    ///
    /// The removed element is dropped; use [`take_last`](Self::take_last) to
    /// keep it.
    pub fn pop(&mut self) -> &mut Self {
        self.items.pop();
        self
    }

    /// Removes the first element, if any. Mutate-and-chain.
    ///
    /// The removed element is dropped; use [`take_first`](Self::take_first)
    /// to keep it.
    pub fn shift(&mut self) -> &mut Self {
        if !self.items.is_empty() {
            self.items.remove(0);
        }
        self
    }

    /// Inserts an element at the front. Mutate-and-chain.
    pub fn unshift(&mut self, item: T) -> &mut Self {
        self.items.insert(0, item);
        self
    }

    /// Removes and returns the last element.
    pub fn take_last(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes and returns the first element.
    pub fn take_first(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Calls `f` with the receiver and returns it unchanged.
    ///
    /// Useful for logging or assertions in the middle of a chain.
    pub fn tap(&mut self, f: impl FnOnce(&Self)) -> &mut Self {
        f(self);
        self
    }

    /// Calls `f` on every element in place. Mutate-and-chain.
    pub fn invoke(&mut self, f: impl FnMut(&mut T)) -> &mut Self {
        self.items.iter_mut().for_each(f);
        self
    }

    // ========================================================================
    // Iteration and lookup
    // ========================================================================

    /// Calls `f` on every element, first to last.
    pub fn each(&self, f: impl FnMut(&T)) {
        self.items.iter().for_each(f);
    }

    /// Calls `f` on every element, last to first.
    pub fn each_right(&self, f: impl FnMut(&T)) {
        self.items.iter().rev().for_each(f);
    }

    /// Maps every element into a new collection. Transform.
    ///
    /// The closure may return values borrowed from the elements.
    pub fn map<'a, U, F>(&'a self, f: F) -> Collection<U>
    where
        F: FnMut(&'a T) -> U,
    {
        self.items.iter().map(f).collect()
    }

    /// Returns the first element satisfying `predicate`, stopping there.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| predicate(item))
    }

    /// Returns the first element not satisfying `predicate`.
    pub fn find_not(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.find(not(predicate))
    }

    /// Returns the first element, or `None` when empty.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Alias for [`first`](Self::first).
    pub fn head(&self) -> Option<&T> {
        self.first()
    }

    /// Returns the last element, or `None` when empty.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the smallest element; incomparable elements (`NaN`) are skipped.
    pub fn min(&self) -> Option<&T>
    where
        T: PartialOrd,
    {
        self.extreme(|candidate, best| candidate < best)
    }

    /// Returns the largest element; incomparable elements (`NaN`) are skipped.
    pub fn max(&self) -> Option<&T>
    where
        T: PartialOrd,
    {
        self.extreme(|candidate, best| candidate > best)
    }

    fn extreme(&self, better: impl Fn(&T, &T) -> bool) -> Option<&T>
    where
        T: PartialOrd,
    {
        let mut comparable = self
            .items
            .iter()
            .filter(|item| T::partial_cmp(item, item).is_some());
        let mut best = comparable.next()?;
        for item in comparable {
            if better(item, best) {
                best = item;
            }
        }
        Some(best)
    }
}

impl<T: Clone> Collection<T> {
    /// Returns a plain vector copy of the elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Keeps the elements satisfying `predicate`. Transform.
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Collection<T> {
        self.items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Alias for [`filter`](Self::filter).
    pub fn select(&self, predicate: impl FnMut(&T) -> bool) -> Collection<T> {
        self.filter(predicate)
    }

    /// Drops the elements satisfying `predicate`. Transform.
    pub fn reject(&self, predicate: impl Fn(&T) -> bool) -> Collection<T> {
        self.filter(not(predicate))
    }

    /// Drops every element strictly equal to one of `values`. Transform.
    pub fn without(&self, values: &[T]) -> Collection<T>
    where
        T: PartialEq,
    {
        self.reject(|item| contains_strict(values, item))
    }

    /// Alias for [`without`](Self::without).
    pub fn remove_all(&self, values: &[T]) -> Collection<T>
    where
        T: PartialEq,
    {
        self.without(values)
    }

    /// Keeps the truthy elements under the [`Truthy`] rule. Transform.
    pub fn compact(&self) -> Collection<T>
    where
        T: Truthy,
    {
        self.filter(|item| item.is_truthy())
    }

    /// Keeps the elements a caller-supplied truthiness rule accepts. Transform.
    pub fn compact_by(&self, is_truthy: impl FnMut(&T) -> bool) -> Collection<T> {
        self.filter(is_truthy)
    }

    // ========================================================================
    // Slicing
    // ========================================================================

    /// Returns the first `n` elements (all of them if fewer). Transform.
    pub fn first_n(&self, n: usize) -> Collection<T> {
        self.slice(0, n.min(self.items.len()))
    }

    /// Alias for [`first_n`](Self::first_n).
    pub fn take(&self, n: usize) -> Collection<T> {
        self.first_n(n)
    }

    /// Returns the last `n` elements (all of them if fewer). Transform.
    pub fn last_n(&self, n: usize) -> Collection<T> {
        let len = self.items.len();
        self.slice(len.saturating_sub(n), len)
    }

    /// Everything but the last element. Transform.
    pub fn initial(&self) -> Collection<T> {
        self.initial_n(1)
    }

    /// Everything but the last `n` elements. Transform.
    pub fn initial_n(&self, n: usize) -> Collection<T> {
        self.slice(0, self.items.len().saturating_sub(n))
    }

    /// Everything but the first element. Transform.
    pub fn rest(&self) -> Collection<T> {
        self.rest_n(1)
    }

    /// Everything but the first `n` elements. Transform.
    pub fn rest_n(&self, n: usize) -> Collection<T> {
        let len = self.items.len();
        self.slice(n.min(len), len)
    }

    /// Alias for [`rest`](Self::rest).
    pub fn tail(&self) -> Collection<T> {
        self.rest()
    }

    /// Alias for [`rest_n`](Self::rest_n).
    pub fn drop_n(&self, n: usize) -> Collection<T> {
        self.rest_n(n)
    }

    fn slice(&self, start: usize, end: usize) -> Collection<T> {
        Collection::from(self.items[start..end].to_vec())
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection::new()
    }
}

impl<T> Deref for Collection<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> DerefMut for Collection<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T> AsRef<[T]> for Collection<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Collection { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(items: [T; N]) -> Self {
        Collection {
            items: Vec::from(items),
        }
    }
}

impl<T: Clone> From<&[T]> for Collection<T> {
    fn from(items: &[T]) -> Self {
        Collection {
            items: items.to_vec(),
        }
    }
}

impl<T> From<Collection<T>> for Vec<T> {
    fn from(collection: Collection<T>) -> Self {
        collection.items
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Collection {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Collection<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

/// Collections behave like arrays: always truthy, even when empty.
impl<T> Truthy for Collection<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}
