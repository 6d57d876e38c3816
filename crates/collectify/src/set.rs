//! Set algebra over collections.
//!
//! The receiver and every argument are treated as sets of values compared by
//! strict equality (`PartialEq`), or by the caller's equality in the `*_by`
//! variants. Results always keep the receiver's relative order. Membership is
//! a linear scan, so each operation is O(n·m): intended for small and medium
//! in-memory collections.

use tracing::debug;

use crate::collection::Collection;
use crate::predicate::contains_by;

impl<T: Clone> Collection<T> {
    /// Every distinct element of the receiver and of `others`, in first-seen
    /// order. Transform; the receiver is never modified.
    ///
    /// Duplicates within the receiver itself are removed as well.
    ///
    /// ```
    /// use collectify::collection;
    ///
    /// let a = collection![1, 2, 2, 3];
    /// let b = collection![3, 4];
    /// assert_eq!(a.union([&b]).to_vec(), vec![1, 2, 3, 4]);
    /// assert_eq!(a.len(), 4);
    /// ```
    pub fn union<I, S>(&self, others: I) -> Collection<T>
    where
        T: PartialEq,
        I: IntoIterator<Item = S>,
        S: AsRef<[T]>,
    {
        self.union_by(others, T::eq)
    }

    /// [`union`](Self::union) under a caller-supplied equality.
    pub fn union_by<I, S, F>(&self, others: I, eq: F) -> Collection<T>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[T]>,
        F: Fn(&T, &T) -> bool,
    {
        let others: Vec<S> = others.into_iter().collect();
        let mut result: Vec<T> = Vec::with_capacity(self.len());

        let mut sources: Vec<&[T]> = vec![self.as_slice()];
        for other in &others {
            sources.push(other.as_ref());
        }
        for source in sources {
            for item in source {
                if !contains_by(&result, item, &eq) {
                    result.push(item.clone());
                }
            }
        }

        debug!(
            receiver = self.len(),
            arguments = others.len(),
            result = result.len(),
            "union"
        );
        Collection::from(result)
    }

    /// The receiver's elements present in every one of `others`, each at most
    /// once, in the receiver's order. Transform.
    ///
    /// With no argument collections the condition holds vacuously and the
    /// receiver's elements are returned unchanged, duplicates included.
    pub fn intersection<I, S>(&self, others: I) -> Collection<T>
    where
        T: PartialEq,
        I: IntoIterator<Item = S>,
        S: AsRef<[T]>,
    {
        self.intersection_by(others, T::eq)
    }

    /// [`intersection`](Self::intersection) under a caller-supplied equality.
    pub fn intersection_by<I, S, F>(&self, others: I, eq: F) -> Collection<T>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[T]>,
        F: Fn(&T, &T) -> bool,
    {
        let others: Vec<S> = others.into_iter().collect();
        if others.is_empty() {
            debug!(receiver = self.len(), "intersection without arguments");
            return self.clone();
        }

        let mut result: Vec<T> = Vec::new();
        for item in self.iter() {
            let everywhere = others
                .iter()
                .all(|other| contains_by(other.as_ref(), item, &eq));
            if everywhere && !contains_by(&result, item, &eq) {
                result.push(item.clone());
            }
        }

        debug!(
            receiver = self.len(),
            arguments = others.len(),
            result = result.len(),
            "intersection"
        );
        Collection::from(result)
    }

    /// The receiver's elements absent from all of `others`, in the receiver's
    /// order. Transform.
    ///
    /// Duplicates in the receiver are kept.
    pub fn difference<I, S>(&self, others: I) -> Collection<T>
    where
        T: PartialEq,
        I: IntoIterator<Item = S>,
        S: AsRef<[T]>,
    {
        self.difference_by(others, T::eq)
    }

    /// [`difference`](Self::difference) under a caller-supplied equality.
    pub fn difference_by<I, S, F>(&self, others: I, eq: F) -> Collection<T>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[T]>,
        F: Fn(&T, &T) -> bool,
    {
        let others: Vec<S> = others.into_iter().collect();
        let result: Collection<T> = self.filter(|item| {
            !others
                .iter()
                .any(|other| contains_by(other.as_ref(), item, &eq))
        });

        debug!(
            receiver = self.len(),
            arguments = others.len(),
            result = result.len(),
            "difference"
        );
        result
    }

    /// The receiver's elements with duplicates removed, first occurrence
    /// winning. Transform.
    pub fn unique(&self) -> Collection<T>
    where
        T: PartialEq,
    {
        self.unique_by(T::eq)
    }

    /// Alias for [`unique`](Self::unique).
    pub fn uniq(&self) -> Collection<T>
    where
        T: PartialEq,
    {
        self.unique()
    }

    /// [`unique`](Self::unique) under a caller-supplied equality.
    pub fn unique_by<F>(&self, eq: F) -> Collection<T>
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut found: Vec<T> = Vec::new();
        for item in self.iter() {
            if !contains_by(&found, item, &eq) {
                found.push(item.clone());
            }
        }
        Collection::from(found)
    }
}
