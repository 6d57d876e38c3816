//! Binary partition of a collection.

use crate::collection::Collection;

impl<T: Clone> Collection<T> {
    /// Splits the elements into those satisfying `predicate` and the rest.
    /// Transform.
    ///
    /// Returns a two-element collection `[pass, fail]`. The predicate runs
    /// exactly once per element, left to right, and each side keeps the
    /// receiver's relative order.
    ///
    /// ```
    /// use collectify::collection;
    ///
    /// let numbers = collection![1, 2, 3, 4, 5];
    /// let parts = numbers.partition(|n| n % 2 == 0);
    /// assert_eq!(parts[0].to_vec(), vec![2, 4]);
    /// assert_eq!(parts[1].to_vec(), vec![1, 3, 5]);
    /// ```
    pub fn partition(&self, predicate: impl FnMut(&T) -> bool) -> Collection<Collection<T>> {
        let (pass, fail) = self.split_by(predicate);
        Collection::from(vec![pass, fail])
    }

    /// Same split as [`partition`](Self::partition), returned as a tuple.
    pub fn split_by(
        &self,
        mut predicate: impl FnMut(&T) -> bool,
    ) -> (Collection<T>, Collection<T>) {
        let mut pass = Collection::new();
        let mut fail = Collection::new();
        for item in self.iter() {
            if predicate(item) {
                pass.push(item.clone());
            } else {
                fail.push(item.clone());
            }
        }
        (pass, fail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{collection, pattern, Record};

    #[test]
    fn partition_preserves_order_in_each_branch() {
        let numbers = collection![5, 2, 8, 1, 4, 7];
        let parts = numbers.partition(|n| *n > 4);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].to_vec(), vec![5, 8, 7]);
        assert_eq!(parts[1].to_vec(), vec![2, 1, 4]);
    }

    #[test]
    fn predicate_runs_once_per_element() {
        let numbers = collection![1, 2, 3];
        let mut calls = 0;
        let _ = numbers.partition(|_| {
            calls += 1;
            true
        });
        assert_eq!(calls, 3);
    }

    #[test]
    fn empty_collection_gives_two_empty_branches() {
        let empty: Collection<i32> = Collection::new();
        let parts = empty.partition(|_| true);
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|part| part.is_empty()));
    }

    #[test]
    fn branches_keep_collection_operations() {
        let records: Collection<Record> = vec![
            vec![("kind", "a"), ("name", "x")],
            vec![("kind", "b"), ("name", "y")],
            vec![("kind", "a"), ("name", "z")],
        ]
        .into_iter()
        .map(|pairs| pairs.into_iter().collect())
        .collect();

        let (a, rest) = records.split_by(|r| r.get("kind").and_then(|k| k.as_str()) == Some("a"));
        assert_eq!(a.len(), 2);
        assert_eq!(rest.filter_where(&pattern! { "name" => "y" }).len(), 1);
    }
}
