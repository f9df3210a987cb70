//! Semigroup type class - types with an associative binary operation.
//!
//! Error aggregation in the validation layer is a semigroup: two error lists
//! combine by concatenation, two keyed error maps combine by merging their
//! entries key by key.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use mayak::typeclass::Semigroup;
//!
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

use std::collections::BTreeMap;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines every element of a non-empty iterator, left to right.
    ///
    /// Returns `None` when the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::typeclass::Semigroup;
    ///
    /// let merged = Vec::reduce_all(vec![vec![1], vec![2, 3]]);
    /// assert_eq!(merged, Some(vec![1, 2, 3]));
    /// assert_eq!(Vec::<i32>::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

/// Merges two maps key by key; values present under the same key are combined.
impl<K: Ord, V: Semigroup> Semigroup for BTreeMap<K, V> {
    fn combine(mut self, other: Self) -> Self {
        for (key, value) in other {
            let merged = match self.remove(&key) {
                Some(existing) => existing.combine(value),
                None => value,
            };
            self.insert(key, merged);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn vec_combine_concatenates_in_order() {
        assert_eq!(vec!["a"].combine(vec!["b", "c"]), vec!["a", "b", "c"]);
    }

    #[rstest]
    fn vec_combine_keeps_duplicates() {
        assert_eq!(vec![1, 1].combine(vec![1]), vec![1, 1, 1]);
    }

    #[rstest]
    fn map_combine_merges_shared_keys() {
        let left = BTreeMap::from([("email", vec!["blank"]), ("age", vec!["too young"])]);
        let right = BTreeMap::from([("email", vec!["malformed"]), ("name", vec!["missing"])]);

        let merged = left.combine(right);

        assert_eq!(
            merged,
            BTreeMap::from([
                ("age", vec!["too young"]),
                ("email", vec!["blank", "malformed"]),
                ("name", vec!["missing"]),
            ])
        );
    }

    #[rstest]
    fn combine_ref_leaves_operands_untouched() {
        let left = vec![1];
        let right = vec![2];
        assert_eq!(left.combine_ref(&right), vec![1, 2]);
        assert_eq!(left, vec![1]);
    }
}
