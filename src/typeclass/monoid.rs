//! Monoid type class - semigroups with an identity element.
//!
//! `ValidationResult::Valid` is the identity of error aggregation, which is
//! what lets a contract fold any number of rule results starting from
//! "nothing went wrong".
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Self::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(Self::empty()) == a
//! ```

use std::collections::BTreeMap;

use super::semigroup::Semigroup;

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::typeclass::Monoid;
    ///
    /// assert_eq!(Vec::combine_all(vec![vec![1], vec![2]]), vec![1, 2]);
    /// assert_eq!(Vec::<i32>::combine_all(Vec::new()), Vec::<i32>::new());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<K: Ord, V: Semigroup> Monoid for BTreeMap<K, V> {
    fn empty() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Vec::new(), true)]
    #[case(vec![1], false)]
    fn vec_is_empty_value(#[case] value: Vec<i32>, #[case] expected: bool) {
        assert_eq!(value.is_empty_value(), expected);
    }

    #[rstest]
    fn map_combine_all_merges_every_map() {
        let maps = vec![
            BTreeMap::from([("a", vec![1])]),
            BTreeMap::from([("a", vec![2])]),
            BTreeMap::from([("b", vec![3])]),
        ];
        assert_eq!(
            BTreeMap::combine_all(maps),
            BTreeMap::from([("a", vec![1, 2]), ("b", vec![3])])
        );
    }
}
