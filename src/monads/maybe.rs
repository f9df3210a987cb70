//! Maybe type - an optional value without a reason for its absence.
//!
//! `Maybe<T>` is either `Some(value)` or `None`. It is the right failure
//! channel when *why* a value is missing carries no information; use
//! [`Result`](super::Result) or [`Try`](super::Try) when it does.
//!
//! # Examples
//!
//! ```rust
//! use mayak::monads::Maybe;
//!
//! let port = Maybe::Some("8080")
//!     .map(str::parse::<u16>)
//!     .flat_map(|parsed| Maybe::from(parsed.ok()))
//!     .filter(|port| *port > 1024);
//! assert_eq!(port, Maybe::Some(8080));
//!
//! let missing: Maybe<u16> = Maybe::None;
//! assert_eq!(missing.value_or(80), 80);
//! ```

use super::exception::Exception;
use super::result::Result;
use super::try_monad::Try;

/// An optional value.
///
/// # Examples
///
/// ```rust
/// use mayak::monads::Maybe;
///
/// let name = Maybe::Some("ferris");
/// assert_eq!(name.either(|| "anonymous".to_string(), |n| n.to_uppercase()), "FERRIS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// No value.
    #[default]
    None,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the payload of `Some`.
    ///
    /// `function` is never called for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::Maybe;
    ///
    /// assert_eq!(Maybe::Some(21).map(|x| x * 2), Maybe::Some(42));
    /// assert_eq!(Maybe::<i32>::None.map(|x| x * 2), Maybe::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chains a computation that may itself produce no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::Maybe;
    ///
    /// let reciprocal = |x: f64| if x == 0.0 { Maybe::None } else { Maybe::Some(1.0 / x) };
    /// assert_eq!(Maybe::Some(4.0).flat_map(reciprocal), Maybe::Some(0.25));
    /// assert_eq!(Maybe::Some(0.0).flat_map(reciprocal), Maybe::None);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Turns `Some(value)` into `None` unless `predicate(&value)` holds.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Replaces the payload of `Some` with a constant.
    #[inline]
    pub fn as_value<U>(self, new_value: U) -> Maybe<U> {
        self.map(|_| new_value)
    }

    /// Runs a side effect on the payload of `Some` and returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let value = Maybe::Some(3).tee(|x| seen.push(*x));
    /// assert_eq!(value, Maybe::Some(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn tee<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the payload, or `default` for `None`.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the payload, or computes one for `None`.
    #[inline]
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    /// Folds both variants into a common type.
    #[inline]
    pub fn either<R, N, S>(self, on_none: N, on_some: S) -> R
    where
        N: FnOnce() -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Lifts into a [`Result`], using `failure` for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::{Maybe, Result};
    ///
    /// assert_eq!(Maybe::Some(1).to_result("missing"), Result::Success(1));
    /// assert_eq!(Maybe::<i32>::None.to_result("missing"), Result::Failure("missing"));
    /// ```
    #[inline]
    pub fn to_result<E>(self, failure: E) -> Result<E, T> {
        match self {
            Self::Some(value) => Result::Success(value),
            Self::None => Result::Failure(failure),
        }
    }

    /// Lifts into a [`Try`], using `error` for `None`.
    #[inline]
    pub fn to_try<X>(self, error: X) -> Try<T>
    where
        X: Into<Exception>,
    {
        match self {
            Self::Some(value) => Try::Success(value),
            Self::None => Try::Failure(error.into()),
        }
    }

    /// Wraps a possibly absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::Maybe;
    ///
    /// let lookup = [("a", 1)].into_iter().find(|(key, _)| *key == "b");
    /// assert!(Maybe::from_option(lookup).is_none());
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        option.into()
    }

    /// Converts into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Replaces `None` with `Some(value)`; `Some` is unaffected.
    #[inline]
    #[must_use]
    pub fn recover(self, value: T) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => Self::Some(value),
        }
    }

    /// Replaces `None` with `other`; `Some` is unaffected.
    #[inline]
    #[must_use]
    pub fn recover_with_maybe(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Collects a sequence of `Maybe`s into a `Maybe` of all payloads.
    ///
    /// Returns `Some` with the payloads in input order if every element is
    /// `Some`; otherwise `None`. Elements after the first `None` are not
    /// inspected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::Maybe;
    ///
    /// assert_eq!(Maybe::sequence([Maybe::Some(1), Maybe::Some(2)]), Maybe::Some(vec![1, 2]));
    /// assert_eq!(Maybe::sequence([Maybe::Some(1), Maybe::None]), Maybe::None);
    /// assert_eq!(Maybe::<i32>::sequence([]), Maybe::Some(vec![]));
    /// ```
    pub fn sequence<I>(maybes: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        maybes.into_iter().collect()
    }

    /// Returns `Some(value)` if `predicate` holds, otherwise `None`.
    #[inline]
    pub fn check<P>(value: T, predicate: P) -> Self
    where
        P: FnOnce() -> bool,
    {
        if predicate() {
            Self::Some(value)
        } else {
            Self::None
        }
    }
}

impl Maybe<()> {
    /// Returns `Some(())` if `predicate` holds, otherwise `None`.
    ///
    /// Mostly useful as a guard inside a [`for_maybe!`](crate::for_maybe) block.
    #[inline]
    pub fn guard<P>(predicate: P) -> Self
    where
        P: FnOnce() -> bool,
    {
        Self::check((), predicate)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Std Interop
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// `Some(v)` becomes `Maybe::Some(v)`, `None` becomes `Maybe::None`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T, V> FromIterator<Maybe<T>> for Maybe<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

// =============================================================================
// Type Class Instances
// =============================================================================

#[cfg(feature = "typeclass")]
mod instances {
    use super::Maybe;
    use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

    impl<T> TypeConstructor for Maybe<T> {
        type Inner = T;
        type WithType<B> = Maybe<B>;
    }

    impl<T> Functor for Maybe<T> {
        #[inline]
        fn fmap<B, F>(self, function: F) -> Maybe<B>
        where
            F: FnOnce(T) -> B,
        {
            self.map(function)
        }
    }

    impl<T> Applicative for Maybe<T> {
        #[inline]
        fn pure<B>(value: B) -> Maybe<B> {
            Maybe::Some(value)
        }
    }

    impl<T> Monad for Maybe<T> {
        #[inline]
        fn flat_map<B, F>(self, function: F) -> Maybe<B>
        where
            F: FnOnce(T) -> Maybe<B>,
        {
            Self::flat_map(self, function)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Maybe::Some(4), Maybe::Some(4))]
    #[case(Maybe::Some(3), Maybe::None)]
    #[case(Maybe::None, Maybe::None)]
    fn filter_keeps_only_matching_values(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(input.filter(|x| x % 2 == 0), expected);
    }

    #[rstest]
    fn map_on_none_does_not_call_function() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::None.map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert_eq!(result, Maybe::None);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn tee_on_none_skips_side_effect() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::None.tee(|_| calls.set(calls.get() + 1));
        assert_eq!(result, Maybe::None);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn recover_only_touches_none() {
        assert_eq!(Maybe::Some(1).recover(2), Maybe::Some(1));
        assert_eq!(Maybe::None.recover(2), Maybe::Some(2));
        assert_eq!(Maybe::None.recover_with_maybe(Maybe::Some(3)), Maybe::Some(3));
        assert_eq!(Maybe::Some(1).recover_with_maybe(Maybe::None), Maybe::Some(1));
    }

    #[rstest]
    fn to_try_uses_error_for_none() {
        let failure = Maybe::<i32>::None.to_try(Exception::msg("missing"));
        assert_eq!(failure, Try::Failure(Exception::msg("missing")));
        assert_eq!(Maybe::Some(1).to_try(Exception::msg("missing")), Try::Success(1));
    }

    #[rstest]
    fn check_and_guard() {
        assert_eq!(Maybe::check(5, || true), Maybe::Some(5));
        assert_eq!(Maybe::check(5, || false), Maybe::None);
        assert_eq!(Maybe::guard(|| true), Maybe::Some(()));
        assert_eq!(Maybe::guard(|| false), Maybe::None);
    }

    #[rstest]
    fn sequence_stops_at_first_none() {
        let inspected = Cell::new(0);
        let maybes = [Maybe::Some(1), Maybe::None, Maybe::Some(3)]
            .into_iter()
            .inspect(|_| inspected.set(inspected.get() + 1));
        assert_eq!(Maybe::sequence(maybes), Maybe::None);
        assert_eq!(inspected.get(), 2);
    }

    #[rstest]
    fn option_round_trip() {
        let maybe: Maybe<i32> = Some(7).into();
        assert_eq!(maybe, Maybe::Some(7));
        let option: Option<i32> = Maybe::<i32>::None.into();
        assert_eq!(option, None);
    }

    #[rstest]
    fn default_is_none() {
        assert_eq!(Maybe::<String>::default(), Maybe::None);
    }
}
