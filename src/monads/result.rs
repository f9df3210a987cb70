//! Result type - a computation with a typed failure reason.
//!
//! `Result<E, T>` is either `Success(value)` or `Failure(error)`. The failure
//! type comes first, as in the signature of the validation and decoding APIs
//! that return it. Exactly one channel is ever populated and every operation
//! transforms at most one of them.
//!
//! The type is deliberately not part of the prelude so it never shadows
//! [`std::result::Result`]; it converts to and from the standard type with
//! `From`/`Into`.
//!
//! # Examples
//!
//! ```rust
//! use mayak::monads::Result;
//!
//! fn parse_age(input: &str) -> Result<String, u8> {
//!     Result::from(input.parse::<u8>()).map_failure(|error| error.to_string())
//! }
//!
//! assert_eq!(parse_age("42").filter_or("too young".into(), |age| *age >= 18), Result::Success(42));
//! assert_eq!(parse_age("12").filter_or("too young".into(), |age| *age >= 18), Result::Failure("too young".into()));
//! ```

use super::exception::Exception;
use super::maybe::Maybe;
use super::try_monad::Try;

/// A value that is either a success of type `T` or a failure of type `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<E, T> {
    /// The success channel.
    Success(T),
    /// The failure channel.
    Failure(E),
}

impl<E, T> Result<E, T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Success Channel
    // =========================================================================

    /// Applies a function to the success value; failures pass through.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Result<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Result::Success(function(value)),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Chains a fallible computation on the success value.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Result<E, U>
    where
        F: FnOnce(T) -> Result<E, U>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Turns `Success(value)` into `Failure(error)` unless `predicate(&value)` holds.
    #[inline]
    #[must_use]
    pub fn filter_or<P>(self, error: E, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error)
                }
            }
            Self::Failure(_) => self,
        }
    }

    /// Replaces the success value with a constant.
    #[inline]
    pub fn as_value<U>(self, new_value: U) -> Result<E, U> {
        self.map(|_| new_value)
    }

    /// Runs a side effect on the success value and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn tee<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Failure Channel
    // =========================================================================

    /// Applies a function to the failure value; successes pass through.
    #[inline]
    pub fn map_failure<X, F>(self, function: F) -> Result<X, T>
    where
        F: FnOnce(E) -> X,
    {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => Result::Failure(function(error)),
        }
    }

    /// Chains a computation on the failure value; successes pass through.
    #[inline]
    pub fn flat_map_failure<X, F>(self, function: F) -> Result<X, T>
    where
        F: FnOnce(E) -> Result<X, T>,
    {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    /// Replaces the failure value with a constant.
    #[inline]
    pub fn failure_as<X>(self, new_failure: X) -> Result<X, T> {
        self.map_failure(|_| new_failure)
    }

    /// Swaps the channels: successes become failures and vice versa.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::Result;
    ///
    /// let flipped: Result<i32, &str> = Result::<&str, i32>::Success(1).flip();
    /// assert_eq!(flipped, Result::Failure(1));
    /// ```
    #[inline]
    pub fn flip(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Result::Failure(value),
            Self::Failure(error) => Result::Success(error),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value, or `default`.
    #[inline]
    pub fn success_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the failure value, or `default`.
    #[inline]
    pub fn failure_or(self, default: E) -> E {
        match self {
            Self::Success(_) => default,
            Self::Failure(error) => error,
        }
    }

    /// Folds both channels into a common type.
    #[inline]
    pub fn either<R, F, S>(self, on_failure: F, on_success: S) -> R
    where
        F: FnOnce(E) -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a [`Try`], turning the failure into an [`Exception`].
    #[inline]
    pub fn to_try<X, F>(self, function: F) -> Try<T>
    where
        F: FnOnce(E) -> X,
        X: Into<Exception>,
    {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(error) => Try::Failure(function(error).into()),
        }
    }

    /// Converts into a [`Maybe`], discarding the failure.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Converts into a [`std::result::Result`].
    #[inline]
    pub fn into_std(self) -> std::result::Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Replaces a failure with `Success(value)`.
    #[inline]
    #[must_use]
    pub fn recover(self, value: T) -> Self {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => Self::Success(value),
        }
    }

    /// Replaces a failure with a success computed from the error.
    #[inline]
    #[must_use]
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(error) => Self::Success(function(error)),
        }
    }

    /// Replaces a failure with the result of another fallible computation.
    #[inline]
    pub fn recover_with_result<X, F>(self, function: F) -> Result<X, T>
    where
        F: FnOnce(E) -> Result<X, T>,
    {
        self.flat_map_failure(function)
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Collects a sequence of results into a result of all success values.
    ///
    /// Left-biased: the first `Failure` found scanning left to right is
    /// returned and later elements are neither inspected nor aggregated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::Result;
    ///
    /// let all: Result<&str, Vec<i32>> = Result::sequence([Result::Success(1), Result::Success(2)]);
    /// assert_eq!(all, Result::Success(vec![1, 2]));
    ///
    /// let first: Result<&str, Vec<i32>> =
    ///     Result::sequence([Result::Failure("e1"), Result::Failure("e2"), Result::Success(3)]);
    /// assert_eq!(first, Result::Failure("e1"));
    /// ```
    pub fn sequence<I>(results: I) -> Result<E, Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        results.into_iter().collect()
    }
}

impl<E, T> Result<E, Result<E, T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Result<E, T> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Std Interop
// =============================================================================

impl<E, T> From<std::result::Result<T, E>> for Result<E, T> {
    /// `Ok(v)` becomes `Success(v)`, `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E, T> From<Result<E, T>> for std::result::Result<T, E> {
    #[inline]
    fn from(result: Result<E, T>) -> Self {
        result.into_std()
    }
}

impl<E, T, V> FromIterator<Result<E, T>> for Result<E, V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Result<E, T>>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .map(Result::into_std)
            .collect::<std::result::Result<V, E>>()
            .into()
    }
}

// =============================================================================
// Type Class Instances
// =============================================================================

#[cfg(feature = "typeclass")]
mod instances {
    use super::Result;
    use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

    impl<E, T> TypeConstructor for Result<E, T> {
        type Inner = T;
        type WithType<B> = Result<E, B>;
    }

    impl<E, T> Functor for Result<E, T> {
        #[inline]
        fn fmap<B, F>(self, function: F) -> Result<E, B>
        where
            F: FnOnce(T) -> B,
        {
            self.map(function)
        }
    }

    impl<E, T> Applicative for Result<E, T> {
        #[inline]
        fn pure<B>(value: B) -> Result<E, B> {
            Result::Success(value)
        }
    }

    impl<E, T> Monad for Result<E, T> {
        #[inline]
        fn flat_map<B, F>(self, function: F) -> Result<E, B>
        where
            F: FnOnce(T) -> Result<E, B>,
        {
            Result::flat_map(self, function)
        }
    }
}
