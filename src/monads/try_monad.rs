//! Try type - a computation whose failure is a raised error.
//!
//! `Try<T>` is [`Result`](super::Result) with the failure channel fixed to an
//! [`Exception`]. Its distinguishing feature is construction from a
//! computation that may fail: [`Try::from_fn`] runs the computation and
//! captures any error it returns, [`Try::rescue`] captures only one kind of
//! error and lets the others propagate, and [`Try::catch_unwind`] also turns
//! panics into failures.
//!
//! # Examples
//!
//! ```rust
//! use mayak::monads::Try;
//! use std::num::ParseIntError;
//!
//! let parsed = Try::from_fn(|| "42".parse::<i32>());
//! assert_eq!(parsed.map(|x| x + 1), Try::Success(43));
//!
//! let recovered = Try::from_fn(|| "forty-two".parse::<i32>())
//!     .recover_on::<ParseIntError, _>(|_| 0);
//! assert_eq!(recovered, Try::Success(0));
//! ```

use std::fmt;
use std::panic::{self, UnwindSafe};

use super::exception::{Exception, Panic};
use super::maybe::Maybe;
use super::result::Result;

/// A value that is either a success of type `T` or a captured [`Exception`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation raised an error.
    Failure(Exception),
}

impl<T> Try<T> {
    // =========================================================================
    // Construction from Computations
    // =========================================================================

    /// Runs `computation` and captures any error it returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::Try;
    ///
    /// let failure = Try::from_fn(|| "x".parse::<u8>());
    /// assert!(failure.is_failure());
    /// ```
    pub fn from_fn<X, F>(computation: F) -> Self
    where
        F: FnOnce() -> std::result::Result<T, X>,
        X: Into<Exception>,
    {
        match computation() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }

    /// Runs `computation`, capturing only errors accepted by `is_declared`.
    ///
    /// An error that `is_declared` rejects is not converted: it is handed
    /// back to the caller as the `Err` of the outer result, to be propagated
    /// with `?`.
    ///
    /// # Errors
    ///
    /// Returns the raised [`Exception`] when `is_declared` rejects it.
    pub fn rescue_when<X, F, P>(
        is_declared: P,
        computation: F,
    ) -> std::result::Result<Self, Exception>
    where
        F: FnOnce() -> std::result::Result<T, X>,
        X: Into<Exception>,
        P: FnOnce(&Exception) -> bool,
    {
        match computation() {
            Ok(value) => Ok(Self::Success(value)),
            Err(error) => {
                let exception = error.into();
                if is_declared(&exception) {
                    Ok(Self::Failure(exception))
                } else {
                    Err(exception)
                }
            }
        }
    }

    /// Runs `computation`, capturing only errors of kind `K`.
    ///
    /// # Errors
    ///
    /// Returns the raised [`Exception`] when it is not a `K`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::{Exception, Try};
    /// use std::num::ParseIntError;
    ///
    /// let caught = Try::rescue::<ParseIntError, _, _>(|| "x".parse::<i32>());
    /// assert!(matches!(caught, Ok(Try::Failure(_))));
    ///
    /// let escaped = Try::<i32>::rescue::<ParseIntError, _, _>(|| Err(Exception::msg("io")));
    /// assert_eq!(escaped, Err(Exception::msg("io")));
    /// ```
    pub fn rescue<K, X, F>(computation: F) -> std::result::Result<Self, Exception>
    where
        K: fmt::Display + fmt::Debug + Send + Sync + 'static,
        F: FnOnce() -> std::result::Result<T, X>,
        X: Into<Exception>,
    {
        Self::rescue_when(Exception::is::<K>, computation)
    }

    /// Runs `computation`, turning a panic into a [`Panic`] failure.
    ///
    /// The panic hook still runs, so the panic message is reported as usual.
    pub fn catch_unwind<F>(computation: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(computation) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|message| (*message).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "non-string panic payload".to_string());
                Self::Failure(Exception::new(Panic { message }))
            }
        }
    }

    /// Wraps a value as `Success`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error as `Failure`.
    #[inline]
    pub fn failure<X>(error: X) -> Self
    where
        X: Into<Exception>,
    {
        Self::Failure(error.into())
    }

    /// Returns `Success(value)` if `predicate` holds, otherwise `Failure(error)`.
    pub fn check<X, P>(value: T, error: X, predicate: P) -> Self
    where
        X: Into<Exception>,
        P: FnOnce() -> bool,
    {
        if predicate() {
            Self::Success(value)
        } else {
            Self::Failure(error.into())
        }
    }

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
    pub fn map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Chains another computation that may fail.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Turns `Success(value)` into `Failure(error)` unless `predicate(&value)` holds.
    #[must_use]
    pub fn filter_or<X, P>(self, error: X, predicate: P) -> Self
    where
        X: Into<Exception>,
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error.into())
                }
            }
            Self::Failure(_) => self,
        }
    }

    /// Replaces the success value with a constant.
    #[inline]
    pub fn as_value<U>(self, new_value: U) -> Try<U> {
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

    /// Transforms the captured error; successes pass through.
    #[must_use]
    pub fn map_failure<X, F>(self, function: F) -> Self
    where
        F: FnOnce(Exception) -> X,
        X: Into<Exception>,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(error) => Self::Failure(function(error).into()),
        }
    }

    /// Chains a computation on the captured error; successes pass through.
    #[inline]
    #[must_use]
    pub fn flat_map_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(Exception) -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(error) => function(error),
        }
    }

    /// Replaces the captured error with another one.
    #[must_use]
    pub fn failure_as<X>(self, new_failure: X) -> Self
    where
        X: Into<Exception>,
    {
        self.map_failure(|_| new_failure)
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

    /// Returns the captured error, or `default`.
    #[inline]
    pub fn failure_or(self, default: Exception) -> Exception {
        match self {
            Self::Success(_) => default,
            Self::Failure(error) => error,
        }
    }

    /// Folds both channels into a common type.
    #[inline]
    pub fn either<R, F, S>(self, on_failure: F, on_success: S) -> R
    where
        F: FnOnce(Exception) -> R,
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

    /// Converts into a [`Result`], mapping the captured error through `function`.
    #[inline]
    pub fn to_result<E, F>(self, function: F) -> Result<E, T>
    where
        F: FnOnce(Exception) -> E,
    {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => Result::Failure(function(error)),
        }
    }

    /// Converts into a [`Maybe`], discarding the captured error.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Converts into a [`std::result::Result`].
    #[inline]
    pub fn into_std(self) -> std::result::Result<T, Exception> {
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
        F: FnOnce(Exception) -> T,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(error) => Self::Success(function(error)),
        }
    }

    /// Recovers only when the captured error is of kind `K`.
    ///
    /// Failures of any other kind are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::{Exception, Try};
    /// use std::num::ParseIntError;
    ///
    /// let other: Try<i32> = Try::failure(Exception::msg("disk full"));
    /// let untouched = other.recover_on::<ParseIntError, _>(|_| 0);
    /// assert_eq!(untouched, Try::Failure(Exception::msg("disk full")));
    /// ```
    #[must_use]
    pub fn recover_on<K, F>(self, function: F) -> Self
    where
        K: fmt::Display + fmt::Debug + Send + Sync + 'static,
        F: FnOnce(&K) -> T,
    {
        match self {
            Self::Failure(error) => match error.downcast_ref::<K>() {
                Some(matched) => Self::Success(function(matched)),
                None => Self::Failure(error),
            },
            Self::Success(_) => self,
        }
    }

    /// Replaces a failure with the result of another computation that may fail.
    #[inline]
    #[must_use]
    pub fn recover_with_try<F>(self, function: F) -> Self
    where
        F: FnOnce(Exception) -> Self,
    {
        self.flat_map_failure(function)
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Collects a sequence of tries into a try of all success values.
    ///
    /// Left-biased like [`Result::sequence`]: the first `Failure` wins.
    pub fn sequence<I>(tries: I) -> Try<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        tries.into_iter().collect()
    }
}

impl Try<()> {
    /// Returns `Success(())` if `predicate` holds, otherwise `Failure(error)`.
    pub fn guard<X, P>(error: X, predicate: P) -> Self
    where
        X: Into<Exception>,
        P: FnOnce() -> bool,
    {
        Self::check((), error, predicate)
    }
}

impl<T> Try<Try<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Try<T> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Std Interop
// =============================================================================

impl<T, X> From<std::result::Result<T, X>> for Try<T>
where
    X: Into<Exception>,
{
    #[inline]
    fn from(result: std::result::Result<T, X>) -> Self {
        Self::from_fn(|| result)
    }
}

impl<T> From<Try<T>> for Result<Exception, T> {
    #[inline]
    fn from(value: Try<T>) -> Self {
        value.to_result(|error| error)
    }
}

impl<T, V> FromIterator<Try<T>> for Try<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Try<T>>>(iterator: I) -> Self {
        match iterator
            .into_iter()
            .map(Try::into_std)
            .collect::<std::result::Result<V, Exception>>()
        {
            Ok(values) => Self::Success(values),
            Err(error) => Self::Failure(error),
        }
    }
}

// =============================================================================
// Type Class Instances
// =============================================================================

#[cfg(feature = "typeclass")]
mod instances {
    use super::Try;
    use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

    impl<T> TypeConstructor for Try<T> {
        type Inner = T;
        type WithType<B> = Try<B>;
    }

    impl<T> Functor for Try<T> {
        #[inline]
        fn fmap<B, F>(self, function: F) -> Try<B>
        where
            F: FnOnce(T) -> B,
        {
            self.map(function)
        }
    }

    impl<T> Applicative for Try<T> {
        #[inline]
        fn pure<B>(value: B) -> Try<B> {
            Try::Success(value)
        }
    }

    impl<T> Monad for Try<T> {
        #[inline]
        fn flat_map<B, F>(self, function: F) -> Try<B>
        where
            F: FnOnce(T) -> Try<B>,
        {
            Try::flat_map(self, function)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::num::ParseIntError;

    #[derive(Debug)]
    struct Unavailable;

    impl fmt::Display for Unavailable {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("service unavailable")
        }
    }

    impl std::error::Error for Unavailable {}

    #[rstest]
    fn from_fn_captures_error() {
        let failure = Try::from_fn(|| "nope".parse::<i32>());
        match failure {
            Try::Failure(error) => assert!(error.is::<ParseIntError>()),
            Try::Success(_) => panic!("expected a failure"),
        }
    }

    #[rstest]
    fn rescue_propagates_undeclared_kind() {
        let escaped = Try::<i32>::rescue::<ParseIntError, _, _>(|| Err(Unavailable));
        let error = escaped.expect_err("undeclared kind must propagate");
        assert!(error.is::<Unavailable>());
    }

    #[rstest]
    fn rescue_when_accepts_any_declared_kind() {
        let caught = Try::<i32>::rescue_when(
            |error| error.is::<ParseIntError>() || error.is::<Unavailable>(),
            || Err(Unavailable),
        );
        assert_eq!(caught, Ok(Try::Failure(Exception::new(Unavailable))));
    }

    #[rstest]
    fn catch_unwind_captures_panic_message() {
        let result: Try<i32> = Try::catch_unwind(|| panic!("kaboom"));
        let error = result.failure_or(Exception::msg("unexpected success"));
        assert!(error.is::<Panic>());
        assert_eq!(
            error.downcast_ref::<Panic>().map(|panic| panic.message.as_str()),
            Some("kaboom")
        );
    }

    #[rstest]
    fn recover_on_matches_kind_only() {
        let parse_failure = Try::from_fn(|| "nope".parse::<i32>());
        assert_eq!(
            parse_failure.recover_on::<ParseIntError, _>(|_| -1),
            Try::Success(-1)
        );

        let other: Try<i32> = Try::failure(Unavailable);
        assert_eq!(
            other.recover_on::<ParseIntError, _>(|_| -1),
            Try::Failure(Exception::new(Unavailable))
        );
    }

    #[rstest]
    fn check_and_guard() {
        assert_eq!(Try::check(1, Unavailable, || true), Try::Success(1));
        assert_eq!(
            Try::check(1, Unavailable, || false),
            Try::Failure(Exception::new(Unavailable))
        );
        assert_eq!(Try::guard(Unavailable, || true), Try::Success(()));
    }

    #[rstest]
    fn sequence_returns_first_failure() {
        let tries = vec![
            Try::Success(1),
            Try::failure(Exception::msg("first")),
            Try::failure(Exception::msg("second")),
        ];
        assert_eq!(
            Try::sequence(tries),
            Try::Failure(Exception::msg("first"))
        );
    }
}
