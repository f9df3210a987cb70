//! Applicative and Monad type classes - sequencing dependent computations.
//!
//! `Applicative::pure` lifts a plain value into the success shape of a
//! container, and `Monad::flat_map` chains a computation that itself returns
//! the container. Failure shapes (`None`, `Failure`) short-circuit: the
//! continuation is never invoked.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use mayak::monads::Maybe;
//! use mayak::typeclass::{Applicative, Monad};
//!
//! fn half(value: i32) -> Maybe<i32> {
//!     if value % 2 == 0 { Maybe::Some(value / 2) } else { Maybe::None }
//! }
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(8);
//! assert_eq!(Monad::flat_map(lifted, half), Maybe::Some(4));
//! ```

use super::functor::Functor;

/// A functor that can lift a plain value into its success shape.
pub trait Applicative: Functor {
    /// Wraps a value in the success shape of this type constructor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::Maybe;
    /// use mayak::typeclass::Applicative;
    ///
    /// let value: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(value, Maybe::Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;
}

/// A type class for sequencing computations that depend on a previous result.
pub trait Monad: Applicative {
    /// Chains a computation that returns the same type constructor.
    ///
    /// Implementors must not call `function` when there is no value to pass.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the value of the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::Maybe;
    /// use mayak::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Some(1).then(Maybe::Some("next")), Maybe::Some("next"));
    /// assert_eq!(Maybe::<i32>::None.then(Maybe::Some("next")), Maybe::None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
