//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the payload of a container without changing its
//! shape: a `Maybe::None` stays `None`, a `Result::Failure` keeps its error.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use mayak::monads::Maybe;
//! use mayak::typeclass::Functor;
//!
//! let transformed: Maybe<String> = Maybe::Some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::Some("5".to_string()));
//!
//! let none: Maybe<String> = Maybe::<i32>::None.fmap(|n| n.to_string());
//! assert_eq!(none, Maybe::None);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// Implementors must never call `function` when there is no payload to map.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::Maybe;
    /// use mayak::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Some(5).fmap(|n| n * 2), Maybe::Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::Maybe;
    /// use mayak::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Some(5).replace("replaced"), Maybe::Some("replaced"));
    /// assert_eq!(Maybe::<i32>::None.replace("replaced"), Maybe::None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
