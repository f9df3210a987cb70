//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] uses a Generic Associated Type to name "the same
//! container applied to another type", which is what the [`Functor`] and
//! [`Monad`] signatures need.
//!
//! [`Functor`]: super::Functor
//! [`Monad`]: super::Monad
//!
//! # Example
//!
//! ```rust
//! use mayak::monads::Maybe;
//! use mayak::typeclass::TypeConstructor;
//!
//! fn swap_payload<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Maybe<String> = swap_payload(Maybe::Some(42));
//! assert_eq!(none, Maybe::None);
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`; for `Result<E, T>` it is the success type `T`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
