//! Type class traits for the algebra of this crate.
//!
//! This module provides the type classes (traits) that state the laws the
//! monads and the validation layer obey:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting plain values into a container
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Semigroup`]: Associative binary operations (error aggregation)
//! - [`Monoid`]: Semigroup with identity element (`Valid`)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types to emulate them, so
//! `Functor` and `Monad` can be written once for `Maybe`, `Result` and `Try`.
//!
//! # Examples
//!
//! ```rust
//! use mayak::typeclass::{Monoid, Semigroup};
//!
//! let errors = vec!["first"].combine(vec!["second"]);
//! assert_eq!(errors, vec!["first", "second"]);
//! assert!(Vec::<&str>::empty().is_empty());
//! ```

mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::{Applicative, Monad};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
