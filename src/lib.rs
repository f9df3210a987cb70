//! # mayak
//!
//! Algebraic error handling and validation for Rust.
//!
//! ## Overview
//!
//! - **Monads**: [`Maybe`](monads::Maybe), [`Result`](monads::Result) and
//!   [`Try`](monads::Try) model optional, two-channel and error-capturing
//!   computations. They interconvert and obey the functor and monad laws.
//! - **Do-notation**: [`do_!`] unwraps a `Maybe`/`Try` inside a
//!   [`for_maybe!`]/[`for_try!`] block and aborts the whole block on the
//!   first `None`/`Failure`.
//! - **Validation**: [`Rule`](validation::Rule) checks a value and reports
//!   every failure as a [`ValidationResult`](validation::ValidationResult);
//!   a [`Contract`](validation::Contract) runs keyed rules over the fields of
//!   a record and groups the errors by key.
//! - **Type Classes**: `Functor`, `Monad`, `Semigroup` and `Monoid` state the
//!   laws the types above satisfy.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, Semigroup, Monoid)
//! - `monads`: `Maybe`, `Result`, `Try` and do-notation
//! - `validation`: `ValidationResult`, `Rule`, `Contract` and the primitive rules
//! - `serde`: `Serialize`/`Deserialize` for the data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use mayak::prelude::*;
//! use mayak::validation::primitives::{greater_than_or_equal_to, not_empty};
//!
//! struct SignUp {
//!     email: String,
//!     age: u32,
//! }
//!
//! let contract = Contract::new()
//!     .validate(not_empty(), "email", |form: &SignUp| form.email.clone())
//!     .validate(greater_than_or_equal_to(18), "age", |form: &SignUp| form.age);
//!
//! let result = contract.check(&SignUp { email: String::new(), age: 15 });
//! let errors = &result.errors()[0];
//! assert_eq!(errors["email"], vec!["Value should not be empty"]);
//! assert_eq!(errors["age"], vec!["Value 15 should be greater than or equal to 18"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros. The two-channel
/// [`monads::Result`] is left out so it never shadows
/// [`std::result::Result`].
///
/// # Usage
///
/// ```rust
/// use mayak::prelude::*;
///
/// let doubled = for_maybe! {
///     let x = do_!(Maybe::Some(21));
///     x * 2
/// };
/// assert_eq!(doubled, Maybe::Some(42));
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "monads")]
    pub use crate::monads::{Bind, Exception, Maybe, Try};

    #[cfg(feature = "monads")]
    pub use crate::{do_, for_maybe, for_try};

    #[cfg(feature = "validation")]
    pub use crate::validation::{Contract, KeyedErrors, NonEmptyErrors, Rule, ValidationResult};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "monads")]
pub mod monads;

#[cfg(feature = "validation")]
pub mod validation;
