//! Do-notation for [`Maybe`] and [`Try`].
//!
//! A do-block reads like straight-line code. Every `do_!(expr)` unwraps a
//! `Some`/`Success`, and the first `None`/`Failure` aborts the rest of the
//! block, whose result becomes that `None`/`Failure`. Statements after the
//! aborting `do_!` never run.
//!
//! The exit is an early `return` from the closure that forms the block:
//! [`Bind::bind`] yields either the payload or a [`Halt`], and `do_!`
//! returns the halt. Only [`for_maybe`] and [`for_try`] can turn a halt back
//! into a value, and a `Halt` cannot be built or inspected by user code, so
//! the exit cannot escape its block or be swallowed inside it.
//!
//! # Syntax
//!
//! ```text
//! for_maybe! {
//!     let x = do_!(maybe_expression);   // unwrap or abort the block
//!     statements;
//!     final_expression                  // wrapped as Some(final_expression)
//! }
//! ```
//!
//! `?` on `.bind()` is equivalent to `do_!`, which is convenient inside
//! method chains.
//!
//! # Examples
//!
//! ```rust
//! use mayak::monads::{Exception, Maybe, Try};
//! use mayak::{do_, for_maybe, for_try};
//!
//! let sum = for_maybe! {
//!     let a = do_!(Maybe::Some(1));
//!     let b = do_!(Maybe::Some(2));
//!     a + b
//! };
//! assert_eq!(sum, Maybe::Some(3));
//!
//! let mut log = Vec::new();
//! let aborted: Try<i32> = for_try! {
//!     let a = do_!(Try::Success(10));
//!     let b = do_!(Try::<i32>::failure(Exception::msg("x")));
//!     log.push("unreachable");
//!     a + b
//! };
//! assert_eq!(aborted, Try::Failure(Exception::msg("x")));
//! assert!(log.is_empty());
//! ```
//!
//! A block may also be written as an explicit closure, where `?` works on
//! [`Bind::bind`]:
//!
//! ```rust
//! use mayak::monads::{for_maybe, Bind, Maybe};
//!
//! let halved = for_maybe(|| {
//!     let value = Maybe::Some(8).filter(|x| x % 2 == 0).bind()?;
//!     Ok(value / 2)
//! });
//! assert_eq!(halved, Maybe::Some(4));
//! ```

use super::exception::Exception;
use super::maybe::Maybe;
use super::try_monad::Try;

// =============================================================================
// Halting Signal
// =============================================================================

/// The residual of a `None`: there is nothing to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Absent {
    _private: (),
}

/// The signal that aborts a do-block.
///
/// Only the block wrappers [`for_maybe`] and [`for_try`] can consume a
/// `Halt`; its fields are private.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Halt<R> {
    residual: R,
}

impl<R> Halt<R> {
    const fn new(residual: R) -> Self {
        Self { residual }
    }

    fn into_residual(self) -> R {
        self.residual
    }
}

// =============================================================================
// Bind
// =============================================================================

/// A value that `do_!` can unwrap.
pub trait Bind: Sized {
    /// The unwrapped payload.
    type Output;

    /// What the halt carries back to the block wrapper.
    type Residual;

    /// Yields the payload, or the halt that aborts the enclosing block.
    ///
    /// # Errors
    ///
    /// Returns a [`Halt`] for `None`/`Failure`.
    fn bind(self) -> Result<Self::Output, Halt<Self::Residual>>;
}

impl<T> Bind for Maybe<T> {
    type Output = T;
    type Residual = Absent;

    #[inline]
    fn bind(self) -> Result<T, Halt<Absent>> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Halt::new(Absent { _private: () })),
        }
    }
}

impl<T> Bind for Try<T> {
    type Output = T;
    type Residual = Exception;

    #[inline]
    fn bind(self) -> Result<T, Halt<Exception>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(Halt::new(error)),
        }
    }
}

// =============================================================================
// Block Wrappers
// =============================================================================

/// Runs a `Maybe` do-block once.
///
/// `Ok(value)` becomes `Some(value)` and a halt becomes `None`.
pub fn for_maybe<T, F>(block: F) -> Maybe<T>
where
    F: FnOnce() -> Result<T, Halt<Absent>>,
{
    match block() {
        Ok(value) => Maybe::Some(value),
        Err(_) => Maybe::None,
    }
}

/// Runs a `Try` do-block once.
///
/// `Ok(value)` becomes `Success(value)` and a halt becomes the `Failure`
/// that raised it.
pub fn for_try<T, F>(block: F) -> Try<T>
where
    F: FnOnce() -> Result<T, Halt<Exception>>,
{
    match block() {
        Ok(value) => Try::Success(value),
        Err(halt) => Try::Failure(halt.into_residual()),
    }
}

// =============================================================================
// Macros
// =============================================================================

/// Unwraps a [`Maybe`] or [`Try`], aborting the enclosing do-block on
/// `None`/`Failure`.
///
/// Usable only directly inside a [`for_maybe!`](crate::for_maybe) or
/// [`for_try!`](crate::for_try) block (or a closure passed to
/// [`for_maybe`]/[`for_try`]). Inside a nested closure it returns from that
/// closure, which fails to type-check unless the closure is itself a block.
///
/// # Examples
///
/// ```rust
/// use mayak::monads::Maybe;
/// use mayak::{do_, for_maybe};
///
/// let result = for_maybe! {
///     let x = do_!(Maybe::Some(5));
///     let _ = do_!(Maybe::guard(|| x > 10));
///     x * 2
/// };
/// assert_eq!(result, Maybe::None);
/// ```
#[macro_export]
macro_rules! do_ {
    ($bindable:expr) => {
        match $crate::monads::Bind::bind($bindable) {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(halt) => return ::core::result::Result::Err(halt),
        }
    };
}

/// A [`Maybe`] do-block; the final expression is wrapped as `Some`.
///
/// # Examples
///
/// ```rust
/// use mayak::monads::Maybe;
/// use mayak::{do_, for_maybe};
///
/// let first_even = |values: &[i32]| {
///     for_maybe! {
///         let value = do_!(Maybe::from(values.iter().copied().find(|x| x % 2 == 0)));
///         value * 10
///     }
/// };
/// assert_eq!(first_even(&[1, 4, 6]), Maybe::Some(40));
/// assert_eq!(first_even(&[1, 3]), Maybe::None);
/// ```
#[macro_export]
macro_rules! for_maybe {
    ($($body:tt)*) => {
        $crate::monads::for_maybe(|| ::core::result::Result::Ok({ $($body)* }))
    };
}

/// A [`Try`] do-block; the final expression is wrapped as `Success`.
///
/// # Examples
///
/// ```rust
/// use mayak::monads::Try;
/// use mayak::{do_, for_try};
///
/// let total = for_try! {
///     let a = do_!(Try::from_fn(|| "20".parse::<i32>()));
///     let b = do_!(Try::from_fn(|| "22".parse::<i32>()));
///     a + b
/// };
/// assert_eq!(total, Try::Success(42));
/// ```
#[macro_export]
macro_rules! for_try {
    ($($body:tt)*) => {
        $crate::monads::for_try(|| ::core::result::Result::Ok({ $($body)* }))
    };
}
