//! Sum types for computations that may not produce a value.
//!
//! - [`Maybe`]: a value that may be absent, with no reason attached
//! - [`Result`]: a success or a failure carrying a typed error
//! - [`Try`]: a success or a captured [`Exception`] raised by a computation
//!
//! All three are immutable, right-biased and short-circuiting: operations on
//! the success channel pass a `None`/`Failure` through untouched. With the
//! `typeclass` feature they implement [`Functor`] and [`Monad`].
//!
//! Chains that would otherwise nest `flat_map` calls can be written as
//! do-blocks, see [`for_maybe!`](crate::for_maybe) and
//! [`for_try!`](crate::for_try).
//!
//! `Result` shares its name with [`std::result::Result`], so it is not part
//! of the [prelude](crate::prelude). Import it explicitly or by path.
//!
//! [`Functor`]: crate::typeclass::Functor
//! [`Monad`]: crate::typeclass::Monad
//!
//! # Examples
//!
//! ```rust
//! use mayak::monads::{Maybe, Result, Try};
//!
//! let maybe: Maybe<i32> = Maybe::Some(2);
//! let result: Result<String, i32> = maybe.to_result("missing".to_string());
//! let attempt: Try<i32> = result.to_try(|message| mayak::monads::Exception::msg(message));
//!
//! assert_eq!(attempt.map(|x| x * 21), Try::Success(42));
//! ```

mod do_notation;
mod exception;
mod maybe;
mod result;
mod try_monad;

pub use do_notation::{Absent, Bind, Halt, for_maybe, for_try};
pub use exception::{Exception, Panic};
pub use maybe::Maybe;
pub use result::Result;
pub use try_monad::Try;

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
static_assertions::assert_impl_all!(Result<String, i32>: Send, Sync);
static_assertions::assert_impl_all!(Try<String>: Send, Sync);
