//! Opaque raised-error values carried by the failure channel of [`Try`].
//!
//! An [`Exception`] wraps any error in an [`anyhow::Error`] and remembers the
//! type name of the value that was raised (its *kind*), so kind-based recovery
//! such as [`Try::recover_on`] can test it at runtime.
//!
//! [`Try`]: super::Try
//! [`Try::recover_on`]: super::Try::recover_on
//!
//! # Examples
//!
//! ```rust
//! use mayak::monads::Exception;
//!
//! let parse_error = "abc".parse::<i32>().unwrap_err();
//! let exception = Exception::from(parse_error);
//!
//! assert!(exception.is::<std::num::ParseIntError>());
//! assert!(!exception.is::<std::fmt::Error>());
//! assert_eq!(exception.to_string(), "invalid digit found in string");
//! ```

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

/// An opaque raised error: a message plus a runtime type identity.
///
/// Cloning is cheap, the underlying error is shared. Two exceptions are equal
/// when they have the same kind and render the same message.
///
/// `Exception` intentionally does not implement [`std::error::Error`], which
/// lets every error type convert into it with `?` or `into()`.
#[derive(Clone)]
pub struct Exception {
    kind: &'static str,
    error: Arc<anyhow::Error>,
}

impl Exception {
    /// Wraps a concrete error, recording its type as the kind.
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            kind: type_name::<E>(),
            error: Arc::new(anyhow::Error::new(error)),
        }
    }

    /// Creates an exception from a bare message.
    ///
    /// The kind is the message's own type, so `Exception::msg("x")` and
    /// `Exception::msg(String::from("x"))` are different kinds and compare
    /// unequal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::monads::Exception;
    ///
    /// let exception = Exception::msg("boom");
    /// assert_eq!(exception.to_string(), "boom");
    /// assert!(exception.is::<&str>());
    /// ```
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self {
            kind: type_name::<M>(),
            error: Arc::new(anyhow::Error::msg(message)),
        }
    }

    /// Adopts an [`anyhow::Error`] whose concrete type is no longer known.
    ///
    /// The kind is reported as `anyhow::Error`, but [`Exception::is`] still
    /// sees through to the original error.
    pub fn from_anyhow(error: anyhow::Error) -> Self {
        Self {
            kind: type_name::<anyhow::Error>(),
            error: Arc::new(error),
        }
    }

    /// The type name of the raised value.
    #[inline]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns `true` if the raised value is a `K`.
    #[inline]
    pub fn is<K>(&self) -> bool
    where
        K: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.error.is::<K>()
    }

    /// Returns the raised value as a `K`, if that is its type.
    #[inline]
    pub fn downcast_ref<K>(&self) -> Option<&K>
    where
        K: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.error.downcast_ref::<K>()
    }

    /// The underlying error.
    #[inline]
    pub fn as_anyhow(&self) -> &anyhow::Error {
        &self.error
    }
}

impl<E> From<E> for Exception
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.error)
    }
}

impl fmt::Debug for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Exception")
            .field("kind", &self.kind)
            .field("message", &self.error.to_string())
            .finish()
    }
}

impl PartialEq for Exception {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.error.to_string() == other.error.to_string()
    }
}

impl Eq for Exception {}

/// The error captured when a computation run by [`Try::catch_unwind`] panics.
///
/// [`Try::catch_unwind`]: super::Try::catch_unwind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panic {
    /// The panic message, or a placeholder when the payload was not a string.
    pub message: String,
}

impl fmt::Display for Panic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "panicked: {}", self.message)
    }
}

impl std::error::Error for Panic {}

static_assertions::assert_impl_all!(Exception: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq)]
    struct Timeout;

    impl fmt::Display for Timeout {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("timed out")
        }
    }

    impl std::error::Error for Timeout {}

    #[rstest]
    fn kind_is_the_raised_type() {
        let exception = Exception::new(Timeout);
        assert!(exception.kind().ends_with("Timeout"));
        assert!(exception.is::<Timeout>());
        assert_eq!(exception.downcast_ref::<Timeout>(), Some(&Timeout));
    }

    #[rstest]
    fn equality_compares_kind_and_message() {
        assert_eq!(Exception::new(Timeout), Exception::new(Timeout));
        assert_eq!(Exception::msg("x"), Exception::msg("x"));
        assert_ne!(Exception::msg("x"), Exception::msg("y"));
        assert_ne!(Exception::msg("timed out"), Exception::new(Timeout));
    }

    #[rstest]
    fn message_kind_follows_the_message_type() {
        let borrowed = Exception::msg("x");
        let owned = Exception::msg(String::from("x"));

        assert!(borrowed.is::<&str>());
        assert!(owned.is::<String>());
        assert_eq!(borrowed.to_string(), owned.to_string());
        assert_ne!(borrowed, owned);
    }

    #[rstest]
    fn from_anyhow_still_downcasts() {
        let exception = Exception::from_anyhow(anyhow::Error::new(Timeout));
        assert_eq!(exception.kind(), type_name::<anyhow::Error>());
        assert!(exception.is::<Timeout>());
    }

    #[rstest]
    fn debug_shows_kind_and_message() {
        let debug = format!("{:?}", Exception::msg("boom"));
        assert!(debug.contains("Exception"));
        assert!(debug.contains("boom"));
    }

    #[rstest]
    fn panic_display() {
        let panic = Panic {
            message: "index out of bounds".to_string(),
        };
        assert_eq!(panic.to_string(), "panicked: index out of bounds");
    }
}
