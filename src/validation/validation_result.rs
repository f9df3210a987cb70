//! The outcome of a validation: `Valid`, or `Invalid` with at least one error.
//!
//! Results aggregate: [`Semigroup::combine`] concatenates the error lists of
//! two invalid results (order preserved, duplicates kept) and treats `Valid`
//! as the identity, which makes `ValidationResult` a [`Monoid`].
//!
//! # Examples
//!
//! ```rust
//! use mayak::typeclass::Semigroup;
//! use mayak::validation::ValidationResult;
//!
//! let name = ValidationResult::invalid("name is blank");
//! let age = ValidationResult::valid();
//! let email = ValidationResult::invalid("email is malformed");
//!
//! let all = name.combine(age).combine(email);
//! assert_eq!(all.errors(), ["name is blank", "email is malformed"]);
//! ```

use std::ops::Deref;

use crate::monads::Exception;
use crate::typeclass::{Monoid, Semigroup};

// =============================================================================
// NonEmptyErrors
// =============================================================================

/// A list of errors that always holds at least one element.
///
/// # Examples
///
/// ```rust
/// use mayak::validation::NonEmptyErrors;
///
/// let mut errors = NonEmptyErrors::new("first");
/// errors.push("second");
/// assert_eq!(errors.first(), &"first");
/// assert_eq!(errors.len(), 2);
///
/// assert!(NonEmptyErrors::<&str>::from_vec(Vec::new()).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyErrors<E> {
    errors: Vec<E>,
}

impl<E> NonEmptyErrors<E> {
    /// Creates a list holding a single error.
    #[inline]
    pub fn new(first: E) -> Self {
        Self {
            errors: vec![first],
        }
    }

    /// Wraps a vector, or returns `None` if it is empty.
    #[inline]
    pub fn from_vec(errors: Vec<E>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// The first error.
    #[inline]
    pub fn first(&self) -> &E {
        &self.errors[0]
    }

    /// The errors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        &self.errors
    }

    /// Unwraps the underlying vector, which is never empty.
    #[inline]
    pub fn into_vec(self) -> Vec<E> {
        self.errors
    }

    /// Appends an error.
    #[inline]
    pub fn push(&mut self, error: E) {
        self.errors.push(error);
    }

    /// Transforms every error, preserving order and count.
    pub fn map<F, G>(self, function: G) -> NonEmptyErrors<F>
    where
        G: FnMut(E) -> F,
    {
        NonEmptyErrors {
            errors: self.errors.into_iter().map(function).collect(),
        }
    }
}

impl<E> Deref for NonEmptyErrors<E> {
    type Target = [E];

    fn deref(&self) -> &[E] {
        &self.errors
    }
}

impl<E> IntoIterator for NonEmptyErrors<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a NonEmptyErrors<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl<E> From<NonEmptyErrors<E>> for Vec<E> {
    fn from(errors: NonEmptyErrors<E>) -> Self {
        errors.errors
    }
}

impl<E> Semigroup for NonEmptyErrors<E> {
    fn combine(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self
    }
}

// =============================================================================
// ValidationResult
// =============================================================================

/// The outcome of checking a value against a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationResult<E> {
    /// Every check passed.
    Valid,
    /// At least one check failed.
    Invalid(NonEmptyErrors<E>),
}

impl<E> ValidationResult<E> {
    /// The passing result.
    #[inline]
    pub const fn valid() -> Self {
        Self::Valid
    }

    /// A failing result with a single error.
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(NonEmptyErrors::new(error))
    }

    /// `Valid` for an empty list, otherwise `Invalid` with the list verbatim.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::validation::ValidationResult;
    ///
    /// assert!(ValidationResult::<i32>::from_errors(vec![]).is_valid());
    /// assert_eq!(ValidationResult::from_errors(vec![2, 1, 2]).errors(), [2, 1, 2]);
    /// ```
    pub fn from_errors(errors: Vec<E>) -> Self {
        NonEmptyErrors::from_vec(errors).map_or(Self::Valid, Self::Invalid)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if every check passed.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns `true` if some check failed.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The errors, empty when `Valid`.
    #[inline]
    pub fn errors(&self) -> &[E] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors.as_slice(),
        }
    }

    /// Consumes the result, returning its errors.
    #[inline]
    pub fn into_errors(self) -> Vec<E> {
        match self {
            Self::Valid => Vec::new(),
            Self::Invalid(errors) => errors.into_vec(),
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Transforms every error, preserving order and count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::validation::ValidationResult;
    ///
    /// let lengths = ValidationResult::from_errors(vec!["ab", "abc"]).map_errors(str::len);
    /// assert_eq!(lengths.errors(), [2, 3]);
    /// ```
    pub fn map_errors<F, G>(self, function: G) -> ValidationResult<F>
    where
        G: FnMut(E) -> F,
    {
        match self {
            Self::Valid => ValidationResult::Valid,
            Self::Invalid(errors) => ValidationResult::Invalid(errors.map(function)),
        }
    }

    /// Runs `function` when `Valid`; an `Invalid` result is returned as is.
    #[must_use]
    pub fn on_valid<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Valid => function(),
            Self::Invalid(_) => self,
        }
    }

    /// Combines two results, merging two error lists with `merge`.
    ///
    /// `Valid` is still the identity; `merge` only runs when both sides are
    /// `Invalid`.
    #[must_use]
    pub fn combine_with<M>(self, other: Self, merge: M) -> Self
    where
        M: FnOnce(NonEmptyErrors<E>, NonEmptyErrors<E>) -> NonEmptyErrors<E>,
    {
        match (self, other) {
            (Self::Valid, other) => other,
            (invalid, Self::Valid) => invalid,
            (Self::Invalid(left), Self::Invalid(right)) => Self::Invalid(merge(left, right)),
        }
    }
}

impl ValidationResult<Exception> {
    /// `Valid` for no exceptions, otherwise `Invalid` with all of them.
    pub fn from_exceptions(exceptions: Vec<Exception>) -> Self {
        Self::from_errors(exceptions)
    }
}

impl ValidationResult<String> {
    /// `Valid` for no messages, otherwise `Invalid` with all of them.
    pub fn from_strings(messages: Vec<String>) -> Self {
        Self::from_errors(messages)
    }
}

impl<E> Default for ValidationResult<E> {
    fn default() -> Self {
        Self::Valid
    }
}

impl<E> Semigroup for ValidationResult<E> {
    fn combine(self, other: Self) -> Self {
        self.combine_with(other, NonEmptyErrors::combine)
    }
}

impl<E> Monoid for ValidationResult<E> {
    fn empty() -> Self {
        Self::Valid
    }
}

/// Concatenates every result, so a collection of checks can be `collect`ed.
impl<E> FromIterator<ValidationResult<E>> for ValidationResult<E> {
    fn from_iter<I: IntoIterator<Item = Self>>(iterator: I) -> Self {
        Self::combine_all(iterator)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<E> serde::Serialize for NonEmptyErrors<E>
where
    E: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.errors.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for NonEmptyErrors<E>
where
    E: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let errors = Vec::<E>::deserialize(deserializer)?;
        Self::from_vec(errors)
            .ok_or_else(|| serde::de::Error::invalid_length(0, &"at least one error"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], true)]
    #[case(vec!["x"], false)]
    fn from_strings_is_valid_only_when_empty(#[case] messages: Vec<&str>, #[case] valid: bool) {
        let messages = messages.into_iter().map(String::from).collect();
        assert_eq!(ValidationResult::from_strings(messages).is_valid(), valid);
    }

    #[rstest]
    fn from_exceptions_keeps_every_exception() {
        let result = ValidationResult::from_exceptions(vec![
            Exception::msg("first"),
            Exception::msg("second"),
        ]);
        assert_eq!(
            result.errors(),
            [Exception::msg("first"), Exception::msg("second")]
        );
    }

    #[rstest]
    fn combine_concatenates_without_deduplication() {
        let left = ValidationResult::from_errors(vec!["a", "b"]);
        let right = ValidationResult::from_errors(vec!["b", "a"]);
        assert_eq!(left.combine(right).errors(), ["a", "b", "b", "a"]);
    }

    #[rstest]
    #[case(ValidationResult::Valid, ValidationResult::invalid(1), ValidationResult::invalid(1))]
    #[case(ValidationResult::invalid(1), ValidationResult::Valid, ValidationResult::invalid(1))]
    #[case(ValidationResult::Valid, ValidationResult::Valid, ValidationResult::Valid)]
    fn valid_is_identity(
        #[case] left: ValidationResult<i32>,
        #[case] right: ValidationResult<i32>,
        #[case] expected: ValidationResult<i32>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn map_errors_leaves_valid_untouched() {
        let valid: ValidationResult<i32> = ValidationResult::Valid;
        assert_eq!(valid.map_errors(|x| x * 2), ValidationResult::Valid);
    }

    #[rstest]
    fn on_valid_runs_only_for_valid() {
        let follow_up = || ValidationResult::invalid("follow-up");
        assert_eq!(
            ValidationResult::Valid.on_valid(follow_up),
            ValidationResult::invalid("follow-up")
        );
        assert_eq!(
            ValidationResult::invalid("first").on_valid(follow_up),
            ValidationResult::invalid("first")
        );
    }

    #[rstest]
    fn combine_with_uses_custom_merge() {
        let keep_first =
            |left: NonEmptyErrors<&'static str>, _: NonEmptyErrors<&'static str>| left;
        let combined =
            ValidationResult::invalid("a").combine_with(ValidationResult::invalid("b"), keep_first);
        assert_eq!(combined.errors(), ["a"]);
    }

    #[rstest]
    fn collect_concatenates_in_order() {
        let collected: ValidationResult<i32> = vec![
            ValidationResult::invalid(1),
            ValidationResult::Valid,
            ValidationResult::from_errors(vec![2, 3]),
        ]
        .into_iter()
        .collect();
        assert_eq!(collected.into_errors(), vec![1, 2, 3]);
    }
}
