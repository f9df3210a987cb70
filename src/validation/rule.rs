//! Composable validation rules.
//!
//! A [`Rule<V, E>`] checks a `&V` and reports a [`ValidationResult<E>`].
//! Rules are built from plain functions and combined:
//!
//! - [`Rule::any`] (`|`): valid if either side is valid. The second rule runs
//!   only when the first fails.
//! - [`Rule::both`] (`&`): valid if both sides are valid. Both rules always
//!   run, so both sets of errors surface.
//! - [`Rule::error_from_value`]/[`Rule::error_as`]: replace the diagnostics
//!   with exactly one new error.
//! - [`Rule::with_key`]: tag every error with the field that produced it.
//! - [`Rule::transform`]: check a projection of a larger value.
//!
//! A rule is an `Arc` over a shared function, so clones are cheap and rules
//! can be checked from several threads at once.
//!
//! # Examples
//!
//! ```rust
//! use mayak::validation::{Rule, ValidationResult};
//! use mayak::validation::primitives::{greater_than, less_than};
//!
//! let percentage = greater_than(0) & less_than(101);
//! assert!(percentage.check(&50).is_valid());
//! assert_eq!(
//!     percentage.check(&200).errors(),
//!     ["Value 200 should be less than 101"]
//! );
//!
//! let port: Rule<u16, &str> = (greater_than(1023) | less_than(1)).error_as("reserved port");
//! assert_eq!(port.check(&80), ValidationResult::invalid("reserved port"));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::sync::Arc;

use super::validation_result::{NonEmptyErrors, ValidationResult};
use crate::typeclass::Semigroup;

/// A reusable check of a `&V` producing errors of type `E`.
pub struct Rule<V: ?Sized, E> {
    check: Arc<dyn Fn(&V) -> ValidationResult<E> + Send + Sync>,
}

impl<V: ?Sized, E> Clone for Rule<V, E> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<V: ?Sized, E> fmt::Debug for Rule<V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Rule").finish_non_exhaustive()
    }
}

impl<V, E> Rule<V, E>
where
    V: ?Sized + 'static,
    E: 'static,
{
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a rule from a check function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::validation::{Rule, ValidationResult};
    ///
    /// let even = Rule::new(|value: &i32| {
    ///     if value % 2 == 0 {
    ///         ValidationResult::Valid
    ///     } else {
    ///         ValidationResult::invalid(format!("{value} is odd"))
    ///     }
    /// });
    /// assert!(even.check(&4).is_valid());
    /// assert_eq!(even.check(&3).errors(), ["3 is odd"]);
    /// ```
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&V) -> ValidationResult<E> + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    /// Creates a rule that passes when `predicate` holds and otherwise
    /// reports `build_error(value)`.
    pub fn predicate<P, B>(predicate: P, build_error: B) -> Self
    where
        P: Fn(&V) -> bool + Send + Sync + 'static,
        B: Fn(&V) -> E + Send + Sync + 'static,
    {
        Self::new(move |value| {
            if predicate(value) {
                ValidationResult::Valid
            } else {
                ValidationResult::invalid(build_error(value))
            }
        })
    }

    /// A rule that accepts every value.
    pub fn valid() -> Self {
        Self::new(|_| ValidationResult::Valid)
    }

    /// Checks a value.
    #[inline]
    pub fn check(&self, value: &V) -> ValidationResult<E> {
        (self.check)(value)
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Replaces the errors of a failing check with exactly one error built
    /// from the checked value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::validation::primitives::{greater_than, less_than};
    ///
    /// let outside = (greater_than(10) & less_than(0))
    ///     .error_from_value(|value: &i32| format!("{value} is not outside 0..=10"));
    /// assert_eq!(outside.check(&5).errors(), ["5 is not outside 0..=10"]);
    /// ```
    pub fn error_from_value<F, B>(&self, build_error: B) -> Rule<V, F>
    where
        F: 'static,
        B: Fn(&V) -> F + Send + Sync + 'static,
    {
        let rule = self.clone();
        Rule::new(move |value| {
            if rule.check(value).is_valid() {
                ValidationResult::Valid
            } else {
                ValidationResult::invalid(build_error(value))
            }
        })
    }

    /// Replaces the errors of a failing check with exactly one fixed error.
    pub fn error_as<F>(&self, error: F) -> Rule<V, F>
    where
        F: Clone + Send + Sync + 'static,
    {
        self.error_from_value(move |_| error.clone())
    }

    /// Transforms every error reported by this rule.
    pub fn map_errors<F, G>(&self, function: G) -> Rule<V, F>
    where
        F: 'static,
        G: Fn(E) -> F + Send + Sync + 'static,
    {
        let rule = self.clone();
        Rule::new(move |value| rule.check(value).map_errors(&function))
    }

    /// Tags every error with `key`, recording which field produced it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::validation::primitives::not_empty;
    ///
    /// let email = not_empty::<String>().with_key("email");
    /// assert!(email.check(&"a@b.c".to_string()).is_valid());
    /// assert_eq!(
    ///     email.check(&String::new()).errors(),
    ///     [("email", "Value should not be empty".to_string())]
    /// );
    /// ```
    pub fn with_key<K>(&self, key: K) -> Rule<V, (K, E)>
    where
        K: Clone + Send + Sync + 'static,
    {
        self.map_errors(move |error| (key.clone(), error))
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Valid if either rule is valid; errors are concatenated when both fail.
    ///
    /// `other` is not checked when `self` passes.
    #[must_use]
    pub fn any(&self, other: &Self) -> Self {
        self.any_with(other, ValidationResult::combine)
    }

    /// Like [`Rule::any`], combining the two failing results with `combine`.
    ///
    /// `combine` receives the result of `self` first.
    #[must_use]
    pub fn any_with<C>(&self, other: &Self, combine: C) -> Self
    where
        C: Fn(ValidationResult<E>, ValidationResult<E>) -> ValidationResult<E>
            + Send
            + Sync
            + 'static,
    {
        let first = self.clone();
        let second = other.clone();
        Self::new(move |value| {
            let first_result = first.check(value);
            if first_result.is_valid() {
                return first_result;
            }
            let second_result = second.check(value);
            if second_result.is_valid() {
                second_result
            } else {
                combine(first_result, second_result)
            }
        })
    }

    /// Valid only if both rules are valid; both rules always run.
    #[must_use]
    pub fn both(&self, other: &Self) -> Self {
        self.both_with(other, ValidationResult::combine)
    }

    /// Like [`Rule::both`], combining two failing results with `combine`.
    ///
    /// When only one side fails its result is returned unchanged.
    #[must_use]
    pub fn both_with<C>(&self, other: &Self, combine: C) -> Self
    where
        C: Fn(ValidationResult<E>, ValidationResult<E>) -> ValidationResult<E>
            + Send
            + Sync
            + 'static,
    {
        let first = self.clone();
        let second = other.clone();
        Self::new(move |value| {
            let first_result = first.check(value);
            let second_result = second.check(value);
            match (first_result.is_valid(), second_result.is_valid()) {
                (true, _) => second_result,
                (false, true) => first_result,
                (false, false) => combine(first_result, second_result),
            }
        })
    }

    /// Inverts the rule: passing values fail with `build_error(value)` and
    /// failing values pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::validation::primitives::equal_to;
    ///
    /// let not_zero = equal_to(0).negate(|_: &i32| "must not be zero".to_string());
    /// assert!(not_zero.check(&7).is_valid());
    /// assert_eq!(not_zero.check(&0).errors(), ["must not be zero"]);
    /// ```
    #[must_use]
    pub fn negate<B>(&self, build_error: B) -> Self
    where
        B: Fn(&V) -> E + Send + Sync + 'static,
    {
        let rule = self.clone();
        Self::new(move |value| {
            if rule.check(value).is_valid() {
                ValidationResult::invalid(build_error(value))
            } else {
                ValidationResult::Valid
            }
        })
    }

    /// Checks a projection of a `U` with this rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::validation::primitives::greater_than;
    ///
    /// let long_enough = greater_than(3).transform(|name: &String| name.len());
    /// assert!(long_enough.check(&"ferris".to_string()).is_valid());
    /// ```
    pub fn transform<U, P>(&self, projection: P) -> Rule<U, E>
    where
        U: ?Sized + 'static,
        P: Fn(&U) -> V + Send + Sync + 'static,
        V: Sized,
    {
        let rule = self.clone();
        Rule::new(move |value| rule.check(&projection(value)))
    }

    /// Like [`Rule::transform`], for projections that borrow from the value.
    pub fn transform_ref<U, P>(&self, projection: P) -> Rule<U, E>
    where
        U: ?Sized + 'static,
        P: Fn(&U) -> &V + Send + Sync + 'static,
    {
        let rule = self.clone();
        Rule::new(move |value| rule.check(projection(value)))
    }
}

impl<V, K, E> Rule<V, (K, E)>
where
    V: ?Sized + 'static,
    K: Ord + 'static,
    E: 'static,
{
    /// Groups the keyed errors of `rule` into one map from key to errors.
    ///
    /// A failing check reports exactly one error: the whole map. Errors keep
    /// their order within each key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayak::validation::Rule;
    /// use mayak::validation::primitives::{greater_than, less_than};
    ///
    /// let keyed = greater_than(10).with_key("size") & less_than(0).with_key("size");
    /// let grouped = Rule::with_keys_aggregated(&keyed).check(&5);
    ///
    /// let errors = &grouped.errors()[0];
    /// assert_eq!(errors["size"].len(), 2);
    /// ```
    pub fn with_keys_aggregated(rule: &Self) -> Rule<V, BTreeMap<K, Vec<E>>> {
        let rule = rule.clone();
        Rule::new(move |value| match rule.check(value) {
            ValidationResult::Valid => ValidationResult::Valid,
            ValidationResult::Invalid(errors) => {
                let grouped = errors
                    .into_iter()
                    .map(|(key, error)| BTreeMap::from([(key, vec![error])]))
                    .reduce(BTreeMap::combine)
                    .unwrap_or_default();
                ValidationResult::Invalid(NonEmptyErrors::new(grouped))
            }
        })
    }
}

impl<V, E> BitOr for Rule<V, E>
where
    V: ?Sized + 'static,
    E: 'static,
{
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        self.any(&other)
    }
}

impl<V, E> BitAnd for Rule<V, E>
where
    V: ?Sized + 'static,
    E: 'static,
{
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        self.both(&other)
    }
}

static_assertions::assert_impl_all!(Rule<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Rule<str, String>: Send, Sync, Clone);
