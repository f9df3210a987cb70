//! Ready-made rules for common checks.
//!
//! Comparison rules report `"Value {value} should be {relation} {bound}"`,
//! length rules report `"Length {length} should be {relation} {bound}"`.
//! The `_or_equal_to` variants are compositions of the strict rule and
//! [`equal_to`] under [`Rule::any`], with the diagnostic replaced by
//! [`Rule::error_from_value`].
//!
//! # Examples
//!
//! ```rust
//! use mayak::validation::primitives::{greater_than_or_equal_to, length_less_than, not_none};
//!
//! let adult = greater_than_or_equal_to(18);
//! assert_eq!(
//!     adult.check(&15).errors(),
//!     ["Value 15 should be greater than or equal to 18"]
//! );
//!
//! let short = length_less_than::<str>(5);
//! assert_eq!(short.check("toolong").errors(), ["Length 7 should be less than 5"]);
//!
//! let optional_adult = not_none(adult);
//! assert_eq!(optional_adult.check(&None).errors(), ["Value should not be none"]);
//! assert!(optional_adult.check(&Some(30)).is_valid());
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

use super::rule::Rule;
use super::validation_result::ValidationResult;

// =============================================================================
// Length
// =============================================================================

/// Values with a number of elements.
pub trait Length {
    /// The number of elements (bytes for strings).
    fn length(&self) -> usize;
}

impl Length for str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Length for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> Length for HashSet<T, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for BTreeSet<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Comparison Rules
// =============================================================================

macro_rules! comparison_rules {
    ($($name:ident => $operator:tt, $relation:literal;)*) => {
        paste::paste! {
            $(
                #[doc = concat!("Passes when the value is ", $relation, " `bound`.")]
                pub fn $name<T>(bound: T) -> Rule<T, String>
                where
                    T: PartialOrd + fmt::Display + Send + Sync + 'static,
                {
                    Rule::new(move |value: &T| {
                        if *value $operator bound {
                            ValidationResult::Valid
                        } else {
                            ValidationResult::invalid(format!(
                                concat!("Value {} should be ", $relation, " {}"),
                                value, bound
                            ))
                        }
                    })
                }

                #[doc = concat!("Passes when the length is ", $relation, " `bound`.")]
                pub fn [<length_ $name>]<T>(bound: usize) -> Rule<T, String>
                where
                    T: Length + ?Sized + 'static,
                {
                    Rule::new(move |value: &T| {
                        let length = value.length();
                        if length $operator bound {
                            ValidationResult::Valid
                        } else {
                            ValidationResult::invalid(format!(
                                concat!("Length {} should be ", $relation, " {}"),
                                length, bound
                            ))
                        }
                    })
                }
            )*
        }
    };
}

macro_rules! or_equal_to_rules {
    ($($strict:ident, $relation:literal;)*) => {
        paste::paste! {
            $(
                #[doc = concat!(
                    "Passes when the value is ", $relation, " or equal to `bound`.\n\n",
                    "Built as `", stringify!($strict), "(bound) | equal_to(bound)`."
                )]
                pub fn [<$strict _or_equal_to>]<T>(bound: T) -> Rule<T, String>
                where
                    T: PartialOrd + fmt::Display + Clone + Send + Sync + 'static,
                {
                    let shown = bound.clone();
                    $strict(bound.clone())
                        .any(&equal_to(bound))
                        .error_from_value(move |value| {
                            format!(
                                concat!("Value {} should be ", $relation, " or equal to {}"),
                                value, shown
                            )
                        })
                }

                #[doc = concat!("Passes when the length is ", $relation, " or equal to `bound`.")]
                pub fn [<length_ $strict _or_equal_to>]<T>(bound: usize) -> Rule<T, String>
                where
                    T: Length + ?Sized + 'static,
                {
                    [<length_ $strict>](bound)
                        .any(&length_equal_to(bound))
                        .error_from_value(move |value: &T| {
                            format!(
                                concat!("Length {} should be ", $relation, " or equal to {}"),
                                value.length(), bound
                            )
                        })
                }
            )*
        }
    };
}

comparison_rules! {
    greater_than => >, "greater than";
    less_than => <, "less than";
    equal_to => ==, "equal to";
}

or_equal_to_rules! {
    greater_than, "greater than";
    less_than, "less than";
}

/// Passes when the value is greater than its type's default (zero for numbers).
pub fn positive<T>() -> Rule<T, String>
where
    T: PartialOrd + fmt::Display + Default + Send + Sync + 'static,
{
    greater_than(T::default())
}

/// Passes when the value is less than its type's default (zero for numbers).
pub fn negative<T>() -> Rule<T, String>
where
    T: PartialOrd + fmt::Display + Default + Send + Sync + 'static,
{
    less_than(T::default())
}

// =============================================================================
// Presence Rules
// =============================================================================

/// Passes when the value has at least one element.
///
/// # Examples
///
/// ```rust
/// use mayak::validation::primitives::not_empty;
///
/// let tags = not_empty::<Vec<&str>>();
/// assert!(tags.check(&vec!["rust"]).is_valid());
/// assert_eq!(tags.check(&vec![]).errors(), ["Value should not be empty"]);
/// ```
pub fn not_empty<T>() -> Rule<T, String>
where
    T: Length + ?Sized + 'static,
{
    Rule::new(|value: &T| {
        if value.length() == 0 {
            ValidationResult::invalid("Value should not be empty".to_string())
        } else {
            ValidationResult::Valid
        }
    })
}

/// Rejects `None`, then checks a present value with `rule`.
pub fn not_none<T>(rule: Rule<T, String>) -> Rule<Option<T>, String>
where
    T: 'static,
{
    not_none_or(rule, "Value should not be none".to_string())
}

/// Rejects `None` with `error`, then checks a present value with `rule`.
pub fn not_none_or<T, E>(rule: Rule<T, E>, error: E) -> Rule<Option<T>, E>
where
    T: 'static,
    E: Clone + Send + Sync + 'static,
{
    Rule::new(move |value: &Option<T>| match value {
        Some(present) => rule.check(present),
        None => ValidationResult::invalid(error.clone()),
    })
}
