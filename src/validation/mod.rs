//! Validation with error aggregation.
//!
//! - [`ValidationResult`]: `Valid`, or `Invalid` with a non-empty error list
//! - [`Rule`]: a reusable, composable check of one value
//! - [`Contract`]: keyed rules over the fields of a record
//! - [`primitives`]: comparison, length and presence rules
//!
//! Errors are never dropped: combining results concatenates their errors,
//! and a contract groups them by the key of the rule that reported them.
//!
//! # Examples
//!
//! ```rust
//! use mayak::validation::primitives::{length_greater_than_or_equal_to, not_empty};
//!
//! let password = not_empty::<str>() & length_greater_than_or_equal_to(12);
//! assert_eq!(
//!     password.check("").errors(),
//!     [
//!         "Value should not be empty",
//!         "Length 0 should be greater than or equal to 12",
//!     ]
//! );
//! ```

mod contract;
pub mod primitives;
mod rule;
mod validation_result;

pub use contract::{Contract, KeyedErrors};
pub use primitives::Length;
pub use rule::Rule;
pub use validation_result::{NonEmptyErrors, ValidationResult};
