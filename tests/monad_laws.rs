#![cfg(all(feature = "monads", feature = "typeclass"))]

//! Property-based tests for Monad laws.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

use mayak::monads::{self, Exception, Maybe, Try};
use mayak::typeclass::{Applicative, Monad};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn result_strategy() -> impl Strategy<Value = monads::Result<String, i32>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(monads::Result::from)
}

fn try_strategy() -> impl Strategy<Value = Try<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Try::Success),
        "[a-z ]{0,16}".prop_map(|message| Try::failure(Exception::msg(message))),
    ]
}

fn half_maybe(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::Some(n / 2) } else { Maybe::None }
}

fn increment_maybe(n: i32) -> Maybe<i32> {
    n.checked_add(1).into()
}

fn half_result(n: i32) -> monads::Result<String, i32> {
    if n % 2 == 0 {
        monads::Result::Success(n / 2)
    } else {
        monads::Result::Failure(format!("{n} is odd"))
    }
}

fn increment_result(n: i32) -> monads::Result<String, i32> {
    n.checked_add(1).map_or_else(
        || monads::Result::Failure("overflow".to_string()),
        monads::Result::Success,
    )
}

fn half_try(n: i32) -> Try<i32> {
    Try::check(n / 2, Exception::msg(format!("{n} is odd")), || n % 2 == 0)
}

fn increment_try(n: i32) -> Try<i32> {
    Try::from_fn(|| n.checked_add(1).ok_or_else(|| Exception::msg("overflow")))
}

// =============================================================================
// Maybe<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        let lifted: Maybe<i32> = <Maybe<()>>::pure(value);
        prop_assert_eq!(Monad::flat_map(lifted, half_maybe), half_maybe(value));
    }

    #[test]
    fn prop_maybe_right_identity(value in maybe_strategy()) {
        prop_assert_eq!(value.flat_map(Maybe::Some), value);
    }

    #[test]
    fn prop_maybe_associativity(value in maybe_strategy()) {
        let left = value.flat_map(half_maybe).flat_map(increment_maybe);
        let right = value.flat_map(|x| half_maybe(x).flat_map(increment_maybe));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Result<E, A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_result_left_identity(value in any::<i32>()) {
        let lifted: monads::Result<String, i32> = <monads::Result<String, ()>>::pure(value);
        prop_assert_eq!(Monad::flat_map(lifted, half_result), half_result(value));
    }

    #[test]
    fn prop_result_right_identity(value in result_strategy()) {
        prop_assert_eq!(value.clone().flat_map(monads::Result::Success), value);
    }

    #[test]
    fn prop_result_associativity(value in result_strategy()) {
        let left = value.clone().flat_map(half_result).flat_map(increment_result);
        let right = value.flat_map(|x| half_result(x).flat_map(increment_result));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Try<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_try_left_identity(value in any::<i32>()) {
        let lifted: Try<i32> = <Try<()>>::pure(value);
        prop_assert_eq!(Monad::flat_map(lifted, half_try), half_try(value));
    }

    #[test]
    fn prop_try_right_identity(value in try_strategy()) {
        prop_assert_eq!(value.clone().flat_map(Try::Success), value);
    }

    #[test]
    fn prop_try_associativity(value in try_strategy()) {
        let left = value.clone().flat_map(half_try).flat_map(increment_try);
        let right = value.flat_map(|x| half_try(x).flat_map(increment_try));
        prop_assert_eq!(left, right);
    }
}
