#![cfg(feature = "monads")]

//! Integration tests for the do-notation blocks.
//!
//! An aborting `do_!` must stop the whole block: side effects before it
//! happen, side effects after it never do.

use std::cell::RefCell;
use std::num::ParseIntError;

use mayak::monads::{Bind, Exception, Maybe, Try, for_maybe, for_try};
use mayak::{do_, for_maybe, for_try};
use rstest::rstest;

// =============================================================================
// Try Blocks
// =============================================================================

#[rstest]
fn try_block_stops_at_the_first_failure() {
    let buffer = RefCell::new(Vec::new());

    let result: Try<i32> = for_try! {
        let a = do_!(Try::Success(10));
        let b = do_!(Try::<i32>::failure(Exception::msg("x")));
        buffer.borrow_mut().push(1);
        a + b
    };

    assert_eq!(result, Try::Failure(Exception::msg("x")));
    assert!(buffer.borrow().is_empty());
}

#[rstest]
fn try_block_runs_effects_before_the_abort() {
    let log = RefCell::new(Vec::new());

    let result: Try<i32> = for_try! {
        log.borrow_mut().push("start");
        let parsed = do_!(Try::from_fn(|| "oops".parse::<i32>()));
        log.borrow_mut().push("parsed");
        parsed
    };

    assert!(result.failure_or(Exception::msg("none")).is::<ParseIntError>());
    assert_eq!(*log.borrow(), vec!["start"]);
}

#[rstest]
fn try_block_wraps_the_final_expression() {
    let total = for_try! {
        let a = do_!(Try::from_fn(|| "40".parse::<i32>()));
        let b = do_!(Try::Success(2));
        a + b
    };
    assert_eq!(total, Try::Success(42));
}

#[rstest]
#[case(5, Try::Success(5))]
#[case(-5, Try::Failure(Exception::msg("negative")))]
fn try_block_guard(#[case] input: i32, #[case] expected: Try<i32>) {
    let result = for_try! {
        do_!(Try::guard(Exception::msg("negative"), || input >= 0));
        input
    };
    assert_eq!(result, expected);
}

// =============================================================================
// Maybe Blocks
// =============================================================================

#[rstest]
fn maybe_block_stops_at_the_first_none() {
    let visited = RefCell::new(0);

    let result: Maybe<i32> = for_maybe! {
        *visited.borrow_mut() += 1;
        let missing: i32 = do_!(Maybe::None);
        *visited.borrow_mut() += 1;
        missing
    };

    assert_eq!(result, Maybe::None);
    assert_eq!(*visited.borrow(), 1);
}

#[rstest]
#[case(4, Maybe::Some(2))]
#[case(3, Maybe::None)]
fn maybe_block_check(#[case] input: i32, #[case] expected: Maybe<i32>) {
    let result = for_maybe! {
        let even = do_!(Maybe::check(input, || input % 2 == 0));
        even / 2
    };
    assert_eq!(result, expected);
}

// =============================================================================
// Explicit Closures
// =============================================================================

#[rstest]
fn question_mark_on_bind_is_equivalent_to_do() {
    let lookup = |key: &str| match key {
        "a" => Maybe::Some(1),
        "b" => Maybe::Some(2),
        _ => Maybe::None,
    };

    let found = for_maybe(|| Ok(lookup("a").bind()? + lookup("b").bind()?));
    let missing = for_maybe(|| Ok(lookup("a").bind()? + lookup("z").bind()?));

    assert_eq!(found, Maybe::Some(3));
    assert_eq!(missing, Maybe::None);
}

#[rstest]
fn try_closure_returns_the_raised_exception() {
    let result: Try<i32> = for_try(|| {
        let value = Try::<i32>::failure(Exception::msg("first")).bind()?;
        let _never = Try::<i32>::failure(Exception::msg("second")).bind()?;
        Ok(value)
    });
    assert_eq!(result, Try::Failure(Exception::msg("first")));
}

#[rstest]
fn inner_block_abort_does_not_escape() {
    let outer = for_try! {
        let inner: Try<i32> = for_try! {
            let value = do_!(Try::<i32>::failure(Exception::msg("inner")));
            value
        };
        inner.success_or(0) + 1
    };
    assert_eq!(outer, Try::Success(1));
}
