#![cfg(feature = "async")]
//! Property-based tests for sync/async parity.
//!
//! For every operation `op` and input `x`, awaiting `op(f)` on an async
//! source of `x` must equal `x.op(f)`. Every property runs against a source
//! that is already settled and against one that is still suspended when the
//! operation is attached. The async chains run on a fresh tokio runtime per
//! case.

use optres::{
    Option, OptionAsync, Result, ResultAsync, err, none, none_async, ok, ok_async, some,
    some_async,
};
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

fn option_strategy() -> impl Strategy<Value = Option<i32>> {
    any::<std::option::Option<i32>>().prop_map(Option::from)
}

fn result_strategy() -> impl Strategy<Value = Result<i32, String>> {
    any::<std::result::Result<i32, String>>().prop_map(Result::from)
}

fn nested_option_strategy() -> impl Strategy<Value = Option<Option<i32>>> {
    any::<std::option::Option<std::option::Option<i32>>>()
        .prop_map(|value| Option::from(value.map(Option::from)))
}

fn nested_result_strategy() -> impl Strategy<Value = Result<Result<i32, String>, String>> {
    any::<std::result::Result<std::result::Result<i32, String>, String>>()
        .prop_map(|value| Result::from(value.map(Result::from)))
}

/// An async source of `value`: settled up front, or settling only after the
/// task has yielded once.
fn option_source<T: Send + 'static>(value: Option<T>, suspended: bool) -> OptionAsync<T> {
    if suspended {
        OptionAsync::new(async move {
            tokio::task::yield_now().await;
            value
        })
    } else {
        value.into_async()
    }
}

fn result_source<T: Send + 'static, E: Send + 'static>(
    value: Result<T, E>,
    suspended: bool,
) -> ResultAsync<T, E> {
    if suspended {
        ResultAsync::new(async move {
            tokio::task::yield_now().await;
            value
        })
    } else {
        value.into_async()
    }
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Runtime::new().unwrap().block_on(future)
}

fn halve(value: i32) -> Option<i32> {
    if value % 2 == 0 { some(value / 2) } else { none() }
}

fn positive(value: i32) -> Result<i32, String> {
    if value > 0 {
        ok(value)
    } else {
        err(format!("{value} is not positive"))
    }
}

// =============================================================================
// OptionAsync
// =============================================================================

proptest! {
    #[test]
    fn prop_option_map_parity(value in option_strategy(), suspended: bool) {
        let expected = value.map(|x| x.wrapping_mul(3));
        let actual = block_on(option_source(value, suspended).map(|x| x.wrapping_mul(3)));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_option_map_async_parity(value in option_strategy(), suspended: bool) {
        let expected = value.map(|x| x.wrapping_mul(3));
        let actual = block_on(option_source(value, suspended).map_async(|x| async move {
            tokio::task::yield_now().await;
            x.wrapping_mul(3)
        }));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_option_and_then_parity(value in option_strategy(), suspended: bool) {
        let expected = value.and_then(halve);
        let actual = block_on(option_source(value, suspended).and_then(halve));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_option_and_then_async_callback_parity(value in option_strategy(), suspended: bool) {
        let expected = value.and_then(halve);
        let actual = block_on(
            option_source(value, suspended)
                .and_then(move |x| option_source(halve(x), suspended)),
        );
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_option_filter_or_else_parity(
        value in option_strategy(),
        fallback: i32,
        suspended: bool,
    ) {
        let expected = value.filter(|x| x % 3 == 0).or_else(|| some(fallback));
        let actual = block_on(
            option_source(value, suspended)
                .filter(|x| x % 3 == 0)
                .or_else(move || some_async(fallback)),
        );
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_option_inspect_parity(value in option_strategy(), suspended: bool) {
        let mut expected_seen = Vec::new();
        let expected = value.inspect(|x| expected_seen.push(*x));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&seen);
        let actual = block_on(
            option_source(value, suspended).inspect(move |x| writer.lock().unwrap().push(*x)),
        );

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(seen.lock().unwrap().clone(), expected_seen);
    }

    #[test]
    fn prop_option_flatten_parity(value in nested_option_strategy(), suspended: bool) {
        let expected = value.flatten();
        let actual = block_on(option_source(value, suspended).flatten());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_option_ok_or_parity(value in option_strategy(), suspended: bool) {
        let expected = value.ok_or("missing");
        let actual = block_on(option_source(value, suspended).ok_or("missing"));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_option_unwrap_or_parity(value in option_strategy(), fallback: i32, suspended: bool) {
        let expected = value.unwrap_or(fallback);
        let actual = block_on(option_source(value, suspended).unwrap_or(fallback));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_option_try_unwrap_parity(value in option_strategy(), suspended: bool) {
        let expected = value.try_unwrap();
        let actual = block_on(option_source(value, suspended).try_unwrap());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_option_match_with_parity(value in option_strategy(), suspended: bool) {
        let expected = value.match_with(|x| x.to_string(), || String::from("none"));
        let actual = block_on(
            option_source(value, suspended)
                .match_with(|x| x.to_string(), || String::from("none")),
        );
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_option_all_parity(inputs in prop::collection::vec((option_strategy(), any::<bool>()), 0..8)) {
        let expected = Option::all(inputs.iter().map(|(value, _)| *value));
        let actual = block_on(OptionAsync::all(
            inputs
                .into_iter()
                .map(|(value, suspended)| option_source(value, suspended))
                .collect::<Vec<_>>(),
        ));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_option_any_parity(inputs in prop::collection::vec((option_strategy(), any::<bool>()), 0..8)) {
        let expected = Option::any(inputs.iter().map(|(value, _)| *value));
        let actual = block_on(OptionAsync::any(
            inputs
                .into_iter()
                .map(|(value, suspended)| option_source(value, suspended))
                .collect::<Vec<_>>(),
        ));
        prop_assert_eq!(actual, expected);
    }
}

// =============================================================================
// ResultAsync
// =============================================================================

proptest! {
    #[test]
    fn prop_result_map_parity(value in result_strategy(), suspended: bool) {
        let expected = value.clone().map(|x| x.wrapping_add(1));
        let actual = block_on(result_source(value, suspended).map(|x| x.wrapping_add(1)));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_result_map_async_parity(value in result_strategy(), suspended: bool) {
        let expected = value.clone().map(|x| x.wrapping_add(1));
        let actual = block_on(result_source(value, suspended).map_async(|x| async move {
            tokio::task::yield_now().await;
            x.wrapping_add(1)
        }));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_result_map_err_parity(value in result_strategy(), suspended: bool) {
        let expected = value.clone().map_err(|e| e.len());
        let actual = block_on(result_source(value, suspended).map_err(|e| e.len()));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_result_map_err_async_parity(value in result_strategy(), suspended: bool) {
        let expected = value.clone().map_err(|e| e.len());
        let actual = block_on(result_source(value, suspended).map_err_async(|e| async move {
            tokio::task::yield_now().await;
            e.len()
        }));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_result_and_then_parity(value in result_strategy(), suspended: bool) {
        let expected = value.clone().and_then(positive);
        let actual = block_on(result_source(value, suspended).and_then(positive));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_result_and_then_async_callback_parity(value in result_strategy(), suspended: bool) {
        let expected = value.clone().and_then(positive);
        let actual = block_on(
            result_source(value, suspended)
                .and_then(move |x| result_source(positive(x), suspended)),
        );
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_result_or_else_parity(value in result_strategy(), fallback: i32, suspended: bool) {
        let expected = value.clone().or_else(|_| ok::<i32, ()>(fallback));
        let actual = block_on(
            result_source(value, suspended)
                .or_else(move |_| ok_async::<i32, ()>(fallback)),
        );
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_result_inspect_parity(value in result_strategy(), suspended: bool) {
        let mut expected_seen = Vec::new();
        let expected = value
            .clone()
            .inspect(|x| expected_seen.push(x.to_string()))
            .inspect_err(|e| expected_seen.push(e.clone()));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let ok_writer = Arc::clone(&seen);
        let err_writer = Arc::clone(&seen);
        let actual = block_on(
            result_source(value, suspended)
                .inspect(move |x| ok_writer.lock().unwrap().push(x.to_string()))
                .inspect_err(move |e| err_writer.lock().unwrap().push(e.clone())),
        );

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(seen.lock().unwrap().clone(), expected_seen);
    }

    #[test]
    fn prop_result_flatten_parity(value in nested_result_strategy(), suspended: bool) {
        let expected = value.clone().flatten();
        let actual = block_on(result_source(value, suspended).flatten());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_result_unwrap_or_else_parity(value in result_strategy(), suspended: bool) {
        let expected = value.clone().unwrap_or_else(|e| i32::try_from(e.len()).unwrap_or(i32::MAX));
        let actual = block_on(
            result_source(value, suspended)
                .unwrap_or_else(|e| i32::try_from(e.len()).unwrap_or(i32::MAX)),
        );
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_result_try_unwrap_parity(value in result_strategy(), suspended: bool) {
        prop_assert_eq!(
            block_on(result_source(value.clone(), suspended).try_unwrap()),
            value.clone().try_unwrap()
        );
        prop_assert_eq!(
            block_on(result_source(value.clone(), suspended).try_unwrap_err()),
            value.try_unwrap_err()
        );
    }

    #[test]
    fn prop_result_projection_parity(value in result_strategy(), suspended: bool) {
        prop_assert_eq!(block_on(result_source(value.clone(), suspended).ok()), value.clone().ok());
        prop_assert_eq!(block_on(result_source(value.clone(), suspended).err()), value.err());
    }

    #[test]
    fn prop_result_all_parity(inputs in prop::collection::vec((result_strategy(), any::<bool>()), 0..8)) {
        let expected = Result::all(inputs.iter().map(|(value, _)| value.clone()));
        let actual = block_on(ResultAsync::all(
            inputs
                .into_iter()
                .map(|(value, suspended)| result_source(value, suspended))
                .collect::<Vec<_>>(),
        ));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_result_any_parity(inputs in prop::collection::vec((result_strategy(), any::<bool>()), 0..8)) {
        let expected = Result::any(inputs.iter().map(|(value, _)| value.clone()));
        let actual = block_on(ResultAsync::any(
            inputs
                .into_iter()
                .map(|(value, suspended)| result_source(value, suspended))
                .collect::<Vec<_>>(),
        ));
        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn settled_constructors_match_sync_constructors() {
    assert_eq!(block_on(some_async(1)), some(1));
    assert_eq!(block_on(none_async::<i32>()), none());
    assert_eq!(block_on(ok_async::<i32, ()>(1)), ok(1));
}
