//! Integration tests for `Result`.

use optres::{Result, Thrown, Unit, UnwrapError, err, err_unit, none, ok, ok_unit, some};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and predicates
// =============================================================================

#[rstest]
fn unit_constructors() {
    assert_eq!(ok_unit::<String>(), ok(Unit));
    assert_eq!(err_unit::<i32>(), err(Unit));
}

#[rstest]
#[case(ok(4), true, false)]
#[case(ok(-4), false, false)]
#[case(err("bad"), false, true)]
fn predicates(#[case] input: Result<i32, &str>, #[case] ok_and: bool, #[case] err_and: bool) {
    assert_eq!(input.is_ok_and(|x| x > 0), ok_and);
    assert_eq!(input.is_err_and(|e| e.starts_with('b')), err_and);
}

#[rstest]
#[case(Some(1), ok(1))]
#[case(None, err("absent"))]
fn from_or(#[case] data: Option<i32>, #[case] expected: Result<i32, &str>) {
    assert_eq!(Result::from_or(data, "absent"), expected);
}

#[rstest]
fn from_or_else_is_lazy() {
    let calls = Cell::new(0);
    let result = Result::from_or_else(Some(1), || {
        calls.set(calls.get() + 1);
        "absent"
    });
    assert_eq!(result, ok(1));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn from_std_round_trip() {
    let parsed: Result<i32, std::num::ParseIntError> = "8".parse::<i32>().into();
    assert_eq!(parsed.clone().into_std(), Ok(8));
    assert_eq!(Result::from(parsed.into_std()), ok(8));
}

// =============================================================================
// Channel mapping
// =============================================================================

#[rstest]
fn map_and_map_err_run_exactly_one_function() {
    let value_calls = Cell::new(0);
    let error_calls = Cell::new(0);

    let mapped = ok::<i32, &str>(1)
        .map_err(|e| {
            error_calls.set(error_calls.get() + 1);
            e.len()
        })
        .map(|x| {
            value_calls.set(value_calls.get() + 1);
            x + 1
        });

    assert_eq!(mapped, ok(2));
    assert_eq!((value_calls.get(), error_calls.get()), (1, 0));
}

#[rstest]
fn err_short_circuits_map() {
    let calls = Cell::new(0);
    let mapped = err::<i32, &str>("e").map(|x| {
        calls.set(calls.get() + 1);
        x
    });
    assert_eq!(mapped, err("e"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn and_then_and_or_else_are_dual() {
    let positive = |x: i32| if x > 0 { ok(x) } else { err("not positive") };
    let recover = |e: &str| ok::<i32, String>(i32::try_from(e.len()).unwrap_or_default());

    assert_eq!(ok(5).and_then(positive), ok(5));
    assert_eq!(ok(-5).and_then(positive), err("not positive"));
    assert_eq!(err::<i32, &str>("abc").or_else(recover), ok(3));
    assert_eq!(ok::<i32, &str>(9).or_else(recover), ok(9));
}

#[rstest]
fn map_or_else_receives_error() {
    let rendered = err::<i32, &str>("bad").map_or_else(|e| format!("error: {e}"), |x| x.to_string());
    assert_eq!(rendered, "error: bad");
}

// =============================================================================
// Projection and extraction
// =============================================================================

#[rstest]
fn projections() {
    assert_eq!(ok::<i32, &str>(1).ok(), some(1));
    assert_eq!(ok::<i32, &str>(1).err(), none());
    assert_eq!(err::<i32, &str>("e").err(), some("e"));
}

#[rstest]
#[case(ok(2), 2, "fallback")]
#[case(err("held"), 0, "held")]
fn unwrap_family(#[case] input: Result<i32, &str>, #[case] value: i32, #[case] error: &str) {
    assert_eq!(input.unwrap_or(0), value);
    assert_eq!(input.unwrap_err_or("fallback"), error);
    assert_eq!(input.unwrap_or_else(|_| 0), value);
}

#[rstest]
fn unwrap_err_or_else_receives_value() {
    assert_eq!(ok::<i32, String>(3).unwrap_err_or_else(|x| x.to_string()), "3");
}

#[rstest]
fn try_unwrap_carries_error() {
    assert_eq!(err::<i32, &str>("e").try_unwrap(), Err(UnwrapError::ErrResult("e")));
    assert_eq!(ok::<i32, &str>(1).try_unwrap_err(), Err(UnwrapError::OkResult));
}

#[rstest]
#[should_panic(expected = "Attempted to unwrap err result: \"boom\"")]
fn unsafe_unwrap_reports_held_error() {
    let _ = err::<i32, &str>("boom").unsafe_unwrap();
}

#[rstest]
#[should_panic(expected = "tried unwrapping an Ok value as an error")]
fn unsafe_unwrap_err_on_ok() {
    let _ = ok::<i32, &str>(1).unsafe_unwrap_err();
}

// =============================================================================
// Panic capture
// =============================================================================

#[rstest]
fn wrap_keeps_non_string_payload() {
    let result = Result::wrap(|| -> i32 { std::panic::panic_any(42_u8) });
    let thrown: Thrown = result.unsafe_unwrap_err();

    assert_eq!(thrown.message(), None);
    assert_eq!(thrown.downcast::<u8>().ok(), Some(42));
}

#[rstest]
fn wrap_or_substitutes_fixed_error() {
    assert_eq!(Result::wrap_or(|| 1, "failed"), ok(1));
    assert_eq!(Result::wrap_or(|| -> i32 { panic!("hidden") }, "failed"), err("failed"));
}

#[rstest]
fn wrap_or_else_maps_thrown() {
    let result = Result::wrap_or_else(
        || -> i32 { panic!("code 7") },
        |thrown| thrown.message().map(str::len).unwrap_or_default(),
    );
    assert_eq!(result, err(6));
}

// =============================================================================
// Aggregation
// =============================================================================

#[rstest]
fn all_stops_pulling_at_first_err() {
    let pulled = Cell::new(0);
    let inputs = [ok(1), err("x"), ok(3)].into_iter().inspect(|_| {
        pulled.set(pulled.get() + 1);
    });

    assert_eq!(Result::all(inputs), err("x"));
    assert_eq!(pulled.get(), 2);
}

#[rstest]
fn any_stops_pulling_at_first_ok() {
    let pulled = Cell::new(0);
    let inputs = [err("a"), ok(2), ok(3)].into_iter().inspect(|_| {
        pulled.set(pulled.get() + 1);
    });

    assert_eq!(Result::any(inputs), ok(2));
    assert_eq!(pulled.get(), 2);
}

#[rstest]
fn any_of_nothing_is_empty_err() {
    assert_eq!(Result::any(Vec::<Result<i32, &str>>::new()), err(vec![]));
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn iteration() {
    assert_eq!(ok::<Vec<i32>, &str>(vec![1, 2]).into_iter().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(err::<Vec<i32>, &str>("e").into_iter().count(), 0);
    assert_eq!(ok::<i32, &str>(5).iter().collect::<Vec<_>>(), vec![&5]);
}

#[rstest]
fn flatten_and_collect() {
    assert_eq!(ok::<Result<i32, &str>, &str>(ok(1)).flatten(), ok(1));
    let collected: Result<Vec<i32>, &str> = vec![ok(1), err("e"), ok(3)].into_iter().collect();
    assert_eq!(collected, err("e"));
}
