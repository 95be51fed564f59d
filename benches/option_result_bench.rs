//! Benchmark for the synchronous `Option` and `Result` combinators.
//!
//! Compares chains on this crate's types against the same chains on the
//! standard library types, and measures `all` / `any` over growing inputs.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use optres::{Option, Result, err, none, ok, some};
use std::hint::black_box;

// =============================================================================
// Chaining Benchmarks
// =============================================================================

fn benchmark_option_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("option_chain");

    group.bench_function("optres_map_and_then", |bencher| {
        bencher.iter(|| {
            let value = some(black_box(21))
                .map(|x| x * 2)
                .and_then(|x| if x > 0 { some(x) } else { none() })
                .unwrap_or(0);
            black_box(value)
        });
    });

    group.bench_function("std_map_and_then", |bencher| {
        bencher.iter(|| {
            let value = Some(black_box(21))
                .map(|x| x * 2)
                .and_then(|x| if x > 0 { Some(x) } else { None })
                .unwrap_or(0);
            black_box(value)
        });
    });

    group.finish();
}

fn benchmark_result_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("result_chain");

    group.bench_function("optres_ok_path", |bencher| {
        bencher.iter(|| {
            let value: Result<i32, String> = ok(black_box(4));
            black_box(
                value
                    .map(|x| x + 1)
                    .and_then(|x| if x % 5 == 0 { ok(x) } else { err(String::from("odd")) })
                    .unwrap_or_default(),
            )
        });
    });

    group.bench_function("optres_err_path", |bencher| {
        bencher.iter(|| {
            let value: Result<i32, String> = err(String::from("failed"));
            black_box(
                value
                    .map(|x| x + 1)
                    .or_else(|error| err::<i32, usize>(error.len()))
                    .unwrap_err_or(0),
            )
        });
    });

    group.bench_function("std_ok_path", |bencher| {
        bencher.iter(|| {
            let value: std::result::Result<i32, String> = Ok(black_box(4));
            black_box(
                value
                    .map(|x| x + 1)
                    .and_then(|x| if x % 5 == 0 { Ok(x) } else { Err(String::from("odd")) })
                    .unwrap_or_default(),
            )
        });
    });

    group.finish();
}

// =============================================================================
// Aggregation Benchmarks
// =============================================================================

fn benchmark_aggregation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("aggregation");

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        let options: Vec<Option<usize>> = (0..size).map(some).collect();
        group.bench_with_input(BenchmarkId::new("option_all", size), &options, |bencher, options| {
            bencher.iter(|| black_box(Option::all(options.iter().copied())));
        });

        let results: Vec<Result<usize, usize>> = (0..size).map(err).collect();
        group.bench_with_input(BenchmarkId::new("result_any_all_err", size), &results, |bencher, results| {
            bencher.iter(|| black_box(Result::any(results.iter().copied())));
        });
    }

    group.finish();
}

// =============================================================================
// Panic Capture Benchmarks
// =============================================================================

fn benchmark_wrap(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("wrap");

    group.bench_function("result_wrap_no_panic", |bencher| {
        bencher.iter(|| black_box(Result::wrap(|| black_box(7) * 6)));
    });

    group.bench_function("option_wrap_no_panic", |bencher| {
        bencher.iter(|| black_box(Option::wrap(|| black_box(7) * 6)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_option_chain,
    benchmark_result_chain,
    benchmark_aggregation,
    benchmark_wrap
);
criterion_main!(benches);
