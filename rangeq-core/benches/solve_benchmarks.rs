//! Range query engine benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rangeq_core::{solve, PrefixTables, QueryExecutor, RangeQuery};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [1_000usize, 100_000, 1_000_000] {
        let array: Vec<i64> = (0..size as i64).map(|i| (i * 31) % 1_000 - 500).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &array, |b, array| {
            b.iter(|| PrefixTables::build(black_box(array)));
        });
    }

    group.finish();
}

fn bench_answer(c: &mut Criterion) {
    let mut group = c.benchmark_group("answer");

    let array: Vec<i64> = (0..100_000i64).map(|i| (i * 17) % 2_000 - 1_000).collect();
    let executor = QueryExecutor::new(array);

    group.bench_function("sum", |b| {
        let query = RangeQuery::sum(1_234, 98_765);
        b.iter(|| executor.answer(black_box(&query)));
    });

    group.bench_function("parity_diff", |b| {
        let query = RangeQuery::parity_diff(1_234, 98_765);
        b.iter(|| executor.answer(black_box(&query)));
    });

    group.finish();
}

fn bench_solve_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_batch");

    let array: Vec<i64> = (0..10_000i64).collect();
    let queries: Vec<RangeQuery> = (0..1_000usize)
        .map(|i| {
            let start = (i * 7) % 5_000;
            let end = start + (i * 13) % 4_000;
            if i % 2 == 0 {
                RangeQuery::sum(start, end)
            } else {
                RangeQuery::parity_diff(start, end)
            }
        })
        .collect();

    group.bench_function("mixed_1000_queries", |b| {
        b.iter(|| solve(black_box(array.clone()), black_box(&queries)));
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_answer, bench_solve_batch);
criterion_main!(benches);
