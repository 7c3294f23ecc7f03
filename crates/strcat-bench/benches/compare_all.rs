//! Criterion benchmark for the whole comparison pipeline.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strcat_bench::smoke_profile;
use strcat_core::run;
use strcat_test_utils::{config_with, CountingStrategy};

/// Benchmark: validate, generate, run all four strategies, build the report.
fn bench_compare_all_1k(c: &mut Criterion) {
    let config = smoke_profile();

    c.bench_function("compare_all_1k", |b| {
        b.iter(|| {
            let report = run(&config).unwrap();
            black_box(report.to_string());
        });
    });
}

/// Benchmark: pipeline overhead with a trivial strategy.
fn bench_pipeline_overhead(c: &mut Criterion) {
    let config = config_with(1, "noop", vec![Box::new(CountingStrategy::new("noop"))]);

    c.bench_function("pipeline_overhead", |b| {
        b.iter(|| {
            let report = run(&config).unwrap();
            black_box(&report);
        });
    });
}

criterion_group!(benches, bench_compare_all_1k, bench_pipeline_overhead);
criterion_main!(benches);
