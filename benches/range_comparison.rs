//! Benchmark comparing `numeric_range` iteration against `core::ops::Range`
//!
//! The lazy range validates once and then pays a multiply-add per term, so
//! these groups show the cost of that over the standard library's
//! increment-only iterators, and how `BigInt` terms scale.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_bigint::BigInt;
use numeric_range::{range, range_with, Limit, NumericRange, RangeOptions};
use std::hint::black_box;

const SMALL_SIZE: i64 = 1_000;
const MEDIUM_SIZE: i64 = 100_000;
const LARGE_SIZE: i64 = 1_000_000;

/// Benchmark: Sum every term of an ascending range with the default step
fn bench_sum_default_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_default_step");

    for size in [SMALL_SIZE, MEDIUM_SIZE, LARGE_SIZE] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Range<i64>", size), &size, |b, &size| {
            b.iter(|| {
                let sum: i64 = (0..black_box(size)).sum();
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("range::<i64>", size), &size, |b, &size| {
            b.iter(|| {
                let mut sum: i64 = 0;
                for value in range(0_i64, black_box(size)) {
                    sum += value.unwrap_or_default();
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("range::<f64>", size), &size, |b, &size| {
            b.iter(|| {
                let mut sum: f64 = 0.0;
                for value in range(0.0, black_box(size as f64)) {
                    sum += value.unwrap_or_default();
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

/// Benchmark: Sum a stepped range against `StepBy`
fn bench_sum_with_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_with_step");
    let step = 7_i64;

    for size in [MEDIUM_SIZE, LARGE_SIZE] {
        group.throughput(Throughput::Elements((size / step) as u64));

        group.bench_with_input(BenchmarkId::new("StepBy<Range<i64>>", size), &size, |b, &size| {
            b.iter(|| {
                let sum: i64 = (0..black_box(size)).step_by(step as usize).sum();
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("range_with::<i64>", size), &size, |b, &size| {
            b.iter(|| {
                let mut sum: i64 = 0;
                for value in range_with(0_i64, black_box(size), step) {
                    sum += value.unwrap_or_default();
                }
                black_box(sum)
            })
        });

        group.bench_with_input(
            BenchmarkId::new("range_with::<i64> inclusive", size),
            &size,
            |b, &size| {
                let options = RangeOptions::new().step(step).inclusive(true);
                b.iter(|| {
                    let mut sum: i64 = 0;
                    for value in range_with(0_i64, black_box(size), options) {
                        sum += value.unwrap_or_default();
                    }
                    black_box(sum)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: Pull a prefix of an unbounded range
fn bench_unbounded_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("unbounded_prefix");

    for take in [SMALL_SIZE as usize, MEDIUM_SIZE as usize] {
        group.throughput(Throughput::Elements(take as u64));

        group.bench_with_input(BenchmarkId::new("RangeFrom<i64>", take), &take, |b, &take| {
            b.iter(|| {
                let sum: i64 = (0_i64..).take(black_box(take)).sum();
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("range::<i64>", take), &take, |b, &take| {
            b.iter(|| {
                let count = range(0_i64, Limit::Infinity)
                    .take(black_box(take))
                    .filter(Result::is_ok)
                    .count();
                black_box(count)
            })
        });

        group.bench_with_input(BenchmarkId::new("range::<BigInt>", take), &take, |b, &take| {
            b.iter(|| {
                let mut sum = BigInt::from(0);
                for value in range(BigInt::from(0), Limit::Infinity).take(black_box(take)) {
                    if let Ok(value) = value {
                        sum += value;
                    }
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

/// Benchmark: Cost of building and validating a range without consuming it
fn bench_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("creation");
    let count = 10_000_i64;
    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("NumericRange::new (no validation)", |b| {
        b.iter(|| {
            for i in 0..count {
                black_box(NumericRange::new(black_box(i), i + 10));
            }
        })
    });

    group.bench_function("range(..).next() (validation + first term)", |b| {
        b.iter(|| {
            for i in 0..count {
                black_box(range(black_box(i), i + 10).next());
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_sum_default_step,
    bench_sum_with_step,
    bench_unbounded_prefix,
    bench_creation,
);

criterion_main!(benches);
