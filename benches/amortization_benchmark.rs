// ============================================================================
// Currency Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Codec - canonical text parse/format
// 2. Arithmetic - hot fixed-point operations
// 3. Amortization - full schedule generation at several loan lengths
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use currency_engine::prelude::*;

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    group.bench_function("parse", |b| {
        b.iter(|| black_box("123456.7890".parse::<Currency>().unwrap()))
    });

    let value = Currency::from_ticks(1_234_567_890);
    group.bench_function("format", |b| b.iter(|| black_box(value.to_string())));

    group.finish();
}

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let a = Currency::from_f64(1234.5678);
    let b_val = Currency::from_f64(8765.4321);

    group.bench_function("checked_mul", |b| {
        b.iter(|| black_box(a.checked_mul(b_val).unwrap()))
    });
    group.bench_function("mul_f64", |b| {
        b.iter(|| black_box(a.mul_f64(0.005).unwrap()))
    });
    group.bench_function("round_cents", |b| b.iter(|| black_box(a.round(2))));

    group.finish();
}

fn benchmark_amortization(c: &mut Criterion) {
    let mut group = c.benchmark_group("amortization");

    let principal = Currency::from_integer(100_000).unwrap();

    for periods in [12, 60, 360].iter() {
        group.bench_with_input(
            BenchmarkId::new("amortize", periods),
            periods,
            |b, &periods| {
                b.iter(|| black_box(amortize(principal, 0.005, periods, None).unwrap()));
            },
        );
    }

    group.bench_function("amortized_payment_360", |b| {
        b.iter(|| black_box(amortized_payment(principal, 0.005, 360).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_codec,
    benchmark_arithmetic,
    benchmark_amortization
);
criterion_main!(benches);
