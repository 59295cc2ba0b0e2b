//! Criterion benchmarks for blueprint parsing and network construction.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pulsenet_network::{parse_blueprint, Blueprint};
use pulsenet_test_utils::counter_branches;

fn stress_text() -> String {
    let periods: Vec<u64> = (0..16).map(|i| 4001 + 2 * i).collect();
    counter_branches(&periods)
}

/// Benchmark: parse a 16-branch description (~230 lines).
fn bench_parse_stress(c: &mut Criterion) {
    let text = stress_text();

    c.bench_function("parse_stress", |b| {
        b.iter(|| {
            black_box(parse_blueprint(black_box(&text)).unwrap());
        });
    });
}

/// Benchmark: build a network from an already-parsed blueprint.
fn bench_build_stress(c: &mut Criterion) {
    let bp: Blueprint = stress_text().parse().unwrap();

    c.bench_function("build_stress", |b| {
        b.iter(|| {
            black_box(bp.build().unwrap());
        });
    });
}

criterion_group!(benches, bench_parse_stress, bench_build_stress);
criterion_main!(benches);
