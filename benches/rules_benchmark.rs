//! Benchmarks for the comparison rules.
//!
//! Every comparison is tiny; these keep an eye on the per-call overhead,
//! including the disabled `tracing` events.

#![allow(missing_docs)] // Benchmark macros generate undocumented functions

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use trunfo::{Attribute, Card, RawCard, analyze_advanced, compare, score_all};

fn city(population: u32, area: f64, gdp: f64, tourist_spots: u32) -> Card {
    Card::new(RawCard {
        state: "SP".to_string(),
        code: "A01".to_string(),
        name: "Bench".to_string(),
        population,
        area,
        gdp,
        tourist_spots,
    })
}

fn bench_compare(c: &mut Criterion) {
    let a = city(12_000_000, 1_500.0, 700_000.0, 50);
    let b = city(2_000_000, 3_000.0, 150_000.0, 80);

    c.bench_function("compare_density", |bench| {
        bench.iter(|| compare(black_box(&a), black_box(&b), black_box(Attribute::Density)));
    });
}

fn bench_score_all(c: &mut Criterion) {
    let a = city(12_000_000, 1_500.0, 700_000.0, 50);
    let b = city(2_000_000, 3_000.0, 150_000.0, 80);

    c.bench_function("score_all", |bench| {
        bench.iter(|| score_all(black_box(&a), black_box(&b)));
    });
}

fn bench_advanced_fallthrough(c: &mut Criterion) {
    // Identical cards evaluate all six heuristic checks before tying.
    let a = city(500_000, 250.0, 20_000.0, 12);
    let b = a.clone();

    c.bench_function("advanced_tie", |bench| {
        bench.iter(|| analyze_advanced(black_box(&a), black_box(&b)));
    });
}

criterion_group!(benches, bench_compare, bench_score_all, bench_advanced_fallthrough);
criterion_main!(benches);
