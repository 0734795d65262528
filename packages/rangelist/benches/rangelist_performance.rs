//! Benchmarks of collecting and summarizing range lists of different shapes.

#![expect(missing_docs, reason = "benchmarks do not require API documentation")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

/// Inputs as (name, range list) pairs.
const INPUTS: &[(&str, &str)] = &[
    ("singles", "1,3,5,7,9,11,13,15,17,19,21,23,25,27,29,31"),
    ("mixed", "1, 3, 6-8, 12-15, 21-24, 31"),
    ("one_large_range", "0-9999"),
    ("unsorted_runs", "100-199, 0-99, 300-399, 200-299"),
];

fn collect_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("rangelist_collect");

    for &(name, text) in INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| rangelist::collect(black_box(text)).unwrap());
        });
    }

    group.finish();
}

fn summarize_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("rangelist_summarize");

    for &(name, text) in INPUTS {
        let items = rangelist::collect(text).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(name), &items, |b, items| {
            b.iter(|| rangelist::summarize(black_box(items)));
        });
    }

    group.finish();
}

criterion_group!(benches, collect_performance, summarize_performance);
criterion_main!(benches);
