//! Estimator benchmarks.
//!
//! Run with: `cargo bench --package kiraya-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kiraya_bench::{query_grid, synthetic_dataset};
use kiraya_lib::prelude::*;
use std::hint::black_box;

fn estimate_benchmark(c: &mut Criterion) {
    let estimator = Estimator::default();
    let queries = query_grid();

    let mut group = c.benchmark_group("estimate");
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("embedded", |b| {
        let dataset = ReferenceDataset::global();
        b.iter(|| {
            for query in &queries {
                black_box(estimator.estimate(black_box(query), dataset));
            }
        });
    });

    for len in [1_000, 10_000] {
        let dataset = synthetic_dataset(len).expect("synthetic dataset should be valid");
        group.bench_with_input(BenchmarkId::new("synthetic", len), &dataset, |b, dataset| {
            b.iter(|| {
                for query in &queries {
                    black_box(estimator.estimate(black_box(query), dataset));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, estimate_benchmark);
criterion_main!(benches);
