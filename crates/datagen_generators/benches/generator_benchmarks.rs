//! Criterion benchmarks for the position generator.
//!
//! Compares the binary and text encodings and measures batch scaling across
//! worker counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use datagen_core::{DatagenRng, DocumentBuffer};
use datagen_generators::{generate_batch, BatchConfig, Encoding, PositionGenerator, ValueGenerator};

/// Benchmark a single value in each encoding.
fn bench_encodings(c: &mut Criterion) {
    let generator = PositionGenerator::new(Some(&[-4.5, 53.0]), Some(&[1.7, 50.0]));
    let mut group = c.benchmark_group("position_encode");

    group.bench_function("binary", |b| {
        let mut rng = DatagenRng::from_seed(42);
        let mut buffer = DocumentBuffer::with_capacity(64);
        b.iter(|| {
            buffer.clear();
            generator.encode_value(&mut rng, black_box(&mut buffer));
        });
    });

    group.bench_function("text", |b| {
        let mut rng = DatagenRng::from_seed(42);
        let mut buffer = DocumentBuffer::with_capacity(64);
        b.iter(|| {
            buffer.clear();
            generator.encode_value_as_string(&mut rng, black_box(&mut buffer));
        });
    });

    group.finish();
}

/// Benchmark 100k binary values across worker counts.
fn bench_batch(c: &mut Criterion) {
    let generator = PositionGenerator::default();
    let mut group = c.benchmark_group("position_batch");
    group.sample_size(20);

    for workers in [1usize, 2, 4, 8] {
        let config = BatchConfig {
            count: 100_000,
            seed: 7,
            workers,
            encoding: Encoding::Binary,
        };
        group.bench_with_input(BenchmarkId::from_parameter(workers), &config, |b, config| {
            b.iter(|| black_box(generate_batch(&generator, config)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encodings, bench_batch);
criterion_main!(benches);
