//! Criterion benches comparing the three samplers at equal point counts.
//!
//! Orthogonal uses `major = 100` (10 000 points); pure and LHS draw 10 000 points.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use orthosample::api::{LatinParams, OrthoParams, PointSampler, PureParams, Sampler};

fn bench_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler_generate");
    let samplers = [
        Sampler::pure(PureParams::new(10_000)).unwrap(),
        Sampler::latin(LatinParams::new(10_000)).unwrap(),
        Sampler::orthogonal(OrthoParams::new(100, 1)).unwrap(),
    ];
    for sampler in &samplers {
        group.bench_function(BenchmarkId::new(sampler.method().name(), 10_000), |b| {
            b.iter_batched(
                || sampler.clone(),
                |s| {
                    let _ = s.generate().unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_methods);
criterion_main!(benches);
