//! Criterion benches for the orthogonal generator.
//!
//! - `fill`: caller-owned buffers, major in {10, 50, 100, 200}, one run.
//! - `runs`: major = 50 with 1, 4 and 16 runs.
//! - `mt19937`: the same fill driven by the Mersenne Twister stream.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use orthosample::api::{create_stream, Mt19937, OrthoParams, OrthogonalSampler, PointSampler};

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("ortho_fill");
    for &major in &[10usize, 50, 100, 200] {
        let sampler = OrthogonalSampler::new(OrthoParams::new(major, 1)).unwrap();
        let n = sampler.point_count();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("std_rng", major), &major, |b, _| {
            let mut re = vec![0.0; n];
            let mut im = vec![0.0; n];
            let mut rng = create_stream(0);
            b.iter(|| sampler.fill(&mut rng, &mut re, &mut im).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("mt19937", major), &major, |b, _| {
            let mut re = vec![0.0; n];
            let mut im = vec![0.0; n];
            let mut rng = Mt19937::default();
            b.iter(|| sampler.fill(&mut rng, &mut re, &mut im).unwrap());
        });
    }
    group.finish();
}

fn bench_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("ortho_runs");
    for &runs in &[1usize, 4, 16] {
        let sampler = OrthogonalSampler::new(OrthoParams::new(50, runs)).unwrap();
        group.throughput(Throughput::Elements(sampler.point_count() as u64));
        group.bench_with_input(BenchmarkId::new("generate", runs), &runs, |b, _| {
            b.iter(|| sampler.generate().unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fill, bench_runs);
criterion_main!(benches);
