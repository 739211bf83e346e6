//! Benchmarks for random impulses.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ugen_dsp::dsp::dust::ImpulseBlock;

use crate::BLOCK_SIZES;

pub fn bench_dust(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/dust");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Sparse: a handful of impulses per second
        let mut sparse = ImpulseBlock::new(48_000, Some(1));
        sparse.set_density(10.0);
        group.bench_with_input(BenchmarkId::new("sparse", size), &size, |b, _| {
            b.iter(|| {
                sparse.render(black_box(&mut buffer));
            })
        });

        // Dense: most samples carry an impulse
        let mut dense = ImpulseBlock::new(48_000, Some(1));
        dense.set_density(40_000.0);
        group.bench_with_input(BenchmarkId::new("dense", size), &size, |b, _| {
            b.iter(|| {
                dense.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
