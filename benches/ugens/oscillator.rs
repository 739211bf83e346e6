//! Benchmarks for the wavetable sine and mul/add kernels.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ugen_dsp::dsp::{mul_add, wavetable::Wavetable};

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        let freq = vec![440.0f32; size];
        let mul = vec![0.5f32; size];
        let add = vec![0.1f32; size];

        // Table lookup, one phase step per sample
        let mut table = Wavetable::sine(48_000);
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                table.render(black_box(&mut buffer), black_box(&freq));
            })
        });

        group.bench_with_input(BenchmarkId::new("mul_add", size), &size, |b, _| {
            b.iter(|| {
                mul_add::multiply_add(black_box(&mut buffer), black_box(&mul), black_box(&add));
            })
        });
    }

    group.finish();
}
