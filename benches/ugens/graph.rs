//! Benchmarks for built graphs.
//!
//! These pull whole definitions through the output stage, so they include
//! wire evaluation and memoization overhead on top of the kernels.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ugen_dsp::{
    graph::{build, Graph, InputDef, Registry, UGenDef},
    EngineConfig,
};

use crate::BLOCK_SIZES;

fn graph(def: &UGenDef) -> Graph {
    let config = EngineConfig::default().with_sample_rate(48_000).with_seed(1);
    build(def, &Registry::default(), config).expect("benchmark graph builds")
}

pub fn bench_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph");

    // === SINGLE TONE ===
    // out ← sinOsc(440) × 0.25: the smallest useful graph
    let tone = UGenDef::new("out").input(
        "source",
        UGenDef::new("sinOsc").input("freq", 440.0).input("mul", 0.25),
    );

    // === FREQUENCY MODULATION ===
    // lfo drives the carrier frequency every sample
    let vibrato = UGenDef::new("out").input(
        "source",
        UGenDef::new("sinOsc").input("mul", 0.25).input(
            "freq",
            UGenDef::new("sinOsc")
                .input("freq", 6.0)
                .input("mul", 10.0)
                .input("add", 440.0),
        ),
    );

    // === SHARED SOURCE ===
    // one oscillator feeding both channels, computed once per block
    let shared = UGenDef::new("out").input(
        "source",
        UGenDef::new("stereo")
            .input("left", UGenDef::new("sinOsc").id("lfo").input("freq", 220.0))
            .input("right", InputDef::reference("lfo")),
    );

    // === NOISE BURSTS ===
    let crackle = UGenDef::new("out").input(
        "source",
        UGenDef::new("dust").input("density", 200.0).input("mul", 0.5),
    );

    for (name, def) in [
        ("tone", &tone),
        ("vibrato", &vibrato),
        ("shared", &shared),
        ("crackle", &crackle),
    ] {
        for &size in BLOCK_SIZES {
            let mut graph = graph(def);
            let mut dest = vec![0.0f32; size * 2];
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, &size| {
                b.iter(|| {
                    graph
                        .write_output(black_box(&mut dest), size, 0)
                        .expect("benchmark graph renders");
                })
            });
        }
    }

    group.finish();
}
