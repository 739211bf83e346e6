//! Benchmarks for generator kernels and graphs.

mod dust;
mod graph;
mod oscillator;

pub use dust::bench_dust;
pub use graph::bench_graph;
pub use oscillator::bench_oscillator;
