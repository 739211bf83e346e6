pub mod config;
pub mod dsp;
pub mod error;
pub mod graph; // Unit-generator graphs
pub mod io;
pub mod synth; // Block scheduling against an audio sink

pub use config::EngineConfig;

pub const MAX_BLOCK_SIZE: usize = 2048;
