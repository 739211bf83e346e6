//! Unit-generator graphs pulled block by block.
//!
//! A graph is built from a declarative [`UGenDef`] tree. Every node is a
//! [`UGen`] that owns its output buffer; input slots are [`Wire`]s that point
//! at other nodes or carry a constant. Rendering pulls from the root: each
//! node evaluates its inputs for the requested block size, then computes its
//! own output.

/// Reusable sample storage for generator outputs.
pub mod buffer;
/// Definition tree to arena graph.
pub mod builder;
/// Arena access and per-block memoization during a pull.
pub mod context;
/// Serde model of graph definitions.
pub mod definition;
/// Sparse random impulses.
pub mod dust;
/// `mul`/`add` post-processing shared by generators.
pub mod modulate;
/// Core traits shared by all graph nodes.
pub mod node;
/// Wavetable sine oscillator.
pub mod oscillator;
/// Stereo output stage.
pub mod output;
/// Generator types by name.
pub mod registry;
/// Two mono inputs as one stereo signal.
pub mod stereo;
/// Built graph, pulls, and addressing.
pub mod ugen_graph;
/// Constant generator.
pub mod value;
/// Connections between generators.
pub mod wire;

pub use buffer::SignalBuffer;
pub use builder::build;
pub use context::PullCtx;
pub use definition::{InputDef, NodeRef, UGenDef};
pub use node::{NodeId, Rate, Signal, UGen};
pub use registry::{Factory, Registry};
pub use ugen_graph::{Graph, Source, Target, OUTPUT_ID};
pub use wire::{Inputs, Wire};
