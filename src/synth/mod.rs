// Purpose: keep an audio sink fed from a graph's output stage
// This layer sits above the graph and decides how many frames to render

pub mod player;

pub use player::Synth;
