//! Low-level DSP primitives used by the unit generators.
//!
//! These components are allocation-free on the render path and know nothing
//! about wires or graphs. The `graph` module wraps them into pullable unit
//! generators.

/// Random impulse generation with a cached density.
pub mod dust;
/// Planar to interleaved stereo conversion.
pub mod interleave;
/// In-place multiply, add and fused multiply-add kernels.
pub mod mul_add;
/// Sine wavetable and phase scanning.
pub mod wavetable;
