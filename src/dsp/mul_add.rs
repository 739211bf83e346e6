//! In-place multiply/add kernels.

/*
Multiply-Add
============

Every generator that supports modulation finishes its block with an optional
linear transform of its own output:

    output[i] = output[i] × mul[i] + add[i]

`mul` scales the signal (gain, tremolo, ring modulation when both are
audio-rate). `add` shifts it (DC offset, or turning a [-1, +1] oscillator
into a [base - depth, base + depth] control signal when combined with mul).

A typical vibrato patch uses exactly this:

    freq = sinOsc(freq: 5, mul: 6, add: 440)    →  434 .. 446 Hz
    out  = sinOsc(freq: <freq>)

Three kernels exist so the composer can skip work it does not need: one
multiply pass, one add pass, or a single fused pass when both are present.
All kernels work on equal-length slices and never allocate.
*/

/// Scale `out` by `mul` in place.
#[inline]
pub fn multiply(out: &mut [f32], mul: &[f32]) {
    debug_assert_eq!(out.len(), mul.len());

    for (o, &m) in out.iter_mut().zip(mul.iter()) {
        *o *= m;
    }
}

/// Offset `out` by `add` in place.
#[inline]
pub fn offset(out: &mut [f32], add: &[f32]) {
    debug_assert_eq!(out.len(), add.len());

    for (o, &a) in out.iter_mut().zip(add.iter()) {
        *o += a;
    }
}

/// Fused `out = out × mul + add` in place.
#[inline]
pub fn multiply_add(out: &mut [f32], mul: &[f32], add: &[f32]) {
    debug_assert_eq!(out.len(), mul.len());
    debug_assert_eq!(out.len(), add.len());

    for ((o, &m), &a) in out.iter_mut().zip(mul.iter()).zip(add.iter()) {
        *o = *o * m + a;
    }
}
