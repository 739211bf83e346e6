//! Planar to interleaved stereo conversion.

/// Write `left`/`right` as interleaved stereo frames into `dest`, starting at
/// sample index `offset`:
///
/// ```text
/// dest[offset + 2i]     = left[i]
/// dest[offset + 2i + 1] = right[i]
/// ```
///
/// `dest` must hold at least `offset + 2 × left.len()` samples.
#[inline]
pub fn interleave(left: &[f32], right: &[f32], dest: &mut [f32], offset: usize) {
    debug_assert_eq!(left.len(), right.len());

    let frames = &mut dest[offset..offset + left.len() * 2];
    for ((frame, &l), &r) in frames.chunks_exact_mut(2).zip(left).zip(right) {
        frame[0] = l;
        frame[1] = r;
    }
}
