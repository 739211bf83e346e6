/*
Signal Buffers
==============

Every generator owns exactly one output buffer and overwrites it on each
pull. Buffers are sized to the configured block size up front, so the
steady-state render path never allocates.

Block sizes may vary from pull to pull (a playback scheduler filling the
remainder of a device buffer, for example). A request for n samples:

    n <  len   →  view of the first n samples (no copy)
    n == len   →  the whole buffer
    n >  len   →  a new buffer of exactly n samples replaces the old one

Growth is monotonic: once a larger block has been seen, the buffer keeps
that size so the next large block is allocation-free again.
*/

#[derive(Debug, Clone, Default)]
pub struct SignalBuffer {
    samples: Vec<f32>,
}

impl SignalBuffer {
    /// A zeroed buffer of `len` samples.
    pub fn new(len: usize) -> Self {
        Self {
            samples: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Grow to `num_samples` if needed. Returns `true` when the buffer was
    /// reallocated (its contents are then zero).
    pub fn ensure(&mut self, num_samples: usize) -> bool {
        if num_samples > self.samples.len() {
            self.samples = vec![0.0; num_samples];
            true
        } else {
            false
        }
    }

    /// Writable block of exactly `num_samples`, growing first if needed.
    pub fn block_mut(&mut self, num_samples: usize) -> &mut [f32] {
        self.ensure(num_samples);
        &mut self.samples[..num_samples]
    }

    /// The first `num_samples` samples, clamped to the buffer length.
    pub fn view(&self, num_samples: usize) -> &[f32] {
        &self.samples[..num_samples.min(self.samples.len())]
    }

    pub fn fill(&mut self, value: f32) {
        self.samples.fill(value);
    }
}
