//! Wavetable sine oscillator core.

/*
Wavetable Lookup
================

Instead of calling sin() for every sample, one cycle of the waveform is
computed once and then scanned at a speed proportional to the frequency.

The table holds exactly `sample_rate` entries, so one cycle sampled at the
audio rate:

    table[i] = sin(2π × i / sample_rate)

Scanning
--------

A fractional read position ("phase") walks through the table. Each sample:

    output     = table[floor(phase)]
    phase     += freq × table_len / sample_rate
    if phase >= table_len: phase -= table_len

Because table_len == sample_rate the increment is numerically the frequency
itself: a 440 Hz tone advances 440 entries per sample and wraps 440 times a
second.

No interpolation is done; with a table this long the truncation error sits
far below audibility for musical frequencies.

Limits
------

The wrap is a single subtraction, so it only keeps the phase inside the
table while the per-sample increment is smaller than the table, i.e.
freq < sample_rate. Faster frequencies alias anyway; the read wraps the
index so they produce garbage, never a panic. Negative frequencies scan
backwards and wrap with a single addition.
*/

use std::f64::consts::TAU;

/// Generate one cycle of a sine wave, `len` samples long.
pub fn sine_table(len: usize) -> Box<[f32]> {
    let scale = TAU / len as f64;
    (0..len).map(|i| (i as f64 * scale).sin() as f32).collect()
}

pub struct Wavetable {
    table: Box<[f32]>,
    phase: f64,
    sample_rate: f64,
}

impl Wavetable {
    /// Sine table sized to the sample rate.
    pub fn sine(sample_rate: u32) -> Self {
        Self {
            table: sine_table(sample_rate as usize),
            phase: 0.0,
            sample_rate: sample_rate as f64,
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Scan the table at a per-sample frequency.
    ///
    /// `freq` must be at least as long as `out`.
    pub fn render(&mut self, out: &mut [f32], freq: &[f32]) {
        debug_assert!(freq.len() >= out.len());

        let table_len = self.table.len();
        if table_len == 0 {
            out.fill(0.0);
            return;
        }

        let len = table_len as f64;
        let step = len / self.sample_rate;
        let mut phase = self.phase;

        for (o, &f) in out.iter_mut().zip(freq.iter()) {
            *o = self.table[phase as usize % table_len];
            phase += f as f64 * step;
            if phase >= len {
                phase -= len;
            } else if phase < 0.0 {
                phase += len;
            }
        }

        self.phase = phase;
    }
}
