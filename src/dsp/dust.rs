//! Random impulse ("dust") generator core.

/*
Dust
====

Dust emits sparse random clicks: most samples are silent, and on average
`density` samples per second carry an impulse. It is the classic source for
crackle, rain and vinyl textures, and a cheap random trigger.

The Math
--------

Per sample a uniform random number r in [0, 1) is drawn:

    threshold = density / sample_rate       (probability of a click)
    scale     = 1 / threshold               (0 when threshold is 0)

    output    = r × scale    if r < threshold
                0            otherwise

Because r < threshold whenever a click fires, r × scale lands in [0, 1):
impulse heights are uniformly distributed regardless of density.

  density = 0              →  threshold 0, silence
  density = sample_rate    →  threshold 1, every sample is an impulse

Density Cache
-------------

Density is a control value: it is read once per block. threshold and scale
are only recomputed when it changes from one block to the next.
*/

use rand::{rngs::SmallRng, Rng, SeedableRng};

pub struct ImpulseBlock {
    density: f32,
    threshold: f32,
    scale: f32,
    sample_duration: f32,
    rng: SmallRng,
}

impl ImpulseBlock {
    /// `seed` makes the impulse sequence reproducible; `None` uses OS entropy.
    pub fn new(sample_rate: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Self {
            density: 0.0,
            threshold: 0.0,
            scale: 0.0,
            sample_duration: 1.0 / sample_rate as f32,
            rng,
        }
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Update the cached threshold and scale if `density` changed.
    pub fn set_density(&mut self, density: f32) {
        if density == self.density {
            return;
        }

        self.density = density;
        self.threshold = density * self.sample_duration;
        self.scale = if self.threshold > 0.0 {
            1.0 / self.threshold
        } else {
            0.0
        };
    }

    pub fn render(&mut self, out: &mut [f32]) {
        let threshold = self.threshold;
        let scale = self.scale;

        for o in out.iter_mut() {
            let r: f32 = self.rng.gen();
            *o = if r < threshold { r * scale } else { 0.0 };
        }
    }
}
