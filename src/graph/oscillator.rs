use crate::{
    config::EngineConfig,
    dsp::wavetable::Wavetable,
    error::{BuildError, PullError},
    graph::{
        buffer::SignalBuffer,
        context::PullCtx,
        modulate::{self, ADD, MUL},
        node::{Signal, UGen},
        wire::Inputs,
    },
};

/*
Sine Oscillator
===============

Reads a one-cycle sine wavetable (see `dsp/wavetable.rs`) at the rate given
by its `freq` input.

Inputs:
  freq   frequency in Hz, audio rate: one value per output sample, so a
         wired oscillator gives true per-sample FM
  mul    optional gain (see `modulate.rs`)
  add    optional offset

Example usage:

  // Plain 440 Hz tone at half volume
  { "type": "sinOsc", "inputs": { "freq": 440, "mul": 0.5 } }

  // Vibrato: a 6 Hz oscillator swinging 440 ± 10 Hz drives the carrier
  { "type": "sinOsc", "inputs": {
      "freq": { "type": "sinOsc", "inputs": { "freq": 6, "mul": 10, "add": 440 } } } }

The phase runs continuously across pulls; it is never reset by a change of
block size or frequency.
*/

pub struct SinOsc {
    table: Wavetable,
    inputs: Inputs,
    output: SignalBuffer,
}

impl SinOsc {
    pub const KIND: &'static str = "sinOsc";
    pub const FREQ: &'static str = "freq";
    const INPUTS: &'static [&'static str] = &[Self::FREQ, MUL, ADD];

    pub fn build(
        inputs: Inputs,
        output: SignalBuffer,
        config: &EngineConfig,
    ) -> Result<Box<dyn UGen>, BuildError> {
        inputs.accept_only(Self::KIND, Self::INPUTS, &[])?;
        inputs.require(Self::KIND, Self::FREQ)?;

        Ok(Box::new(Self {
            table: Wavetable::sine(config.sample_rate),
            inputs,
            output,
        }))
    }

    /// Current read position in the wavetable.
    pub fn phase(&self) -> f64 {
        self.table.phase()
    }
}

impl UGen for SinOsc {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn input_names(&self) -> &'static [&'static str] {
        Self::INPUTS
    }

    fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    fn inputs_mut(&mut self) -> &mut Inputs {
        &mut self.inputs
    }

    fn generate(&mut self, ctx: &mut PullCtx<'_>, num_samples: usize) -> Result<(), PullError> {
        ctx.evaluate(self.inputs.wire_mut(Self::KIND, Self::FREQ)?, num_samples)?;
        let freq = ctx
            .read(self.inputs.wire(Self::KIND, Self::FREQ)?, num_samples)?
            .first();

        let out = self.output.block_mut(num_samples);
        self.table.render(out, freq);

        modulate::mul_add(ctx, &mut self.inputs, self.output.block_mut(num_samples))
    }

    fn output(&self, num_samples: usize) -> Signal<'_> {
        Signal::Mono(self.output.view(num_samples))
    }
}
