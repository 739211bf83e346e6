use crate::{
    config::EngineConfig,
    dsp::interleave::interleave,
    error::{BuildError, PullError},
    graph::{
        buffer::SignalBuffer,
        context::PullCtx,
        node::{Signal, UGen},
        wire::Inputs,
    },
};

/*
Output Stage
============

The last node before the device. It pulls its `source` and writes
interleaved stereo frames:

    dest[offset + 2i]     = left[i]
    dest[offset + 2i + 1] = right[i]

A stereo source supplies left and right directly; a mono source is copied
to both sides.

The destination normally belongs to the caller (the playback scheduler's
device buffer), and `offset` lets it be filled in chunks:

    chunk 0  →  write_frames(64, dest, 0)
    chunk 1  →  write_frames(64, dest, 128)
    ...

Pulled like any other generator, the stage interleaves into its own buffer
instead, which then holds 2 × num_frames samples. There is no mul/add on
this stage.
*/

pub struct Out {
    inputs: Inputs,
    output: SignalBuffer,
}

impl Out {
    pub const KIND: &'static str = "out";
    pub const SOURCE: &'static str = "source";
    const INPUTS: &'static [&'static str] = &[Self::SOURCE];

    pub fn build(
        inputs: Inputs,
        output: SignalBuffer,
        _config: &EngineConfig,
    ) -> Result<Box<dyn UGen>, BuildError> {
        inputs.accept_only(Self::KIND, Self::INPUTS, &[])?;
        inputs.require(Self::KIND, Self::SOURCE)?;
        Ok(Box::new(Self { inputs, output }))
    }

    fn render(
        inputs: &mut Inputs,
        ctx: &mut PullCtx<'_>,
        num_frames: usize,
        dest: &mut [f32],
        offset: usize,
    ) -> Result<(), PullError> {
        ctx.evaluate(inputs.wire_mut(Self::KIND, Self::SOURCE)?, num_frames)?;
        let (left, right) = ctx
            .read(inputs.wire(Self::KIND, Self::SOURCE)?, num_frames)?
            .stereo();

        let required = left
            .len()
            .checked_mul(2)
            .and_then(|samples| samples.checked_add(offset));
        match required {
            Some(required) if required <= dest.len() => {}
            _ => {
                return Err(PullError::DestinationTooSmall {
                    required: required.unwrap_or(usize::MAX),
                    available: dest.len(),
                })
            }
        }

        interleave(left, right, dest, offset);
        Ok(())
    }
}

impl UGen for Out {
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
        let dest = self.output.block_mut(num_samples * 2);
        Self::render(&mut self.inputs, ctx, num_samples, dest, 0)
    }

    /// Interleaved frames: `2 × num_samples` values.
    fn output(&self, num_samples: usize) -> Signal<'_> {
        Signal::Mono(self.output.view(num_samples * 2))
    }

    fn write_frames(
        &mut self,
        ctx: &mut PullCtx<'_>,
        num_frames: usize,
        dest: &mut [f32],
        offset: usize,
    ) -> Result<(), PullError> {
        Self::render(&mut self.inputs, ctx, num_frames, dest, offset)
    }
}
