use crate::{
    config::EngineConfig,
    error::{BuildError, PullError},
    graph::{
        buffer::SignalBuffer,
        context::PullCtx,
        node::{Signal, UGen},
        wire::Inputs,
    },
};

/// Pairs two mono inputs into one stereo signal.
///
/// ```ignore
/// { "type": "out", "inputs": { "source": {
///     "type": "stereo",
///     "inputs": { "left":  { "type": "sinOsc", "inputs": { "freq": 440 } },
///                 "right": { "type": "sinOsc", "inputs": { "freq": 660 } } } } } }
/// ```
pub struct Stereo {
    inputs: Inputs,
    left: SignalBuffer,
    right: SignalBuffer,
}

impl Stereo {
    pub const KIND: &'static str = "stereo";
    pub const LEFT: &'static str = "left";
    pub const RIGHT: &'static str = "right";
    const INPUTS: &'static [&'static str] = &[Self::LEFT, Self::RIGHT];

    pub fn build(
        inputs: Inputs,
        output: SignalBuffer,
        _config: &EngineConfig,
    ) -> Result<Box<dyn UGen>, BuildError> {
        inputs.accept_only(Self::KIND, Self::INPUTS, &[])?;
        inputs.require(Self::KIND, Self::LEFT)?;
        inputs.require(Self::KIND, Self::RIGHT)?;

        let right = SignalBuffer::new(output.len());
        Ok(Box::new(Self {
            inputs,
            left: output,
            right,
        }))
    }
}

impl UGen for Stereo {
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
        ctx.evaluate(self.inputs.wire_mut(Self::KIND, Self::LEFT)?, num_samples)?;
        ctx.evaluate(self.inputs.wire_mut(Self::KIND, Self::RIGHT)?, num_samples)?;

        let left = ctx
            .read(self.inputs.wire(Self::KIND, Self::LEFT)?, num_samples)?
            .first();
        let right = ctx
            .read(self.inputs.wire(Self::KIND, Self::RIGHT)?, num_samples)?
            .first();

        for (dst, &src) in self.left.block_mut(num_samples).iter_mut().zip(left) {
            *dst = src;
        }
        for (dst, &src) in self.right.block_mut(num_samples).iter_mut().zip(right) {
            *dst = src;
        }
        Ok(())
    }

    fn output(&self, num_samples: usize) -> Signal<'_> {
        Signal::Stereo(self.left.view(num_samples), self.right.view(num_samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{context::Slot, wire::Wire};

    fn pair(left: f32, right: f32, config: &EngineConfig) -> Box<dyn UGen> {
        let mut inputs = Inputs::new();
        inputs.insert(Stereo::LEFT, Wire::constant(left, config));
        inputs.insert(Stereo::RIGHT, Wire::constant(right, config));
        Stereo::build(inputs, SignalBuffer::new(config.block_size), config).unwrap()
    }

    #[test]
    fn test_channels_kept_apart() {
        let config = EngineConfig::default().with_block_size(8);
        let mut stereo = pair(0.25, -0.75, &config);

        let mut slots: Vec<Slot> = Vec::new();
        let mut ctx = PullCtx::new(&mut slots, 1);
        stereo.generate(&mut ctx, 8).unwrap();

        let signal = stereo.output(8);
        assert_eq!(signal.channels(), 2);
        let (left, right) = signal.stereo();
        assert_eq!(left, &[0.25; 8]);
        assert_eq!(right, &[-0.75; 8]);
    }

    #[test]
    fn test_blocks_past_buffer_size_grow_both_sides() {
        let config = EngineConfig::default().with_block_size(4);
        let mut stereo = pair(1.0, -1.0, &config);

        for &n in &[2, 4, 100, 3] {
            let mut slots: Vec<Slot> = Vec::new();
            let mut ctx = PullCtx::new(&mut slots, 1);
            stereo.generate(&mut ctx, n).unwrap();

            let (left, right) = stereo.output(n).stereo();
            assert_eq!(left.len(), n);
            assert_eq!(right.len(), n);
            assert!(left.iter().all(|&s| s == 1.0));
            assert!(right.iter().all(|&s| s == -1.0));
        }
    }

    #[test]
    fn test_both_channels_required() {
        let config = EngineConfig::default();
        let mut inputs = Inputs::new();
        inputs.insert(Stereo::LEFT, Wire::constant(1.0, &config));
        let result = Stereo::build(inputs, SignalBuffer::new(8), &config);
        assert!(matches!(result, Err(BuildError::MissingInput { input: "right", .. })));
    }
}
