use crate::{
    config::EngineConfig,
    dsp::dust::ImpulseBlock,
    error::{BuildError, PullError},
    graph::{
        buffer::SignalBuffer,
        context::PullCtx,
        modulate::{self, ADD, MUL},
        node::{Signal, UGen},
        wire::Inputs,
    },
};

/// Random impulses at an average `density` per second.
///
/// `density` is read once per block (its first sample); everything else in
/// the graph runs at audio rate. See `dsp/dust.rs` for the math.
pub struct Dust {
    impulses: ImpulseBlock,
    inputs: Inputs,
    output: SignalBuffer,
}

impl Dust {
    pub const KIND: &'static str = "dust";
    pub const DENSITY: &'static str = "density";
    const INPUTS: &'static [&'static str] = &[Self::DENSITY, MUL, ADD];

    pub fn build(
        inputs: Inputs,
        output: SignalBuffer,
        config: &EngineConfig,
    ) -> Result<Box<dyn UGen>, BuildError> {
        inputs.accept_only(Self::KIND, Self::INPUTS, &[])?;
        inputs.require(Self::KIND, Self::DENSITY)?;

        Ok(Box::new(Self {
            impulses: ImpulseBlock::new(config.sample_rate, config.seed),
            inputs,
            output,
        }))
    }

    /// Density the cached threshold was computed for.
    pub fn density(&self) -> f32 {
        self.impulses.density()
    }
}

impl UGen for Dust {
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
        ctx.evaluate(self.inputs.wire_mut(Self::KIND, Self::DENSITY)?, num_samples)?;
        let density = ctx
            .read(self.inputs.wire(Self::KIND, Self::DENSITY)?, num_samples)?
            .first()
            .first()
            .copied()
            .unwrap_or(0.0);
        self.impulses.set_density(density);

        self.impulses.render(self.output.block_mut(num_samples));

        modulate::mul_add(ctx, &mut self.inputs, self.output.block_mut(num_samples))
    }

    fn output(&self, num_samples: usize) -> Signal<'_> {
        Signal::Mono(self.output.view(num_samples))
    }
}
