use crate::{
    config::EngineConfig,
    error::{BuildError, PullError},
    graph::{
        buffer::SignalBuffer,
        context::PullCtx,
        node::{Rate, Signal, UGen},
        wire::Inputs,
    },
};

/// Constant generator: a buffer uniformly filled with one scalar.
///
/// Bare numbers in a definition are promoted to a `Value`, so
/// `"freq": 440` and `"freq": { "type": "value", "inputs": { "value": 440 } }`
/// build the same graph.
pub struct Value {
    value: f32,
    inputs: Inputs,
    output: SignalBuffer,
}

impl Value {
    pub const KIND: &'static str = "value";
    /// Scalar parameter, consumed directly instead of through a wire.
    pub const VALUE: &'static str = "value";

    pub fn new(value: f32, block_size: usize) -> Self {
        let mut inputs = Inputs::new();
        inputs.insert_literal(Self::VALUE, value);
        let mut output = SignalBuffer::new(block_size);
        output.fill(value);
        Self {
            value,
            inputs,
            output,
        }
    }

    pub fn build(
        inputs: Inputs,
        output: SignalBuffer,
        _config: &EngineConfig,
    ) -> Result<Box<dyn UGen>, BuildError> {
        inputs.accept_only(Self::KIND, &[], &[Self::VALUE])?;
        let value = inputs.literal(Self::VALUE).ok_or(BuildError::MissingInput {
            kind: Self::KIND,
            input: Self::VALUE,
        })?;

        let mut output = output;
        output.fill(value);
        Ok(Box::new(Self {
            value,
            inputs,
            output,
        }))
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        self.inputs.insert_literal(Self::VALUE, value);
        self.output.fill(value);
    }
}

impl UGen for Value {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn rate(&self) -> Rate {
        Rate::Control
    }

    fn input_names(&self) -> &'static [&'static str] {
        &[]
    }

    fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    fn inputs_mut(&mut self) -> &mut Inputs {
        &mut self.inputs
    }

    fn generate(&mut self, _ctx: &mut PullCtx<'_>, num_samples: usize) -> Result<(), PullError> {
        // Contents never change; only a grown buffer needs filling
        if self.output.ensure(num_samples) {
            self.output.fill(self.value);
        }
        Ok(())
    }

    fn output(&self, num_samples: usize) -> Signal<'_> {
        Signal::Mono(self.output.view(num_samples))
    }

    fn constant(&self) -> Option<f32> {
        Some(self.value)
    }

    fn set_literal(&mut self, name: &str, value: f32) -> bool {
        if name == Self::VALUE {
            self.set_value(value);
            true
        } else {
            false
        }
    }
}
