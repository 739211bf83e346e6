use crate::{
    dsp::mul_add as kernels,
    error::PullError,
    graph::{context::PullCtx, wire::Inputs},
};

/*
Mul/Add Composition
===================

Any generator that declares `mul` and `add` inputs finishes its block by
handing its freshly written output to `mul_add`:

    output[i] = output[i] × mul[i] + add[i]

Both inputs are ordinary wires, so they can be constants (promoted numbers)
or whole sub-graphs:

    { "type": "sinOsc",
      "inputs": { "freq": 440, "mul": { "type": "sinOsc", "inputs": { "freq": 2 } } } }

is a 440 Hz tone with a 2 Hz tremolo.

The inputs are looked up by name on every block because they can be
replaced between pulls. Work is only done for what is wired:

    neither    →  output untouched, nothing pulled
    mul only   →  one multiply pass
    add only   →  one add pass
    both       →  one fused multiply-add pass

`mul` is pulled before `add`, both for the host's block length.
*/

pub const MUL: &str = "mul";
pub const ADD: &str = "add";

/// Apply the generator's optional `mul`/`add` inputs to `out` in place.
pub fn mul_add(ctx: &mut PullCtx<'_>, inputs: &mut Inputs, out: &mut [f32]) -> Result<(), PullError> {
    let num_samples = out.len();

    if let Some(mul) = inputs.get_mut(MUL) {
        ctx.evaluate(mul, num_samples)?;
    }
    if let Some(add) = inputs.get_mut(ADD) {
        ctx.evaluate(add, num_samples)?;
    }

    match (inputs.get(MUL), inputs.get(ADD)) {
        (None, None) => {}
        (Some(mul), None) => {
            kernels::multiply(out, ctx.read(mul, num_samples)?.first());
        }
        (None, Some(add)) => {
            kernels::offset(out, ctx.read(add, num_samples)?.first());
        }
        (Some(mul), Some(add)) => {
            let mul = ctx.read(mul, num_samples)?.first();
            let add = ctx.read(add, num_samples)?.first();
            kernels::multiply_add(out, mul, add);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::EngineConfig,
        graph::{context::Slot, wire::Wire},
    };

    fn compose(raw: &[f32], inputs: &mut Inputs) -> Vec<f32> {
        let mut slots: Vec<Slot> = Vec::new();
        let mut ctx = PullCtx::new(&mut slots, 1);
        let mut out = raw.to_vec();
        mul_add(&mut ctx, inputs, &mut out).unwrap();
        out
    }

    #[test]
    fn test_no_mul_add_is_bit_identical() {
        let raw = [0.1, -0.25, 0.333, f32::MIN_POSITIVE];
        let out = compose(&raw, &mut Inputs::new());
        assert_eq!(out.as_slice(), &raw);
    }

    #[test]
    fn test_mul_only() {
        let config = EngineConfig::default();
        let raw = [0.5, -1.0, 0.25, 0.0];
        let mut inputs = Inputs::new();
        inputs.insert(MUL, Wire::constant(0.5, &config));

        let out = compose(&raw, &mut inputs);
        for i in 0..raw.len() {
            assert_eq!(out[i], raw[i] * 0.5);
        }
    }

    #[test]
    fn test_add_only() {
        let config = EngineConfig::default();
        let raw = [0.5, -1.0, 0.25, 0.0];
        let mut inputs = Inputs::new();
        inputs.insert(ADD, Wire::constant(2.0, &config));

        let out = compose(&raw, &mut inputs);
        for i in 0..raw.len() {
            assert_eq!(out[i], raw[i] + 2.0);
        }
    }

    #[test]
    fn test_mul_and_add() {
        let config = EngineConfig::default();
        let raw = [0.5, -1.0, 0.25, 0.0];
        let mut inputs = Inputs::new();
        inputs.insert(MUL, Wire::constant(3.0, &config));
        inputs.insert(ADD, Wire::constant(-0.5, &config));

        let out = compose(&raw, &mut inputs);
        for i in 0..raw.len() {
            assert_eq!(out[i], raw[i] * 3.0 + -0.5);
        }
    }
}
