use serde::{Deserialize, Serialize};

use crate::{
    error::PullError,
    graph::{context::PullCtx, wire::Inputs},
};

/// Index of a generator in its graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Declared update rate of a generator's output.
///
/// Only audio rate is scheduled: every generator is pulled once per block
/// and produces one value per sample. `Control` marks outputs that are
/// meant to hold for a whole block (constants); readers that want a control
/// value take the first sample of the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rate {
    #[default]
    Audio,
    Control,
}

/// A view of a generator's most recent block.
#[derive(Debug, Clone, Copy)]
pub enum Signal<'a> {
    Mono(&'a [f32]),
    Stereo(&'a [f32], &'a [f32]),
}

impl<'a> Signal<'a> {
    /// The only channel of a mono signal, or the left channel of a stereo one.
    pub fn first(self) -> &'a [f32] {
        match self {
            Signal::Mono(samples) => samples,
            Signal::Stereo(left, _) => left,
        }
    }

    pub fn channels(self) -> usize {
        match self {
            Signal::Mono(_) => 1,
            Signal::Stereo(..) => 2,
        }
    }

    /// Samples per channel.
    pub fn len(self) -> usize {
        self.first().len()
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Left/right pair, duplicating a mono signal into both sides.
    pub fn stereo(self) -> (&'a [f32], &'a [f32]) {
        match self {
            Signal::Mono(samples) => (samples, samples),
            Signal::Stereo(left, right) => (left, right),
        }
    }
}

/// A unit generator: a graph node that produces a block of samples on demand.
///
/// Generators own their output buffer and internal state. Inputs arrive as
/// [`Wire`](crate::graph::Wire)s in an [`Inputs`] map; during
/// [`generate`](UGen::generate) a generator evaluates the wires it needs
/// through the [`PullCtx`] and then reads their output.
pub trait UGen: Send {
    /// Registry name of this generator type.
    fn kind(&self) -> &'static str;

    fn rate(&self) -> Rate {
        Rate::Audio
    }

    /// Inputs that may be wired, used to validate live replacement.
    fn input_names(&self) -> &'static [&'static str];

    fn inputs(&self) -> &Inputs;

    fn inputs_mut(&mut self) -> &mut Inputs;

    /// Compute the next `num_samples` samples into the output buffer.
    fn generate(&mut self, ctx: &mut PullCtx<'_>, num_samples: usize) -> Result<(), PullError>;

    /// The first `num_samples` samples of the last generated block.
    fn output(&self, num_samples: usize) -> Signal<'_>;

    /// The scalar a constant generator holds.
    fn constant(&self) -> Option<f32> {
        None
    }

    /// Update an unwired scalar parameter in place.
    ///
    /// Returns `false` if the generator has no such parameter.
    fn set_literal(&mut self, _name: &str, _value: f32) -> bool {
        false
    }

    /// Render `num_frames` interleaved stereo frames into `dest` at sample
    /// index `offset`. Only output stages support this.
    fn write_frames(
        &mut self,
        _ctx: &mut PullCtx<'_>,
        _num_frames: usize,
        _dest: &mut [f32],
        _offset: usize,
    ) -> Result<(), PullError> {
        Err(PullError::NotAnOutputStage)
    }
}
