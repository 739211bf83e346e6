/*
Pull Context
============

Pulling is depth-first and synchronous: a generator asked for n samples
first evaluates each input wire for n samples, then reads their output and
computes its own.

Generators live in an arena. While one is generating it is taken out of its
slot, so it can hold `&mut self` and still let the context hand out shared
views of the other slots. Finding an empty slot during evaluation therefore
means the node is being re-entered: a wiring cycle.

Per-Block Memoization
---------------------

A node may feed several consumers (fan-out):

        sinOsc ──┬── mul of A
                 └── mul of B

Pulled naively, the shared oscillator would run once per consumer and
advance its phase twice per block. Every top-level pull therefore opens a
new block number, and each slot records the (block, length) it was last
computed for. A second request inside the same block reads the cached
output instead of generating again.
*/

use crate::{
    error::PullError,
    graph::{
        node::{NodeId, Signal, UGen},
        wire::Wire,
    },
};

pub(crate) struct Slot {
    pub(crate) ugen: Option<Box<dyn UGen>>,
    pub(crate) computed: Option<(u64, usize)>,
}

impl Slot {
    pub(crate) fn new(ugen: Box<dyn UGen>) -> Self {
        Self {
            ugen: Some(ugen),
            computed: None,
        }
    }
}

pub struct PullCtx<'g> {
    slots: &'g mut [Slot],
    block: u64,
}

impl<'g> PullCtx<'g> {
    pub(crate) fn new(slots: &'g mut [Slot], block: u64) -> Self {
        Self { slots, block }
    }

    /// Number of the block being pulled.
    pub fn block(&self) -> u64 {
        self.block
    }

    /// Make sure `wire` has `num_samples` fresh samples for this block.
    pub fn evaluate(&mut self, wire: &mut Wire, num_samples: usize) -> Result<(), PullError> {
        match wire {
            Wire::Node(id) => self.evaluate_node(*id, num_samples),
            Wire::Constant(value) => value.generate(self, num_samples),
        }
    }

    /// Output of an evaluated wire.
    pub fn read<'a>(&'a self, wire: &'a Wire, num_samples: usize) -> Result<Signal<'a>, PullError> {
        match wire {
            Wire::Node(id) => {
                let slot = self.slots.get(id.0).ok_or(PullError::UnknownNode(*id))?;
                let ugen = slot.ugen.as_deref().ok_or(PullError::Cycle(*id))?;
                Ok(ugen.output(num_samples))
            }
            Wire::Constant(value) => Ok(value.output(num_samples)),
        }
    }

    pub(crate) fn evaluate_node(&mut self, id: NodeId, num_samples: usize) -> Result<(), PullError> {
        let slot = self.slots.get_mut(id.0).ok_or(PullError::UnknownNode(id))?;
        if slot.computed == Some((self.block, num_samples)) {
            return Ok(());
        }

        let mut ugen = slot.ugen.take().ok_or(PullError::Cycle(id))?;
        let result = ugen.generate(self, num_samples);

        let slot = &mut self.slots[id.0];
        slot.ugen = Some(ugen);
        result?;
        slot.computed = Some((self.block, num_samples));
        Ok(())
    }

    /// Run `f` with the generator at `id` taken out of the arena.
    pub(crate) fn with_detached<T>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn UGen, &mut PullCtx<'_>) -> Result<T, PullError>,
    ) -> Result<T, PullError> {
        let slot = self.slots.get_mut(id.0).ok_or(PullError::UnknownNode(id))?;
        let mut ugen = slot.ugen.take().ok_or(PullError::Cycle(id))?;
        let result = f(ugen.as_mut(), self);
        self.slots[id.0].ugen = Some(ugen);
        result
    }
}
