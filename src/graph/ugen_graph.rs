use std::collections::HashMap;

use crate::{
    config::EngineConfig,
    error::{AddressError, BuildError, PullError},
    graph::{
        builder::Parts,
        context::{PullCtx, Slot},
        definition::UGenDef,
        node::{NodeId, Signal, UGen},
        registry::Registry,
        wire::Wire,
    },
};

/// Id under which the root of every graph is registered.
pub const OUTPUT_ID: &str = "ugen-out";

/// A live generator graph.
///
/// Generators sit in an arena indexed by [`NodeId`]; wires refer to each
/// other by index. Named nodes can be looked up and rewired between pulls
/// with `"id.input"` paths.
pub struct Graph {
    slots: Vec<Slot>,
    ids: HashMap<String, NodeId>,
    root: NodeId,
    block: u64,
    config: EngineConfig,
}

/// What an `"id"` or `"id.input"` path resolves to.
#[derive(Debug)]
pub enum Target<'g> {
    Node(NodeId),
    /// The input is fed by a constant.
    Scalar(f32),
    Wire(&'g Wire),
}

/// Replacement source for an input slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source {
    Scalar(f32),
    Node(NodeId),
}

impl From<f32> for Source {
    fn from(value: f32) -> Self {
        Source::Scalar(value)
    }
}

impl From<NodeId> for Source {
    fn from(node: NodeId) -> Self {
        Source::Node(node)
    }
}

impl Graph {
    pub(crate) fn from_parts(
        slots: Vec<Slot>,
        ids: HashMap<String, NodeId>,
        root: NodeId,
        config: EngineConfig,
    ) -> Self {
        Self {
            slots,
            ids,
            root,
            block: 0,
            config,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn sample_rate(&self) -> u32 {
        self.config.sample_rate
    }

    /// Number of generators in the arena.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Blocks pulled so far.
    pub fn blocks(&self) -> u64 {
        self.block
    }

    /// Node registered under `id`.
    pub fn node(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    pub fn ugen(&self, node: NodeId) -> Option<&dyn UGen> {
        self.slots.get(node.0).and_then(|slot| slot.ugen.as_deref())
    }

    pub fn ugen_mut(&mut self, node: NodeId) -> Option<&mut (dyn UGen + 'static)> {
        self.slots
            .get_mut(node.0)
            .and_then(|slot| slot.ugen.as_deref_mut())
    }

    pub fn kind(&self, node: NodeId) -> Option<&'static str> {
        self.ugen(node).map(|ugen| ugen.kind())
    }

    /// Pull `num_samples` from `node` as a block of its own.
    pub fn pull(&mut self, node: NodeId, num_samples: usize) -> Result<Signal<'_>, PullError> {
        self.block += 1;
        PullCtx::new(&mut self.slots, self.block).evaluate_node(node, num_samples)?;

        self.ugen(node)
            .map(|ugen| ugen.output(num_samples))
            .ok_or(PullError::UnknownNode(node))
    }

    /// Pull `num_frames` from the root output stage, interleaving stereo
    /// frames into `dest` from sample index `offset`.
    pub fn write_output(
        &mut self,
        dest: &mut [f32],
        num_frames: usize,
        offset: usize,
    ) -> Result<(), PullError> {
        self.block += 1;
        let root = self.root;
        PullCtx::new(&mut self.slots, self.block).with_detached(root, |ugen, ctx| {
            ugen.write_frames(ctx, num_frames, dest, offset)
        })
    }

    /// Resolve `"id"` to its node, or `"id.input"` to the input's constant
    /// value or wire.
    pub fn input(&self, path: &str) -> Result<Target<'_>, AddressError> {
        let (node, input) = self.resolve(path)?;
        let Some(input) = input else {
            return Ok(Target::Node(node));
        };

        let unknown_input = || AddressError::UnknownInput {
            path: path.to_string(),
            segment: input.to_string(),
        };
        let ugen = self.ugen(node).ok_or_else(unknown_input)?;

        match ugen.inputs().get(input) {
            Some(Wire::Constant(value)) => Ok(Target::Scalar(value.value())),
            Some(wire @ Wire::Node(source)) => Ok(self
                .ugen(*source)
                .and_then(|source| source.constant())
                .map_or(Target::Wire(wire), Target::Scalar)),
            None => ugen
                .inputs()
                .literal(input)
                .map(Target::Scalar)
                .ok_or_else(unknown_input),
        }
    }

    /// Replace the input at `"id.input"` with a constant or another node.
    ///
    /// A scalar written to a constant's own `value` updates it in place.
    pub fn set_input(&mut self, path: &str, source: impl Into<Source>) -> Result<(), AddressError> {
        let source = source.into();
        let (node, input) = self.resolve(path)?;
        let input = input.ok_or_else(|| AddressError::MissingInputName(path.to_string()))?;

        let wire = match source {
            Source::Scalar(value) => Wire::constant(value, &self.config),
            Source::Node(source) if source.0 < self.slots.len() => Wire::Node(source),
            Source::Node(source) => return Err(AddressError::ForeignNode(source)),
        };

        let unknown_input = || AddressError::UnknownInput {
            path: path.to_string(),
            segment: input.to_string(),
        };
        let ugen = self.ugen_mut(node).ok_or_else(unknown_input)?;

        if let Source::Scalar(value) = source {
            if ugen.set_literal(input, value) {
                return Ok(());
            }
        }
        if !ugen.input_names().contains(&input) {
            return Err(unknown_input());
        }

        ugen.inputs_mut().insert(input, wire);
        Ok(())
    }

    /// Build `def` into this graph so it can be wired in with `set_input`.
    ///
    /// Ids in `def` join the graph's id map. On error the graph is left as
    /// it was.
    pub fn attach(&mut self, def: &UGenDef, registry: &Registry) -> Result<NodeId, BuildError> {
        let start = self.slots.len();
        let mut parts = Parts {
            slots: std::mem::take(&mut self.slots),
            ids: std::mem::take(&mut self.ids),
        };

        let result = parts.build_node(def, registry, &self.config);
        if result.is_err() {
            parts.slots.truncate(start);
            parts.ids.retain(|_, node| node.0 < start);
        }

        self.slots = parts.slots;
        self.ids = parts.ids;
        result
    }

    fn resolve<'p>(&self, path: &'p str) -> Result<(NodeId, Option<&'p str>), AddressError> {
        let mut segments = path.splitn(2, '.');
        let id = segments.next().unwrap_or_default();
        let node = self.node(id).ok_or_else(|| AddressError::UnknownNode {
            path: path.to_string(),
            segment: id.to_string(),
        })?;
        Ok((node, segments.next()))
    }
}
