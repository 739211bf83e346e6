use std::collections::HashMap;

use crate::{
    config::EngineConfig,
    error::BuildError,
    graph::{
        buffer::SignalBuffer,
        context::Slot,
        definition::{InputDef, UGenDef},
        node::NodeId,
        registry::Registry,
        ugen_graph::{Graph, OUTPUT_ID},
        value::Value,
        wire::{Inputs, Wire},
    },
};

/*
Graph Builder
=============

Turns a definition tree into generators, bottom-up:

    out                               1. build inputs first
     └─ source: sinOsc                   freq = 440 → value(440)
          ├─ freq: 440                   value(440) → node 0
          └─ mul:  0.25                  value(0.25) → node 1
                                         sinOsc     → node 2
                                      2. out        → node 3, root

For every input slot:

    number        →  promoted to { "type": "value", "inputs": { "value": n } }
    definition    →  built recursively, wired by node id
    { "ref": id } →  wired to the node already registered under id

The one exception is the `value` slot of a constant, which keeps its
number instead of promoting it again.

Each built node gets a fresh output buffer of `block_size` samples and,
when the config is seeded, a seed of its own derived from its arena index,
so two random generators do not share a stream. Nodes with an `id` are
registered for later addressing, and the root is registered once more
under `OUTPUT_ID`.

Construction is all-or-nothing: on any error the half-built arena is
discarded (or, when attaching to a live graph, rolled back).
*/

/// Build a graph from `def` with the generators in `registry`.
pub fn build(def: &UGenDef, registry: &Registry, config: EngineConfig) -> Result<Graph, BuildError> {
    config.validate()?;

    let mut parts = Parts::default();
    let root = parts.build_node(def, registry, &config)?;
    parts.register(OUTPUT_ID, root)?;

    Ok(Graph::from_parts(parts.slots, parts.ids, root, config))
}

/// Arena under construction.
#[derive(Default)]
pub(crate) struct Parts {
    pub(crate) slots: Vec<Slot>,
    pub(crate) ids: HashMap<String, NodeId>,
}

impl Parts {
    pub(crate) fn build_node(
        &mut self,
        def: &UGenDef,
        registry: &Registry,
        config: &EngineConfig,
    ) -> Result<NodeId, BuildError> {
        let kind = def.kind.as_deref().ok_or(BuildError::MissingType)?;
        let factory = registry
            .get(kind)
            .ok_or_else(|| BuildError::UnknownType(kind.to_string()))?;

        let mut inputs = Inputs::new();
        for (name, input) in &def.inputs {
            let wire = match input {
                InputDef::Scalar(value) if name == Value::VALUE => {
                    inputs.insert_literal(name.clone(), *value);
                    continue;
                }
                InputDef::Scalar(value) => {
                    Wire::Node(self.build_node(&UGenDef::value(*value), registry, config)?)
                }
                InputDef::Def(sub) => Wire::Node(self.build_node(sub, registry, config)?),
                InputDef::Ref(node_ref) => {
                    let node = self
                        .ids
                        .get(&node_ref.target)
                        .copied()
                        .ok_or_else(|| BuildError::UnknownRef(node_ref.target.clone()))?;
                    Wire::Node(node)
                }
                InputDef::Invalid(found) => {
                    return Err(BuildError::InvalidInput {
                        input: name.clone(),
                        found: found.to_string(),
                    })
                }
            };
            inputs.insert(name.clone(), wire);
        }

        let node = NodeId(self.slots.len());
        let node_config = EngineConfig {
            seed: config.node_seed(node.0),
            ..config.clone()
        };
        let ugen = factory(inputs, SignalBuffer::new(config.block_size), &node_config)?;
        self.slots.push(Slot::new(ugen));

        if let Some(id) = &def.id {
            self.register(id, node)?;
        }
        Ok(node)
    }

    pub(crate) fn register(&mut self, id: &str, node: NodeId) -> Result<(), BuildError> {
        if self.ids.contains_key(id) {
            return Err(BuildError::DuplicateId(id.to_string()));
        }
        self.ids.insert(id.to_string(), node);
        Ok(())
    }
}
