use std::collections::HashMap;

use crate::{
    config::EngineConfig,
    error::{BuildError, PullError},
    graph::{node::NodeId, value::Value},
};

/// Connection from a generator's output to another generator's input slot.
///
/// A wire either points at a node in the graph arena (shared, not owned) or
/// owns a constant [`Value`] generator promoted from a bare number.
pub enum Wire {
    Node(NodeId),
    Constant(Box<Value>),
}

impl Wire {
    /// Wire carrying a constant, sized to the configured block.
    pub fn constant(value: f32, config: &EngineConfig) -> Self {
        Wire::Constant(Box::new(Value::new(value, config.block_size)))
    }

    /// The node this wire points at, if it is not an owned constant.
    pub fn node(&self) -> Option<NodeId> {
        match self {
            Wire::Node(id) => Some(*id),
            Wire::Constant(_) => None,
        }
    }
}

impl std::fmt::Debug for Wire {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Wire::Node(id) => f.debug_tuple("Node").field(id).finish(),
            Wire::Constant(value) => f.debug_tuple("Constant").field(&value.value()).finish(),
        }
    }
}

/// Named inputs of one generator.
///
/// `literals` hold scalars a generator consumes directly instead of pulling
/// them through a wire (the `value` of a constant).
#[derive(Debug, Default)]
pub struct Inputs {
    wires: HashMap<String, Wire>,
    literals: HashMap<String, f32>,
}

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, wire: Wire) -> Option<Wire> {
        self.wires.insert(name.into(), wire)
    }

    pub fn insert_literal(&mut self, name: impl Into<String>, value: f32) {
        self.literals.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Wire> {
        self.wires.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Wire> {
        self.wires.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.wires.contains_key(name)
    }

    pub fn literal(&self, name: &str) -> Option<f32> {
        self.literals.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.wires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Wire)> {
        self.wires.iter().map(|(name, wire)| (name.as_str(), wire))
    }

    /// Wire for a required input, as seen from the render path.
    pub fn wire(&self, kind: &'static str, name: &'static str) -> Result<&Wire, PullError> {
        self.wires
            .get(name)
            .ok_or(PullError::MissingInput { kind, input: name })
    }

    pub fn wire_mut(
        &mut self,
        kind: &'static str,
        name: &'static str,
    ) -> Result<&mut Wire, PullError> {
        self.wires
            .get_mut(name)
            .ok_or(PullError::MissingInput { kind, input: name })
    }

    /// Build-time check that a required input is wired.
    pub(crate) fn require(&self, kind: &'static str, name: &'static str) -> Result<(), BuildError> {
        if self.wires.contains_key(name) {
            Ok(())
        } else {
            Err(BuildError::MissingInput { kind, input: name })
        }
    }

    /// Build-time check that every wire and literal is one the generator reads.
    pub(crate) fn accept_only(
        &self,
        kind: &'static str,
        wired: &[&str],
        literals: &[&str],
    ) -> Result<(), BuildError> {
        let stray_wire = self.wires.keys().find(|name| !wired.contains(&name.as_str()));
        let stray_literal = self
            .literals
            .keys()
            .find(|name| !literals.contains(&name.as_str()));

        match stray_wire.or(stray_literal) {
            Some(name) => Err(BuildError::UnknownInput {
                kind,
                input: name.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_reports_missing_input() {
        let inputs = Inputs::new();
        let err = inputs.require("sinOsc", "freq").unwrap_err();
        assert!(matches!(err, BuildError::MissingInput { input: "freq", .. }));
    }

    #[test]
    fn test_accept_only_rejects_stray_inputs() {
        let mut inputs = Inputs::new();
        inputs.insert("freq", Wire::Node(NodeId(0)));
        inputs.insert("phase", Wire::Node(NodeId(1)));

        let err = inputs.accept_only("sinOsc", &["freq", "mul", "add"], &[]).unwrap_err();
        assert!(matches!(err, BuildError::UnknownInput { ref input, .. } if input == "phase"));
    }

    #[test]
    fn test_constant_wire_owns_its_value() {
        let wire = Wire::constant(0.5, &EngineConfig::default());
        assert_eq!(wire.node(), None);
        match wire {
            Wire::Constant(value) => assert_eq!(value.value(), 0.5),
            Wire::Node(_) => panic!("expected a constant wire"),
        }
    }
}
