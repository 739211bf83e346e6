use std::collections::HashMap;

use crate::{
    config::EngineConfig,
    error::BuildError,
    graph::{
        buffer::SignalBuffer, dust::Dust, node::UGen, oscillator::SinOsc, output::Out,
        stereo::Stereo, value::Value, wire::Inputs,
    },
};

/// Builds one generator from its wired inputs, a fresh output buffer and
/// the engine config.
pub type Factory =
    Box<dyn Fn(Inputs, SignalBuffer, &EngineConfig) -> Result<Box<dyn UGen>, BuildError> + Send + Sync>;

/// Generator types by name.
///
/// Registering a factory is all it takes to make a new generator type usable
/// from definitions; the builder only ever looks types up here.
pub struct Registry {
    factories: HashMap<String, Factory>,
}

impl Registry {
    /// A registry with no types at all.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register (or replace) the factory for `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(Inputs, SignalBuffer, &EngineConfig) -> Result<Box<dyn UGen>, BuildError>
            + Send
            + Sync
            + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Factory> {
        self.factories.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl Default for Registry {
    /// The built-in generators, plus `osc` as a short name for `sinOsc`.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(Value::KIND, Value::build)
            .register(SinOsc::KIND, SinOsc::build)
            .register("osc", SinOsc::build)
            .register(Dust::KIND, Dust::build)
            .register(Out::KIND, Out::build)
            .register(Stereo::KIND, Stereo::build);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_types() {
        let registry = Registry::default();
        for name in ["value", "sinOsc", "osc", "dust", "out", "stereo"] {
            assert!(registry.contains(name), "missing {name}");
        }
        assert!(!registry.contains("saw"));
    }

    #[test]
    fn test_register_custom_type() {
        let mut registry = Registry::empty();
        registry.register("half", |inputs, output, config| {
            let _ = inputs;
            let _ = output;
            Ok(Box::new(Value::new(0.5, config.block_size)) as Box<dyn UGen>)
        });

        let factory = registry.get("half").unwrap();
        let ugen = factory(Inputs::new(), SignalBuffer::new(4), &EngineConfig::default()).unwrap();
        assert_eq!(ugen.constant(), Some(0.5));
    }
}
