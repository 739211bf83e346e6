//! Declarative graph definitions.
//!
//! A definition is a tree of nodes, usually written as JSON:
//!
//! ```ignore
//! {
//!   "type": "out",
//!   "inputs": {
//!     "source": {
//!       "id": "carrier",
//!       "type": "sinOsc",
//!       "inputs": { "freq": 440, "mul": 0.25 }
//!     }
//!   }
//! }
//! ```
//!
//! Each input is a number (promoted to a constant), a nested node, or
//! `{ "ref": "<id>" }` naming a node built earlier in the same definition.
//! Inputs are built in name order, so a reference must point at an id that
//! sorts before it among its siblings or lives in an earlier subtree.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DefinitionError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UGenDef {
    /// Registry name of the generator to build.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub inputs: BTreeMap<String, InputDef>,
    /// Name under which the built node can be addressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// One input slot of a definition.
///
/// Only a number or a JSON object is accepted; arrays, strings, booleans and
/// nulls land in `Invalid`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputDef {
    Scalar(f32),
    Ref(NodeRef),
    Def(Box<UGenDef>),
    /// Anything else found in the slot; rejected when the graph is built.
    Invalid(serde_json::Value),
}

/// Reference to a node registered under `id` earlier in the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeRef {
    #[serde(rename = "ref")]
    pub target: String,
}

impl UGenDef {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// A constant: `{ "type": "value", "inputs": { "value": v } }`.
    pub fn value(value: f32) -> Self {
        Self::new(crate::graph::value::Value::KIND).input(crate::graph::value::Value::VALUE, value)
    }

    pub fn from_json(text: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, DefinitionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn input(mut self, name: impl Into<String>, input: impl Into<InputDef>) -> Self {
        self.inputs.insert(name.into(), input.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl InputDef {
    pub fn reference(id: impl Into<String>) -> Self {
        InputDef::Ref(NodeRef { target: id.into() })
    }
}

impl<'de> Deserialize<'de> for InputDef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;

        let input = match &raw {
            serde_json::Value::Number(number) => number.as_f64().map(|n| InputDef::Scalar(n as f32)),
            serde_json::Value::Object(fields) if fields.contains_key("ref") => {
                serde_json::from_value(raw.clone()).ok().map(InputDef::Ref)
            }
            serde_json::Value::Object(_) => serde_json::from_value(raw.clone())
                .ok()
                .map(|def| InputDef::Def(Box::new(def))),
            _ => None,
        };
        Ok(input.unwrap_or(InputDef::Invalid(raw)))
    }
}

impl From<f32> for InputDef {
    fn from(value: f32) -> Self {
        InputDef::Scalar(value)
    }
}

impl From<UGenDef> for InputDef {
    fn from(def: UGenDef) -> Self {
        InputDef::Def(Box::new(def))
    }
}
