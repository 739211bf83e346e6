//! Error types for configuration, graph construction, addressing and pulls.

use crate::graph::NodeId;

/// Rejected [`EngineConfig`](crate::config::EngineConfig) values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("sample rate must be positive")]
    ZeroSampleRate,
    #[error("block size must be positive")]
    ZeroBlockSize,
    #[error("control rate must be positive")]
    ZeroControlRate,
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while turning a definition into a live graph.
///
/// All of these are fatal to the build: no partial graph is returned and no
/// node is left registered.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The definition has no `type` field.
    #[error("unit generator definition lacks a 'type' property")]
    MissingType,
    /// The `type` is not registered.
    #[error("unknown unit generator type '{0}'")]
    UnknownType(String),
    /// An input slot holds something other than a number or a definition.
    #[error("invalid value for input '{input}': {found}")]
    InvalidInput { input: String, found: String },
    /// A generator was built without one of its required inputs.
    #[error("'{kind}' requires input '{input}'")]
    MissingInput { kind: &'static str, input: &'static str },
    /// A generator was given an input it does not declare.
    #[error("'{kind}' has no input named '{input}'")]
    UnknownInput { kind: &'static str, input: String },
    /// Two nodes claim the same id.
    #[error("duplicate node id '{0}'")]
    DuplicateId(String),
    /// A `{"ref": ...}` input names a node that has not been built yet.
    #[error("reference to unknown node '{0}'")]
    UnknownRef(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors from parsing definition text.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("malformed definition: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the post-build `id.input` addressing interface.
///
/// An addressing error never modifies the graph.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("error parsing path '{path}': segment '{segment}' could not be resolved")]
    UnknownNode { path: String, segment: String },
    #[error("error parsing path '{path}': segment '{segment}' could not be resolved")]
    UnknownInput { path: String, segment: String },
    /// `set_input` was called with a bare node id.
    #[error("setting a unit generator directly is not supported ('{0}')")]
    MissingInputName(String),
    /// A generator-backed source points outside the graph.
    #[error("node {0:?} does not belong to this graph")]
    ForeignNode(NodeId),
}

/// Errors raised while pulling samples.
#[derive(Debug, thiserror::Error)]
pub enum PullError {
    /// The node was re-entered while computing its own block.
    #[error("cycle detected at node {0:?}")]
    Cycle(NodeId),
    #[error("node {0:?} does not belong to this graph")]
    UnknownNode(NodeId),
    /// A required input slot is empty.
    #[error("'{kind}' has no '{input}' input wired")]
    MissingInput { kind: &'static str, input: &'static str },
    /// `write_output` was called on a graph whose root is not an output stage.
    #[error("root node is not an output stage")]
    NotAnOutputStage,
    #[error("destination holds {available} samples, {required} required")]
    DestinationTooSmall { required: usize, available: usize },
}
