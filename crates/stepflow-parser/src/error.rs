//! Codec error types

use stepflow_core::NodeKind;
use thiserror::Error;

/// Structural error raised while decoding a document tree
///
/// `path` locates the offending node, e.g. `from.steps[1].to`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A step-wrapping mapping did not have exactly one key
    #[error("Ambiguous definition at '{path}': expected exactly one key, found {keys}")]
    Ambiguous { path: String, keys: usize },

    /// The reserved `steps` key was malformed
    #[error("Invalid steps at '{path}': {message}")]
    InvalidSteps { path: String, message: String },

    /// A node kind did not match its grammar position
    #[error("Unexpected node at '{path}': expected {expected}, found {found}")]
    UnexpectedNodeKind {
        path: String,
        expected: String,
        found: NodeKind,
    },

    /// More than one top-level key holds a mapping
    #[error("Multiple definitions in route: '{first}' and '{second}'")]
    MultipleDefinitions { first: String, second: String },

    /// Definitions nested deeper than the configured limit
    #[error("Maximum definition depth {limit} exceeded at '{path}'")]
    DepthExceeded { path: String, limit: usize },
}

/// Error raised while encoding an in-memory tree that breaks the model rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A leaf definition also carries parameters or steps
    #[error("Definition '{id}' has a scalar value and structured content")]
    LeafWithContent { id: String },

    /// A scalar leaf was used where mapping content is required
    #[error("Definition '{id}' is a scalar leaf and has no mapping content")]
    ScalarContent { id: String },

    /// A parameter uses the reserved `steps` key
    #[error("Definition '{id}' has a parameter named 'steps'")]
    ReservedParameter { id: String },

    /// A route attribute holds a structured value
    #[error("Route attribute '{key}' must be a scalar")]
    NonScalarAttribute { key: String },

    /// Definitions nested deeper than the configured limit
    #[error("Maximum definition depth {limit} exceeded at '{id}'")]
    DepthExceeded { id: String, limit: usize },
}

/// Top-level error for text parsing, rendering and deep copies
#[derive(Error, Debug)]
pub enum CodecError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// YAML syntax error
    #[error("YAML syntax error: {0}")]
    YamlSyntax(#[from] yaml_rust2::scanner::ScanError),

    /// Well-formed YAML that has no ordered-node form
    #[error("Unsupported YAML at {line}:{column}: {message}")]
    YamlStructure {
        line: usize,
        column: usize,
        message: String,
    },

    /// YAML emitting error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing or emitting error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
