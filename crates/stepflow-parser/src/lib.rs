//! Stepflow Parser - YAML/JSON codec for pipeline route documents
//!
//! This crate converts route documents into the Stepflow route model and
//! back. Key order is preserved and structurally ambiguous documents are
//! rejected.

pub mod codec;
pub mod error;
pub mod options;
pub mod route_parser;
pub mod yaml_parser;

// Re-export main parser types
pub use codec::{deep_copy, deep_copy_with, DefinitionCodec, RouteCodec};
pub use error::{CodecError, DecodeError, EncodeError, Result};
pub use options::{CodecOptions, DEFAULT_MAX_DEPTH};
pub use route_parser::RouteParser;
pub use yaml_parser::YamlParser;
