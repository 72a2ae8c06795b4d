//! Route document codec
//!
//! Decodes [`OrderedNode`](stepflow_core::OrderedNode) trees into the route
//! model and encodes them back, preserving key order.

mod copy;
mod definition;
mod path;
mod route;

// Re-export public types
pub use copy::{deep_copy, deep_copy_with};
pub use definition::DefinitionCodec;
pub use route::RouteCodec;
