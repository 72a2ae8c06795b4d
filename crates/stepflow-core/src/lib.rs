//! Stepflow Core - Core types for pipeline route documents
//!
//! This crate provides the fundamental types used across Stepflow:
//! - `OrderedNode`, the order-preserving document tree
//! - The route model: `Route`, `Definition` and `Property`

pub mod ast;
pub mod types;

// Re-export commonly used types
pub use ast::{Definition, DefinitionBuilder, Property, PropertyValue, Route, STEPS_KEY};
pub use types::{NodeKind, OrderedNode};
