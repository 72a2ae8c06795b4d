//! Route model definitions
//!
//! This module contains the in-memory tree decoded from a route document:
//! - Properties (parameters and attributes)
//! - Definitions (the recursive step tree)
//! - Routes (the document root)

pub mod definition;
pub mod property;
pub mod route;

pub use definition::{Definition, DefinitionBuilder};
pub use property::{Property, PropertyValue};
pub use route::Route;

/// Reserved key holding a definition's child steps
pub const STEPS_KEY: &str = "steps";
