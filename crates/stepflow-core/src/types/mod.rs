//! Document-level types
//!
//! This module contains the format-neutral node representation shared by the
//! codec and the YAML/JSON front-ends.

pub mod node;

pub use node::{NodeKind, OrderedNode};
