//! Stepflow examples
//!
//! Host package for the runnable demos under `demos/`.

pub use stepflow_core;
pub use stepflow_parser;
