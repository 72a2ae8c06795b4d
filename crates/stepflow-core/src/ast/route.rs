//! Route AST
//!
//! The route is the document root: scalar attributes plus at most one nested
//! definition (the pipeline entry point).

use crate::ast::definition::Definition;
use crate::ast::property::{Property, PropertyValue};

/// Document root
///
/// Equality compares the effective definition position, so two routes that
/// encode to the same document are equal.
#[derive(Debug, Clone, Default)]
pub struct Route {
    /// Top-level scalar keys, in document order
    pub attributes: Vec<Property>,

    /// The single top-level key holding a mapping
    pub definition: Option<Definition>,

    /// Number of attributes preceding the definition in the document.
    /// Values past `attributes.len()` place the definition last.
    pub definition_position: usize,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scalar attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Property::scalar(key, value));
        self
    }

    /// Set the definition, placing it after the attributes added so far
    pub fn with_definition(mut self, definition: Definition) -> Self {
        self.definition_position = self.attributes.len();
        self.definition = Some(definition);
        self
    }

    /// First attribute value stored under `key`
    pub fn attribute(&self, key: &str) -> Option<&PropertyValue> {
        self.attributes
            .iter()
            .find(|p| p.key == key)
            .map(|p| &p.value)
    }

    /// Definition position clamped to the attribute count
    pub fn effective_definition_position(&self) -> usize {
        self.definition_position.min(self.attributes.len())
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes
            && self.definition == other.definition
            && (self.definition.is_none()
                || self.effective_definition_position() == other.effective_definition_position())
    }
}

impl Eq for Route {}
