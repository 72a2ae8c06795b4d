//! Definition AST
//!
//! A definition is one node of the pipeline tree. It is either a scalar leaf
//! (`value` is set) or a structured node with ordered parameters and ordered
//! child steps (`outputs`), never both.

use crate::ast::property::{Property, PropertyValue};
use crate::types::OrderedNode;

/// A node of the pipeline tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    /// Key under which this definition is wrapped in its parent
    pub id: String,

    /// Scalar content, set only for leaf steps such as `to: "stream:out"`
    pub value: Option<String>,

    /// Non-reserved keys of the definition content, in document order
    pub parameters: Vec<Property>,

    /// Child definitions found under the `steps` key
    pub outputs: Vec<Definition>,
}

impl Definition {
    /// Create an empty structured definition
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Create a scalar leaf definition
    pub fn leaf(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn builder(id: impl Into<String>) -> DefinitionBuilder {
        DefinitionBuilder::new(id)
    }

    pub fn is_leaf(&self) -> bool {
        self.value.is_some()
    }

    /// First parameter value stored under `key`
    pub fn parameter(&self, key: &str) -> Option<&PropertyValue> {
        self.parameters
            .iter()
            .find(|p| p.key == key)
            .map(|p| &p.value)
    }

    /// First child step with the given id
    pub fn step(&self, id: &str) -> Option<&Definition> {
        self.outputs.iter().find(|d| d.id == id)
    }

    /// Number of definitions in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self.outputs.iter().map(Definition::node_count).sum::<usize>()
    }
}

/// Builder for structured definitions
#[derive(Debug, Clone)]
pub struct DefinitionBuilder {
    definition: Definition,
}

impl DefinitionBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            definition: Definition::new(id),
        }
    }

    /// Append a scalar parameter
    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.definition
            .parameters
            .push(Property::scalar(key, value));
        self
    }

    /// Append a parameter holding a structured node
    pub fn parameter_node(mut self, key: impl Into<String>, node: OrderedNode) -> Self {
        self.definition.parameters.push(Property::node(key, node));
        self
    }

    /// Append a child step
    pub fn step(mut self, step: Definition) -> Self {
        self.definition.outputs.push(step);
        self
    }

    /// Append several child steps in order
    pub fn steps(mut self, steps: impl IntoIterator<Item = Definition>) -> Self {
        self.definition.outputs.extend(steps);
        self
    }

    pub fn build(self) -> Definition {
        self.definition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_definition() {
        let to = Definition::leaf("to", "stream:out");
        assert!(to.is_leaf());
        assert!(to.parameters.is_empty());
        assert!(to.outputs.is_empty());
    }

    #[test]
    fn test_builder_preserves_order() {
        let from = Definition::builder("from")
            .parameter("uri", "timer:tick?period=3s")
            .parameter("uri", "duplicate")
            .step(
                Definition::builder("set-body")
                    .parameter("constant", "Hello world!")
                    .build(),
            )
            .step(Definition::leaf("to", "stream:out"))
            .build();

        assert!(!from.is_leaf());
        assert_eq!(from.parameters.len(), 2);
        assert_eq!(
            from.parameter("uri"),
            Some(&PropertyValue::Scalar("timer:tick?period=3s".to_string()))
        );
        assert_eq!(from.outputs[0].id, "set-body");
        assert_eq!(from.outputs[1].id, "to");
        assert_eq!(from.step("to").and_then(|d| d.value.as_deref()), Some("stream:out"));
        assert_eq!(from.node_count(), 3);
    }
}
