//! Property definitions
//!
//! A property is one ordered key/value pair: a definition parameter or a
//! route attribute.

use crate::types::OrderedNode;

/// Value held by a property
///
/// Scalars are stored as text; anything structured is passed through
/// verbatim as an [`OrderedNode`] and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Scalar(String),
    Node(OrderedNode),
}

impl PropertyValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            PropertyValue::Scalar(s) => Some(s),
            PropertyValue::Node(_) => None,
        }
    }

    /// Wire representation of this value
    pub fn to_node(&self) -> OrderedNode {
        match self {
            PropertyValue::Scalar(s) => OrderedNode::Scalar(s.clone()),
            PropertyValue::Node(node) => node.clone(),
        }
    }
}

impl From<OrderedNode> for PropertyValue {
    /// Scalar nodes collapse to `PropertyValue::Scalar`
    fn from(node: OrderedNode) -> Self {
        match node {
            OrderedNode::Scalar(s) => PropertyValue::Scalar(s),
            other => PropertyValue::Node(other),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Scalar(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Scalar(value)
    }
}

/// An ordered key/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a property with a scalar value
    pub fn scalar(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Scalar(value.into()),
        }
    }

    /// Create a property holding a structured node
    pub fn node(key: impl Into<String>, node: OrderedNode) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::from(node),
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        self.value.as_scalar()
    }
}
