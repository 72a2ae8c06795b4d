//! Unit tests for route model types
//!
//! Tests the core data structures used throughout Stepflow

use stepflow_core::*;

// =============================================================================
// Definition Tests
// =============================================================================

#[test]
fn test_definition_new_is_structured() {
    let def = Definition::new("from");
    assert_eq!(def.id, "from");
    assert!(!def.is_leaf());
    assert!(def.parameters.is_empty());
    assert!(def.outputs.is_empty());
}

#[test]
fn test_definition_clone_is_independent() {
    let original = Definition::builder("from")
        .parameter("uri", "direct:a")
        .step(Definition::leaf("to", "direct:b"))
        .build();

    let mut copy = original.clone();
    copy.outputs[0].value = Some("direct:c".to_string());
    copy.parameters.clear();

    assert_eq!(original.outputs[0].value.as_deref(), Some("direct:b"));
    assert_eq!(original.parameters.len(), 1);
}

#[test]
fn test_definition_lookup_returns_first_match() {
    let def = Definition::builder("from")
        .parameter("header", "a")
        .parameter("header", "b")
        .step(Definition::leaf("to", "one"))
        .step(Definition::leaf("to", "two"))
        .build();

    assert_eq!(def.parameter("header").and_then(|v| v.as_scalar()), Some("a"));
    assert_eq!(def.step("to").and_then(|d| d.value.as_deref()), Some("one"));
    assert!(def.parameter("missing").is_none());
}

// =============================================================================
// Route Tests
// =============================================================================

#[test]
fn test_route_default_is_empty() {
    let route = Route::new();
    assert!(route.attributes.is_empty());
    assert!(route.definition.is_none());
    assert_eq!(route.definition_position, 0);
}

#[test]
fn test_route_definition_first() {
    let route = Route::new()
        .with_definition(Definition::new("from"))
        .with_attribute("id", "test");

    assert_eq!(route.definition_position, 0);
    assert_eq!(route.effective_definition_position(), 0);
}

// =============================================================================
// OrderedNode Tests
// =============================================================================

#[test]
fn test_node_accessors() {
    let node = OrderedNode::mapping(vec![
        ("uri", OrderedNode::scalar("direct:a")),
        ("steps", OrderedNode::sequence(vec![OrderedNode::scalar("x")])),
    ]);

    assert_eq!(node.kind(), NodeKind::Mapping);
    assert_eq!(node.get("uri").and_then(|n| n.as_scalar()), Some("direct:a"));
    assert_eq!(node.get(STEPS_KEY).and_then(|n| n.as_sequence()).map(|s| s.len()), Some(1));
    assert!(node.as_scalar().is_none());
    assert!(node.get("missing").is_none());
}

#[test]
fn test_node_yaml_round_trip() {
    let yaml = r#"
id: test
from:
  uri: timer:tick?period=3s
  steps:
  - set-body:
      constant: Hello world!
"#;

    let node: OrderedNode = serde_yaml::from_str(yaml).unwrap();
    let rendered = serde_yaml::to_string(&node).unwrap();
    let reparsed: OrderedNode = serde_yaml::from_str(&rendered).unwrap();
    assert_eq!(reparsed, node);
}

#[test]
fn test_node_scalars_are_text() {
    let node: OrderedNode = serde_json::from_str(r#"{"n": 3, "f": 1.5, "b": false}"#).unwrap();
    assert_eq!(node.get("n"), Some(&OrderedNode::scalar("3")));
    assert_eq!(node.get("f"), Some(&OrderedNode::scalar("1.5")));
    assert_eq!(node.get("b"), Some(&OrderedNode::scalar("false")));
}
