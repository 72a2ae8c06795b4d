//! Route codec
//!
//! Splits the document root into scalar attributes and the single nested
//! definition, delegating the definition itself to [`DefinitionCodec`].

use super::definition::DefinitionCodec;
use super::path::ROOT;
use crate::error::{DecodeError, EncodeError};
use crate::options::CodecOptions;
use stepflow_core::{NodeKind, OrderedNode, Property, PropertyValue, Route};

/// Decoder/encoder for route documents
#[derive(Debug, Clone, Default)]
pub struct RouteCodec {
    definitions: DefinitionCodec,
}

impl RouteCodec {
    /// Create a codec with default options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self {
            definitions: DefinitionCodec::with_options(options),
        }
    }

    pub fn options(&self) -> &CodecOptions {
        self.definitions.options()
    }

    /// The codec used for the nested definition
    pub fn definition_codec(&self) -> &DefinitionCodec {
        &self.definitions
    }

    /// Decode a route from the document root
    ///
    /// Scalar values become attributes, the one mapping value becomes the
    /// definition. A second mapping value fails with
    /// [`DecodeError::MultipleDefinitions`].
    pub fn decode(&self, node: &OrderedNode) -> Result<Route, DecodeError> {
        let entries = match node {
            OrderedNode::Mapping(entries) => entries,
            other => {
                return Err(DecodeError::UnexpectedNodeKind {
                    path: ROOT.to_string(),
                    expected: NodeKind::Mapping.to_string(),
                    found: other.kind(),
                })
            }
        };

        let mut route = Route::new();

        for (key, value) in entries {
            match value {
                OrderedNode::Scalar(s) => {
                    route.attributes.push(Property::scalar(key.clone(), s.clone()));
                }
                OrderedNode::Mapping(content) => {
                    if let Some(first) = &route.definition {
                        return Err(DecodeError::MultipleDefinitions {
                            first: first.id.clone(),
                            second: key.clone(),
                        });
                    }

                    self.definitions.check_decode_depth(key, 1)?;
                    let definition = self.definitions.decode_entries(key, content, key, 1)?;
                    route.definition_position = route.attributes.len();
                    route.definition = Some(definition);
                }
                OrderedNode::Sequence(_) => {
                    return Err(DecodeError::UnexpectedNodeKind {
                        path: key.clone(),
                        expected: "scalar or mapping".to_string(),
                        found: NodeKind::Sequence,
                    });
                }
            }
        }

        log::debug!(
            "Decoded route: {} attribute(s), definition {:?}",
            route.attributes.len(),
            route.definition.as_ref().map(|d| d.id.as_str())
        );

        Ok(route)
    }

    /// Encode a route back to a root mapping
    ///
    /// The definition entry is placed after `definition_position` attributes,
    /// so decoded routes keep their original top-level order.
    pub fn encode(&self, route: &Route) -> Result<OrderedNode, EncodeError> {
        let mut entries = Vec::with_capacity(route.attributes.len() + 1);

        for attribute in &route.attributes {
            match &attribute.value {
                PropertyValue::Scalar(s) => {
                    entries.push((attribute.key.clone(), OrderedNode::Scalar(s.clone())));
                }
                PropertyValue::Node(_) => {
                    return Err(EncodeError::NonScalarAttribute {
                        key: attribute.key.clone(),
                    });
                }
            }
        }

        if let Some(definition) = &route.definition {
            let content = self.definitions.encode_content(definition)?;
            entries.insert(
                route.effective_definition_position(),
                (definition.id.clone(), content),
            );
        }

        log::debug!("Encoded route with {} top-level key(s)", entries.len());

        Ok(OrderedNode::Mapping(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepflow_core::Definition;

    fn yaml(s: &str) -> OrderedNode {
        crate::yaml_parser::YamlParser::parse(s).unwrap()
    }

    #[test]
    fn test_decode_attributes_and_definition() {
        let node = yaml(
            r#"
id: test
from:
  uri: timer:tick
tag: demo
"#,
        );

        let route = RouteCodec::new().decode(&node).unwrap();
        assert_eq!(
            route.attributes,
            vec![Property::scalar("id", "test"), Property::scalar("tag", "demo")]
        );
        assert_eq!(route.definition_position, 1);
        assert_eq!(route.definition.as_ref().map(|d| d.id.as_str()), Some("from"));
    }

    #[test]
    fn test_decode_without_definition() {
        let route = RouteCodec::new().decode(&yaml("id: only")).unwrap();
        assert!(route.definition.is_none());
        assert_eq!(route.attributes.len(), 1);
    }

    #[test]
    fn test_decode_rejects_non_mapping_root() {
        let err = RouteCodec::new().decode(&yaml("- a\n- b")).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnexpectedNodeKind {
                path: "(root)".to_string(),
                expected: "mapping".to_string(),
                found: NodeKind::Sequence,
            }
        );
    }

    #[test]
    fn test_decode_rejects_top_level_sequence() {
        let err = RouteCodec::new().decode(&yaml("id: x\nsteps: [a]")).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnexpectedNodeKind { ref path, .. } if path == "steps"
        ));
    }

    #[test]
    fn test_decode_rejects_multiple_definitions() {
        let node = yaml(
            r#"
from:
  uri: a
rest:
  uri: b
"#,
        );

        let err = RouteCodec::new().decode(&node).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MultipleDefinitions {
                first: "from".to_string(),
                second: "rest".to_string()
            }
        );
    }

    #[test]
    fn test_encode_keeps_top_level_order() {
        let route = Route::new()
            .with_attribute("id", "test")
            .with_definition(Definition::builder("from").parameter("uri", "x").build())
            .with_attribute("tag", "demo");

        let encoded = RouteCodec::new().encode(&route).unwrap();
        let keys: Vec<&str> = encoded
            .as_mapping()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["id", "from", "tag"]);
    }

    #[test]
    fn test_encode_rejects_structured_attribute() {
        let mut route = Route::new();
        route.attributes.push(Property::node(
            "meta",
            OrderedNode::mapping(vec![("a", OrderedNode::scalar("b"))]),
        ));

        let err = RouteCodec::new().encode(&route).unwrap_err();
        assert_eq!(err, EncodeError::NonScalarAttribute { key: "meta".to_string() });
    }

    #[test]
    fn test_encode_rejects_leaf_definition() {
        let route = Route::new().with_definition(Definition::leaf("from", "x"));
        let err = RouteCodec::new().encode(&route).unwrap_err();
        assert!(matches!(err, EncodeError::ScalarContent { .. }));
    }
}
