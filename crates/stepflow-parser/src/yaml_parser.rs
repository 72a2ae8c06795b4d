//! YAML Parser
//!
//! Reads YAML or JSON text into an [`OrderedNode`] tree and writes trees back
//! out, keeping mapping order and duplicate keys.
//!
//! YAML is read from the parser's event stream rather than through serde, so
//! every scalar keeps its source text: `1.10`, `0x1F` and `1e3` stay exactly
//! as written. Tags are dropped and the tagged node is kept. Plain nulls
//! (`~`, `null`, empty) read as an empty scalar.

use crate::error::{CodecError, Result};
use std::collections::HashMap;
use stepflow_core::OrderedNode;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// YAML parser utilities
pub struct YamlParser;

impl YamlParser {
    /// Parse a YAML string into an ordered node tree
    ///
    /// An empty document reads as an empty scalar.
    pub fn parse(yaml_str: &str) -> Result<OrderedNode> {
        let documents = load(yaml_str, false)?;
        Ok(documents
            .into_iter()
            .next()
            .unwrap_or_else(|| OrderedNode::scalar("")))
    }

    /// Parse a JSON string into an ordered node tree
    pub fn parse_json(json_str: &str) -> Result<OrderedNode> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Parse a YAML stream containing `---` separated documents
    ///
    /// Returns one node per document, in stream order. An empty stream has
    /// no documents.
    pub fn parse_multi_document(yaml_str: &str) -> Result<Vec<OrderedNode>> {
        load(yaml_str, true)
    }

    /// Render a node tree as YAML
    pub fn to_yaml(node: &OrderedNode) -> Result<String> {
        Ok(serde_yaml::to_string(node)?)
    }

    /// Render a node tree as compact JSON
    pub fn to_json(node: &OrderedNode) -> Result<String> {
        Ok(serde_json::to_string(node)?)
    }

    /// Render a node tree as indented JSON
    pub fn to_json_pretty(node: &OrderedNode) -> Result<String> {
        Ok(serde_json::to_string_pretty(node)?)
    }
}

fn load(yaml_str: &str, multi: bool) -> Result<Vec<OrderedNode>> {
    let mut loader = NodeLoader::default();
    Parser::new(yaml_str.chars()).load(&mut loader, multi)?;

    match loader.error {
        Some((mark, message)) => Err(CodecError::YamlStructure {
            line: mark.line(),
            column: mark.col(),
            message,
        }),
        None => Ok(loader.documents),
    }
}

/// Open collection while its events are being read
enum Frame {
    Sequence {
        anchor: usize,
        items: Vec<OrderedNode>,
    },
    Mapping {
        anchor: usize,
        entries: Vec<(String, OrderedNode)>,
        key: Option<String>,
    },
}

/// Builds ordered nodes from parser events
///
/// The first structural error is kept and every later event is ignored.
#[derive(Default)]
struct NodeLoader {
    stack: Vec<Frame>,
    documents: Vec<OrderedNode>,
    anchors: HashMap<usize, OrderedNode>,
    error: Option<(Marker, String)>,
}

impl NodeLoader {
    fn complete(&mut self, node: OrderedNode, anchor: usize) -> std::result::Result<(), String> {
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }
        self.insert(node)
    }

    fn insert(&mut self, node: OrderedNode) -> std::result::Result<(), String> {
        match self.stack.last_mut() {
            None => self.documents.push(node),
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping { entries, key, .. }) => match key.take() {
                Some(key) => entries.push((key, node)),
                None => match node {
                    OrderedNode::Scalar(text) => *key = Some(text),
                    other => return Err(format!("mapping keys must be scalars, found {}", other.kind())),
                },
            },
        }
        Ok(())
    }

    fn handle(&mut self, event: Event) -> std::result::Result<(), String> {
        match event {
            Event::Scalar(value, style, anchor, ..) => {
                self.complete(OrderedNode::Scalar(scalar_text(value, style)), anchor)
            }
            Event::SequenceStart(anchor, ..) => {
                self.stack.push(Frame::Sequence {
                    anchor,
                    items: Vec::new(),
                });
                Ok(())
            }
            Event::MappingStart(anchor, ..) => {
                self.stack.push(Frame::Mapping {
                    anchor,
                    entries: Vec::new(),
                    key: None,
                });
                Ok(())
            }
            Event::SequenceEnd | Event::MappingEnd => match self.stack.pop() {
                Some(Frame::Sequence { anchor, items }) => {
                    self.complete(OrderedNode::Sequence(items), anchor)
                }
                Some(Frame::Mapping { anchor, entries, .. }) => {
                    self.complete(OrderedNode::Mapping(entries), anchor)
                }
                None => Err("unbalanced collection end".to_string()),
            },
            Event::Alias(id) => match self.anchors.get(&id).cloned() {
                Some(node) => self.insert(node),
                None => Err(format!("unknown alias {}", id)),
            },
            _ => Ok(()),
        }
    }
}

impl MarkedEventReceiver for NodeLoader {
    fn on_event(&mut self, event: Event, mark: Marker) {
        if self.error.is_some() {
            return;
        }
        if let Err(message) = self.handle(event) {
            self.error = Some((mark, message));
        }
    }
}

/// Source text of a scalar; plain nulls become empty
fn scalar_text(value: String, style: TScalarStyle) -> String {
    let is_null = matches!(value.as_str(), "" | "~" | "null" | "Null" | "NULL");
    if matches!(style, TScalarStyle::Plain) && is_null {
        String::new()
    } else {
        value
    }
}
