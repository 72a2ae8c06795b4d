//! Definition codec
//!
//! Converts between wrapped definition nodes (`{id: content}`) and
//! [`Definition`] trees.
//!
//! Wire grammar:
//! - a wrapped definition is a mapping with exactly one key, the id
//! - a scalar under that key makes a leaf definition
//! - a mapping under that key is the content: every key except `steps` is a
//!   parameter, `steps` holds a sequence of wrapped definitions

use super::path::{child_path, index_path};
use crate::error::{DecodeError, EncodeError};
use crate::options::CodecOptions;
use stepflow_core::{Definition, NodeKind, OrderedNode, Property, STEPS_KEY};

/// Decoder/encoder for the recursive definition tree
#[derive(Debug, Clone, Default)]
pub struct DefinitionCodec {
    options: CodecOptions,
}

impl DefinitionCodec {
    /// Create a codec with default options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Decode a wrapped definition (`{id: content}`)
    pub fn decode(&self, node: &OrderedNode) -> Result<Definition, DecodeError> {
        self.decode_wrapped(node, "", 1)
    }

    /// Decode already-unwrapped content: the mapping of parameters and steps
    /// found under `id`
    pub fn decode_content(&self, id: &str, content: &OrderedNode) -> Result<Definition, DecodeError> {
        match content {
            OrderedNode::Mapping(entries) => {
                self.check_decode_depth(id, 1)?;
                self.decode_entries(id, entries, id, 1)
            }
            other => Err(DecodeError::UnexpectedNodeKind {
                path: id.to_string(),
                expected: NodeKind::Mapping.to_string(),
                found: other.kind(),
            }),
        }
    }

    /// Encode a definition as a wrapped single-key mapping
    pub fn encode(&self, definition: &Definition) -> Result<OrderedNode, EncodeError> {
        self.encode_wrapped(definition, 1)
    }

    /// Encode the content mapping of a structured definition, without the
    /// wrapping key
    pub fn encode_content(&self, definition: &Definition) -> Result<OrderedNode, EncodeError> {
        self.check_encode_depth(definition, 1)?;
        if definition.is_leaf() {
            return Err(EncodeError::ScalarContent {
                id: definition.id.clone(),
            });
        }
        self.encode_entries(definition, 1)
    }

    pub(crate) fn decode_wrapped(
        &self,
        node: &OrderedNode,
        path: &str,
        depth: usize,
    ) -> Result<Definition, DecodeError> {
        let entries = match node {
            OrderedNode::Mapping(entries) => entries,
            other => {
                return Err(DecodeError::UnexpectedNodeKind {
                    path: display_path(path),
                    expected: "single-key mapping".to_string(),
                    found: other.kind(),
                })
            }
        };

        let (id, content) = match entries.as_slice() {
            [(id, content)] => (id, content),
            _ => {
                return Err(DecodeError::Ambiguous {
                    path: display_path(path),
                    keys: entries.len(),
                })
            }
        };

        let path = child_path(path, id);
        self.check_decode_depth(&path, depth)?;

        match content {
            OrderedNode::Scalar(value) => Ok(Definition::leaf(id.clone(), value.clone())),
            OrderedNode::Mapping(inner) => self.decode_entries(id, inner, &path, depth),
            OrderedNode::Sequence(_) => Err(DecodeError::UnexpectedNodeKind {
                path,
                expected: "scalar or mapping".to_string(),
                found: NodeKind::Sequence,
            }),
        }
    }

    /// Decode content entries; the caller has already checked `depth`
    pub(crate) fn decode_entries(
        &self,
        id: &str,
        entries: &[(String, OrderedNode)],
        path: &str,
        depth: usize,
    ) -> Result<Definition, DecodeError> {
        let mut definition = Definition::new(id);
        let mut seen_steps = false;

        for (key, value) in entries {
            if key != STEPS_KEY {
                definition.parameters.push(Property::node(key.clone(), value.clone()));
                continue;
            }

            let steps_path = child_path(path, STEPS_KEY);
            if seen_steps {
                return Err(DecodeError::InvalidSteps {
                    path: steps_path,
                    message: "duplicate 'steps' key".to_string(),
                });
            }
            seen_steps = true;

            let items = match value {
                OrderedNode::Sequence(items) => items,
                other => {
                    return Err(DecodeError::InvalidSteps {
                        path: steps_path,
                        message: format!("expected a sequence, found {}", other.kind()),
                    })
                }
            };

            definition.outputs.reserve(items.len());
            for (index, item) in items.iter().enumerate() {
                let item_path = index_path(&steps_path, index);
                let step = self.decode_wrapped(item, &item_path, depth + 1)?;
                log::trace!("Decoded step '{}' at {}", step.id, item_path);
                definition.outputs.push(step);
            }
        }

        Ok(definition)
    }

    pub(crate) fn encode_wrapped(
        &self,
        definition: &Definition,
        depth: usize,
    ) -> Result<OrderedNode, EncodeError> {
        self.check_encode_depth(definition, depth)?;

        let content = match &definition.value {
            Some(value) => {
                if !definition.parameters.is_empty() || !definition.outputs.is_empty() {
                    return Err(EncodeError::LeafWithContent {
                        id: definition.id.clone(),
                    });
                }
                OrderedNode::Scalar(value.clone())
            }
            None => self.encode_entries(definition, depth)?,
        };

        Ok(OrderedNode::Mapping(vec![(definition.id.clone(), content)]))
    }

    /// Parameters in order, then `steps` last when there are outputs
    pub(crate) fn encode_entries(
        &self,
        definition: &Definition,
        depth: usize,
    ) -> Result<OrderedNode, EncodeError> {
        let mut entries = Vec::with_capacity(definition.parameters.len() + 1);

        for parameter in &definition.parameters {
            if parameter.key == STEPS_KEY {
                return Err(EncodeError::ReservedParameter {
                    id: definition.id.clone(),
                });
            }
            entries.push((parameter.key.clone(), parameter.value.to_node()));
        }

        if !definition.outputs.is_empty() {
            let steps = definition
                .outputs
                .iter()
                .map(|step| self.encode_wrapped(step, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            entries.push((STEPS_KEY.to_string(), OrderedNode::Sequence(steps)));
        }

        Ok(OrderedNode::Mapping(entries))
    }

    pub(crate) fn check_decode_depth(&self, path: &str, depth: usize) -> Result<(), DecodeError> {
        if depth > self.options.max_depth {
            return Err(DecodeError::DepthExceeded {
                path: path.to_string(),
                limit: self.options.max_depth,
            });
        }
        Ok(())
    }

    fn check_encode_depth(&self, definition: &Definition, depth: usize) -> Result<(), EncodeError> {
        if depth > self.options.max_depth {
            return Err(EncodeError::DepthExceeded {
                id: definition.id.clone(),
                limit: self.options.max_depth,
            });
        }
        Ok(())
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        super::path::ROOT.to_string()
    } else {
        path.to_string()
    }
}
