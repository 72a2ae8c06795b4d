//! Ordered document node
//!
//! `OrderedNode` is the format-neutral view of a parsed document: scalars,
//! ordered mappings and ordered sequences. Mappings are kept as a list of
//! key/value pairs so that document order and duplicate keys survive a
//! decode/encode cycle, which a hash map (or even an index map) would not
//! guarantee.
//!
//! The serde bridge renders typed scalars as text. Formats that resolve
//! plain scalars before the visitor sees them (serde_yaml) lose the source
//! spelling of numbers; the parser crate reads YAML from events instead.

use serde::de::{
    self, DeserializeSeed, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor,
};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an [`OrderedNode`], used for grammar checks and error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Scalar,
    Mapping,
    Sequence,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Scalar => "scalar",
            NodeKind::Mapping => "mapping",
            NodeKind::Sequence => "sequence",
        };
        f.write_str(name)
    }
}

/// A parsed document node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderedNode {
    /// Scalar leaf, carried as text
    Scalar(String),
    /// Mapping entries in document order (duplicate keys allowed)
    Mapping(Vec<(String, OrderedNode)>),
    /// Sequence items in document order
    Sequence(Vec<OrderedNode>),
}

impl OrderedNode {
    /// Create a scalar node
    pub fn scalar(value: impl Into<String>) -> Self {
        OrderedNode::Scalar(value.into())
    }

    /// Create a mapping node from ordered entries
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, OrderedNode)>,
    {
        OrderedNode::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Create a sequence node
    pub fn sequence(items: impl IntoIterator<Item = OrderedNode>) -> Self {
        OrderedNode::Sequence(items.into_iter().collect())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            OrderedNode::Scalar(_) => NodeKind::Scalar,
            OrderedNode::Mapping(_) => NodeKind::Mapping,
            OrderedNode::Sequence(_) => NodeKind::Sequence,
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            OrderedNode::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(String, OrderedNode)]> {
        match self {
            OrderedNode::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[OrderedNode]> {
        match self {
            OrderedNode::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// First value stored under `key`, if this is a mapping
    pub fn get(&self, key: &str) -> Option<&OrderedNode> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Maximum nesting depth; a scalar has depth 0
    pub fn depth(&self) -> usize {
        match self {
            OrderedNode::Scalar(_) => 0,
            OrderedNode::Mapping(entries) => {
                1 + entries.iter().map(|(_, v)| v.depth()).max().unwrap_or(0)
            }
            OrderedNode::Sequence(items) => 1 + items.iter().map(|v| v.depth()).max().unwrap_or(0),
        }
    }
}

impl From<&str> for OrderedNode {
    fn from(value: &str) -> Self {
        OrderedNode::Scalar(value.to_string())
    }
}

impl From<String> for OrderedNode {
    fn from(value: String) -> Self {
        OrderedNode::Scalar(value)
    }
}

impl Serialize for OrderedNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OrderedNode::Scalar(s) => serializer.serialize_str(s),
            OrderedNode::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            OrderedNode::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for OrderedNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

/// Map key serde_json uses to hand over a number's source text when its
/// `arbitrary_precision` feature is on
const JSON_NUMBER_TOKEN: &str = "$serde_json::private::Number";

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = OrderedNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar, a mapping or a sequence")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(OrderedNode::Scalar(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(OrderedNode::Scalar(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(OrderedNode::Scalar(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(OrderedNode::Scalar(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(OrderedNode::Scalar(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(OrderedNode::Scalar(v))
    }

    // null reads as an empty scalar
    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OrderedNode::Scalar(String::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OrderedNode::Scalar(String::new()))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<OrderedNode>()? {
            items.push(item);
        }
        Ok(OrderedNode::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key_seed(KeySeed)? {
            if entries.is_empty() && key == JSON_NUMBER_TOKEN {
                return Ok(OrderedNode::Scalar(map.next_value::<String>()?));
            }
            let value = map.next_value::<OrderedNode>()?;
            entries.push((key, value));
        }
        Ok(OrderedNode::Mapping(entries))
    }

    // `!tag value`: the tag is dropped, the value kept
    fn visit_enum<A>(self, data: A) -> Result<Self::Value, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (_tag, value): (String, _) = data.variant()?;
        value.newtype_variant::<OrderedNode>()
    }
}

/// Mapping keys must be scalars; they are rendered as text
struct KeySeed;

impl<'de> DeserializeSeed<'de> for KeySeed {
    type Value = String;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(KeyVisitor)
    }
}

struct KeyVisitor;

impl<'de> Visitor<'de> for KeyVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar mapping key")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(v)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_mapping_keeps_order() {
        let yaml = r#"
zeta: 1
alpha: two
mid: true
"#;

        let node: OrderedNode = serde_yaml::from_str(yaml).unwrap();
        let keys: Vec<&str> = node
            .as_mapping()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(node.get("zeta"), Some(&OrderedNode::scalar("1")));
        assert_eq!(node.get("mid"), Some(&OrderedNode::scalar("true")));
    }

    #[test]
    fn test_yaml_duplicate_keys_preserved() {
        let yaml = r#"
header: a
header: b
"#;

        let node: OrderedNode = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            node,
            OrderedNode::mapping(vec![
                ("header", OrderedNode::scalar("a")),
                ("header", OrderedNode::scalar("b")),
            ])
        );
    }

    #[test]
    fn test_json_duplicate_keys_preserved() {
        let node: OrderedNode = serde_json::from_str(r#"{"k": 1, "k": "x"}"#).unwrap();
        assert_eq!(node.as_mapping().unwrap().len(), 2);
    }

    #[test]
    fn test_null_reads_as_empty_scalar() {
        let node: OrderedNode = serde_yaml::from_str("key: ~").unwrap();
        assert_eq!(node.get("key"), Some(&OrderedNode::scalar("")));
    }

    #[test]
    fn test_tagged_value_keeps_content() {
        let node: OrderedNode = serde_yaml::from_str("uri: !env FOO\nid: test\n").unwrap();
        assert_eq!(node.get("uri"), Some(&OrderedNode::scalar("FOO")));
        assert_eq!(node.get("id"), Some(&OrderedNode::scalar("test")));
    }

    #[test]
    fn test_json_number_text_is_kept() {
        let node: OrderedNode = serde_json::from_str(r#"{"v": 1.10, "e": 1e3}"#).unwrap();
        assert_eq!(node.get("v"), Some(&OrderedNode::scalar("1.10")));
        assert_eq!(node.get("e"), Some(&OrderedNode::scalar("1e3")));
    }

    #[test]
    fn test_sequence_and_nested_mapping() {
        let yaml = r#"
items:
  - a
  - nested:
      deep: value
"#;

        let node: OrderedNode = serde_yaml::from_str(yaml).unwrap();
        let items = node.get("items").unwrap().as_sequence().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind(), NodeKind::Scalar);
        assert_eq!(items[1].kind(), NodeKind::Mapping);
        assert_eq!(node.depth(), 4);
    }

    #[test]
    fn test_structured_key_rejected() {
        let yaml = "? [a, b]\n: value\n";
        let result: Result<OrderedNode, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_keeps_order() {
        let node = OrderedNode::mapping(vec![
            ("b", OrderedNode::scalar("1")),
            ("a", OrderedNode::sequence(vec![OrderedNode::scalar("x")])),
        ]);

        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"b":"1","a":["x"]}"#);
    }

    #[test]
    fn test_node_kind_display() {
        assert_eq!(NodeKind::Scalar.to_string(), "scalar");
        assert_eq!(NodeKind::Mapping.to_string(), "mapping");
        assert_eq!(NodeKind::Sequence.to_string(), "sequence");
    }
}
