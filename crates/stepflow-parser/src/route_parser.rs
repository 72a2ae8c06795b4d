//! Route parser
//!
//! Text front-end over [`RouteCodec`]: YAML or JSON documents in, route
//! model out, and back again.

use crate::codec::{deep_copy_with, DefinitionCodec, RouteCodec};
use crate::error::Result;
use crate::options::CodecOptions;
use crate::yaml_parser::YamlParser;
use stepflow_core::{Definition, Route};

/// Route parser
pub struct RouteParser;

impl RouteParser {
    /// Parse a route from a YAML string
    pub fn parse(yaml_str: &str) -> Result<Route> {
        Self::parse_with_options(yaml_str, &CodecOptions::default())
    }

    /// Parse a route from a YAML string with custom codec options
    pub fn parse_with_options(yaml_str: &str, options: &CodecOptions) -> Result<Route> {
        let node = YamlParser::parse(yaml_str)?;
        Ok(RouteCodec::with_options(options.clone()).decode(&node)?)
    }

    /// Parse a route from a JSON string
    pub fn parse_json(json_str: &str) -> Result<Route> {
        Self::parse_json_with_options(json_str, &CodecOptions::default())
    }

    /// Parse a route from a JSON string with custom codec options
    pub fn parse_json_with_options(json_str: &str, options: &CodecOptions) -> Result<Route> {
        let node = YamlParser::parse_json(json_str)?;
        Ok(RouteCodec::with_options(options.clone()).decode(&node)?)
    }

    /// Parse every route of a `---` separated YAML stream
    ///
    /// Fails on the first document that does not decode.
    pub fn parse_all(yaml_str: &str) -> Result<Vec<Route>> {
        Self::parse_all_with_options(yaml_str, &CodecOptions::default())
    }

    /// Parse every route of a YAML stream with custom codec options
    pub fn parse_all_with_options(yaml_str: &str, options: &CodecOptions) -> Result<Vec<Route>> {
        let codec = RouteCodec::with_options(options.clone());

        YamlParser::parse_multi_document(yaml_str)?
            .iter()
            .enumerate()
            .map(|(index, node)| -> Result<Route> {
                log::debug!("Decoding route document {}", index);
                Ok(codec.decode(node)?)
            })
            .collect()
    }

    /// Parse a single wrapped definition (`{id: content}`) from YAML
    pub fn parse_definition(yaml_str: &str) -> Result<Definition> {
        Self::parse_definition_with_options(yaml_str, &CodecOptions::default())
    }

    /// Parse a single wrapped definition with custom codec options
    pub fn parse_definition_with_options(
        yaml_str: &str,
        options: &CodecOptions,
    ) -> Result<Definition> {
        let node = YamlParser::parse(yaml_str)?;
        Ok(DefinitionCodec::with_options(options.clone()).decode(&node)?)
    }

    /// Render a route as YAML
    pub fn to_yaml(route: &Route) -> Result<String> {
        Self::to_yaml_with_options(route, &CodecOptions::default())
    }

    /// Render a route as YAML with custom codec options
    pub fn to_yaml_with_options(route: &Route, options: &CodecOptions) -> Result<String> {
        let node = RouteCodec::with_options(options.clone()).encode(route)?;
        YamlParser::to_yaml(&node)
    }

    /// Render a route as compact JSON
    pub fn to_json(route: &Route) -> Result<String> {
        Self::to_json_with_options(route, &CodecOptions::default())
    }

    /// Render a route as compact JSON with custom codec options
    pub fn to_json_with_options(route: &Route, options: &CodecOptions) -> Result<String> {
        let node = RouteCodec::with_options(options.clone()).encode(route)?;
        YamlParser::to_json(&node)
    }

    /// Render a route as indented JSON
    pub fn to_json_pretty(route: &Route) -> Result<String> {
        Self::to_json_pretty_with_options(route, &CodecOptions::default())
    }

    /// Render a route as indented JSON with custom codec options
    pub fn to_json_pretty_with_options(route: &Route, options: &CodecOptions) -> Result<String> {
        let node = RouteCodec::with_options(options.clone()).encode(route)?;
        YamlParser::to_json_pretty(&node)
    }

    /// Structurally independent copy of a route
    pub fn deep_copy(route: &Route) -> Result<Route> {
        Self::deep_copy_with_options(route, &CodecOptions::default())
    }

    /// Structurally independent copy of a route with custom codec options
    pub fn deep_copy_with_options(route: &Route, options: &CodecOptions) -> Result<Route> {
        deep_copy_with(route, options)
    }
}
