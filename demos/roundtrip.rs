//! Route round-trip example
//!
//! This example demonstrates:
//! - Parsing a route document (the built-in sample or a file given as the
//!   first argument)
//! - Inspecting the decoded model
//! - Re-encoding it as YAML and JSON, and taking a deep copy

use stepflow_core::Definition;
use stepflow_parser::RouteParser;

const SAMPLE: &str = r#"
id: test
from:
  uri: timer:tick?period=3s
  steps:
    - set-body:
        constant: Hello world!
    - to: "stream:out"
"#;

fn print_definition(definition: &Definition, indent: usize) {
    let pad = "  ".repeat(indent);
    match &definition.value {
        Some(value) => println!("{}{} = {}", pad, definition.id, value),
        None => {
            println!("{}{}", pad, definition.id);
            for parameter in &definition.parameters {
                println!("{}  - {}: {:?}", pad, parameter.key, parameter.value);
            }
            for step in &definition.outputs {
                print_definition(step, indent + 1);
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    println!("=== Route Round Trip Example ===\n");

    let source = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    let route = RouteParser::parse(&source)?;

    println!("Attributes:");
    for attribute in &route.attributes {
        println!("  {}: {:?}", attribute.key, attribute.value);
    }

    if let Some(definition) = &route.definition {
        println!("\nDefinition:");
        print_definition(definition, 1);
    }

    println!("\nYAML:\n{}", RouteParser::to_yaml(&route)?);
    println!("JSON:\n{}\n", RouteParser::to_json_pretty(&route)?);

    let copy = RouteParser::deep_copy(&route)?;
    println!("Deep copy equal: {}", copy == route);

    Ok(())
}
