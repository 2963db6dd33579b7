//! Inspect command: lists the nodes a document parses into.

use std::process::ExitCode;

use folio::Value;
use serde_json::json;

use super::{CommandResult, load};
use crate::{
    cli::InspectArgs,
    output::{OutputFormat, print_table},
};

/// One object found while walking a parsed document
struct NodeRow {
    path: String,
    kind: Option<String>,
    discriminator: Option<String>,
    id: Option<String>,
}

pub fn run(args: &InspectArgs) -> CommandResult<ExitCode> {
    let document = load(&args.document)?;
    let mut rows = Vec::new();
    walk(&document, "$".to_string(), &mut rows);

    match args.format {
        OutputFormat::Human => {
            let table: Vec<[String; 4]> = rows
                .into_iter()
                .map(|row| {
                    [
                        row.path,
                        row.kind.unwrap_or_else(|| "(map)".to_string()),
                        row.discriminator.unwrap_or_default(),
                        row.id.unwrap_or_default(),
                    ]
                })
                .collect();
            print_table(["PATH", "KIND", "TYPE", "ID"], &table);
        }
        OutputFormat::Json => {
            let nodes: Vec<serde_json::Value> = rows
                .into_iter()
                .map(|row| {
                    json!({
                        "path": row.path,
                        "kind": row.kind,
                        "type": row.discriminator,
                        "id": row.id,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&nodes)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn walk(value: &Value, path: String, rows: &mut Vec<NodeRow>) {
    match value {
        Value::Node(node) => {
            rows.push(NodeRow {
                path: path.clone(),
                kind: Some(node.kind().to_string()),
                discriminator: node.type_name().map(str::to_string),
                id: node.id().map(str::to_string),
            });
            for (key, child) in node.iter() {
                walk(child, format!("{path}.{key}"), rows);
            }
        }
        Value::Map(map) => {
            rows.push(NodeRow {
                path: path.clone(),
                kind: None,
                discriminator: None,
                id: None,
            });
            for (key, child) in map {
                walk(child, format!("{path}.{key}"), rows);
            }
        }
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                walk(item, format!("{path}[{i}]"), rows);
            }
        }
        _ => {}
    }
}
