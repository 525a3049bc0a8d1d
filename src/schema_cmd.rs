//! Schema listing from a snapshot file.
//!
//! Loads a decoded snapshot, filters its raw schema for the requested view,
//! and renders the retained columns as an ASCII table.

use anyhow::{Context, Result};
use log::info;

use crate::{cli::SchemaArgs, schema, snapshot::Snapshot, table};

pub fn execute(args: &SchemaArgs) -> Result<()> {
    let snapshot = Snapshot::load(&args.input)
        .with_context(|| format!("Loading snapshot from {:?}", args.input))?;
    let view = args.view.context();
    let columns = schema::filter_schema(&snapshot.schema, &view);

    if columns.is_empty() {
        info!("Snapshot {:?} does not yield any grid columns", args.input);
        return Ok(());
    }

    let mut rows = Vec::with_capacity(columns.len());
    for (idx, column) in columns.iter().enumerate() {
        let position = (idx + 1).to_string();
        let semantic = match column.semantic_type {
            schema::SemanticType::String => "string",
            schema::SemanticType::Number => "number",
        };
        rows.push(vec![position, column.name.clone(), semantic.to_string()]);
    }

    let headers = vec!["#".to_string(), "name".to_string(), "type".to_string()];
    table::print_table(&headers, &rows);
    info!(
        "Listed {} column(s) from {:?} ({} raw)",
        columns.len(),
        args.input,
        snapshot.schema.len()
    );
    Ok(())
}
