//! Column configuration listing and export.
//!
//! Runs the full resolver for the requested view and prints one line per
//! resolved column. With `--out`, the configurations are also persisted as
//! YAML for the presentation layer to consume.

use std::fs::File;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::info;

use crate::{
    cli::ColumnsArgs,
    config::{CellRenderer, ColumnConfig, FilterKind},
    format::ValueFormatter,
    rules, schema,
    snapshot::Snapshot,
    table,
};

pub fn execute(args: &ColumnsArgs) -> Result<()> {
    let snapshot = Snapshot::load(&args.input)
        .with_context(|| format!("Loading snapshot from {:?}", args.input))?;
    let view = args.view.context();
    let columns = schema::filter_schema(&snapshot.schema, &view);
    let configs = rules::resolve_columns(&columns, &view);

    if configs.is_empty() {
        info!("Snapshot {:?} does not yield any grid columns", args.input);
        return Ok(());
    }

    let rows = configs
        .iter()
        .enumerate()
        .map(|(idx, config)| describe(idx, config))
        .collect::<Vec<_>>();
    let headers = ["#", "field", "header", "filter", "width", "pinned", "format", "renderer"]
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>();
    table::print_table(&headers, &rows);

    let pinned = configs
        .iter()
        .filter(|c| c.pinned)
        .map(|c| c.field.as_str())
        .join(", ");
    if !pinned.is_empty() {
        info!("Pinned column(s): {pinned}");
    }

    if let Some(out) = &args.out {
        let file =
            File::create(out).with_context(|| format!("Creating column config file {out:?}"))?;
        serde_yaml::to_writer(file, &configs)
            .with_context(|| format!("Writing column configs to {out:?}"))?;
        info!("Wrote {} column config(s) to {out:?}", configs.len());
    }
    Ok(())
}

fn describe(idx: usize, config: &ColumnConfig) -> Vec<String> {
    let filter = match config.filter {
        FilterKind::Numeric => "numeric",
        FilterKind::Text => "text",
        FilterKind::Disabled => "-",
    };
    let formatter = match config.formatter {
        ValueFormatter::ZeroBlank => "zero-blank",
        ValueFormatter::PercentTwoDecimals => "percent(2)",
        ValueFormatter::PercentRounded => "percent(0)",
        ValueFormatter::PaddedFloat => "float(1)",
    };
    let renderer = match &config.cell_renderer {
        Some(CellRenderer::ReplayLinks) => "replay-links",
        Some(CellRenderer::CellCopy) => "cell-copy",
        Some(CellRenderer::DifficultyScore { .. }) => "difficulty-score",
        None => "",
    };
    let mut header = config.header_name.clone();
    if config.hidden {
        header.push_str(" (hidden)");
    }
    vec![
        (idx + 1).to_string(),
        config.field.clone(),
        header,
        filter.to_string(),
        config.width.map(|w| w.to_string()).unwrap_or_default(),
        if config.pinned { "yes" } else { "" }.to_string(),
        formatter.to_string(),
        renderer.to_string(),
    ]
}
