use anyhow::{Context, Result};
use log::info;

use crate::{cli::PreviewArgs, rows, rules, schema, snapshot::Snapshot, table};

pub fn execute(args: &PreviewArgs) -> Result<()> {
    let snapshot = Snapshot::load(&args.input)
        .with_context(|| format!("Loading snapshot from {:?}", args.input))?;
    let view = args.view.context();
    let columns = schema::filter_schema(&snapshot.schema, &view);
    let configs = rules::resolve_columns(&columns, &view);
    let records = rows::materialize_rows(&columns, &snapshot.rows);

    let shown = records.len().min(args.rows);
    table::print_grid(&configs, &records[..shown]);
    info!(
        "Displayed {} of {} row(s) from {:?} as '{}'",
        shown,
        records.len(),
        args.input,
        view.dataset_name()
    );
    Ok(())
}
