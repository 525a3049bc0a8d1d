//! Row materialization: positional raw values become named records.
//!
//! Each decoded row is a positional sequence aligned to the filtered schema
//! order. Position `i` maps to `schema[i]`; trailing values with no schema
//! entry are skipped rather than failing, so schema drift between file
//! variants never aborts a load.

use indexmap::IndexMap;
use log::debug;

use crate::{data::RawValue, schema::ColumnSchema};

/// One grid row, keyed by column name in schema order.
pub type RowRecord = IndexMap<String, RawValue>;

pub fn materialize_rows(schema: &[ColumnSchema], raw_rows: &[Vec<RawValue>]) -> Vec<RowRecord> {
    raw_rows
        .iter()
        .enumerate()
        .map(|(row_index, raw_row)| {
            if raw_row.len() > schema.len() {
                debug!(
                    "Row {} carries {} value(s) beyond the known schema",
                    row_index,
                    raw_row.len() - schema.len()
                );
            }
            raw_row
                .iter()
                .zip(schema.iter())
                .map(|(value, column)| (column.name.clone(), value.clone()))
                .collect()
        })
        .collect()
}
