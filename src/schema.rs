//! Schema filtering and semantic type classification.
//!
//! The decoded snapshot carries every physical column the pipeline wrote,
//! including artifacts of nested-list encoding and a synthetic row index.
//! [`filter_schema()`] reduces that to the columns a grid should model and
//! classifies each as string-like or numeric.
//!
//! Filtering must never reorder columns: the row materializer aligns raw
//! values to this sequence by position.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::view::ViewContext;

/// Structural artifacts of nested-list encoding.
const LIST_MARKERS: &[&str] = &["list", "item"];

/// Names the pipeline uses for the synthetic leading row index.
const INDEX_MARKERS: &[&str] = &["index", "__index_level_0__"];

/// Optional variadic fields that may appear without a declared type but
/// must still be modeled.
const OPTIONAL_FIELD_SUBSTRING: &str = "Replays";
const OPTIONAL_FIELDS: &[&str] = &["Top-5 Difficulties"];

/// A column as declared in the decoded file's schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawColumnDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    String,
    Number,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnSchema {
    pub name: String,
    pub semantic_type: SemanticType,
}

/// True when the column at `position` is the synthetic leading row index.
fn is_synthetic_index(position: usize, name: &str) -> bool {
    position == 0 && INDEX_MARKERS.contains(&name)
}

pub fn is_index_column(name: &str) -> bool {
    INDEX_MARKERS.contains(&name)
}

fn is_optional_field(name: &str) -> bool {
    name.contains(OPTIONAL_FIELD_SUBSTRING) || OPTIONAL_FIELDS.contains(&name)
}

/// Maps a declared physical type to the semantic type the grid works with.
/// Byte/string encodings are string-like; every other concrete type is
/// numeric. Retained columns without a declared type hold link or label
/// text, so they classify as string-like too.
fn classify(physical_type: Option<&str>) -> SemanticType {
    match physical_type {
        Some(ty) if ty.contains("BYTE_ARRAY") || ty == "UTF8" || ty == "STRING" => {
            SemanticType::String
        }
        Some(_) => SemanticType::Number,
        None => SemanticType::String,
    }
}

/// Drops structural columns and classifies the rest.
///
/// An empty input produces an empty output; upstream decode failures are
/// the caller's concern and never reach this function.
pub fn filter_schema(raw: &[RawColumnDescriptor], view: &ViewContext) -> Vec<ColumnSchema> {
    let mut columns = Vec::with_capacity(raw.len());
    for (position, descriptor) in raw.iter().enumerate() {
        let name = descriptor.name.as_str();
        if LIST_MARKERS.contains(&name) {
            continue;
        }
        if is_synthetic_index(position, name) && !view.requires_index_column() {
            continue;
        }
        if descriptor.physical_type.is_none() && !is_optional_field(name) {
            debug!("Skipping column '{name}' with no declared type");
            continue;
        }
        columns.push(ColumnSchema {
            name: descriptor.name.clone(),
            semantic_type: classify(descriptor.physical_type.as_deref()),
        });
    }
    columns
}
