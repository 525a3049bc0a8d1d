//! Column configuration model and the per-field merge used by the rule
//! engine.
//!
//! A [`ColumnConfig`] starts from [`ColumnConfig::base()`] and is refined by
//! successive [`ColumnPatch`] layers. A patch only carries the fields it
//! wants to change; applying one is shallow last-writer-wins per field, so a
//! later layer never clobbers settings it does not mention.

use serde::{Deserialize, Serialize};

use crate::{
    format::ValueFormatter,
    schema::{ColumnSchema, SemanticType},
    view::{AiVariant, FilterMode, View},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Numeric,
    Text,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellEditor {
    Text,
    LargeText,
}

/// Custom cell renderers the presentation layer registers by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellRenderer {
    /// Replay identifiers rendered as external links.
    ReplayLinks,
    /// Copy-to-clipboard cell for the lobby paste string.
    CellCopy,
    /// Difficulty score cell with an explanatory tooltip; the tooltip
    /// re-queries data for the context it was resolved under.
    DifficultyScore {
        view: View,
        variant: Option<AiVariant>,
        filter: Option<FilterMode>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub field: String,
    pub header_name: String,
    pub filter: FilterKind,
    pub editor: CellEditor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_renderer: Option<CellRenderer>,
    pub formatter: ValueFormatter,
    pub pinned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_tooltip: Option<String>,
    pub hidden: bool,
    pub editable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_placeholder: Option<String>,
}

impl ColumnConfig {
    /// Base-layer configuration for a schema column: header equals the
    /// field name, filter follows the semantic type, zero-blank formatting.
    pub fn base(column: &ColumnSchema) -> Self {
        Self {
            field: column.name.clone(),
            header_name: column.name.clone(),
            filter: match column.semantic_type {
                SemanticType::Number => FilterKind::Numeric,
                SemanticType::String => FilterKind::Text,
            },
            editor: CellEditor::Text,
            cell_renderer: None,
            formatter: ValueFormatter::ZeroBlank,
            pinned: false,
            width: None,
            header_tooltip: None,
            hidden: false,
            editable: true,
            edit_placeholder: None,
        }
    }

    pub fn apply(&mut self, patch: ColumnPatch) {
        if let Some(header_name) = patch.header_name {
            self.header_name = header_name;
        }
        if let Some(filter) = patch.filter {
            self.filter = filter;
        }
        if let Some(editor) = patch.editor {
            self.editor = editor;
        }
        if let Some(cell_renderer) = patch.cell_renderer {
            self.cell_renderer = Some(cell_renderer);
        }
        if let Some(formatter) = patch.formatter {
            self.formatter = formatter;
        }
        if let Some(pinned) = patch.pinned {
            self.pinned = pinned;
        }
        if let Some(width) = patch.width {
            self.width = Some(width);
        }
        if let Some(header_tooltip) = patch.header_tooltip {
            self.header_tooltip = Some(header_tooltip);
        }
        if let Some(hidden) = patch.hidden {
            self.hidden = hidden;
        }
        if let Some(editable) = patch.editable {
            self.editable = editable;
        }
        if let Some(edit_placeholder) = patch.edit_placeholder {
            self.edit_placeholder = Some(edit_placeholder);
        }
    }
}

/// Partial column configuration; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ColumnPatch {
    pub header_name: Option<String>,
    pub filter: Option<FilterKind>,
    pub editor: Option<CellEditor>,
    pub cell_renderer: Option<CellRenderer>,
    pub formatter: Option<ValueFormatter>,
    pub pinned: Option<bool>,
    pub width: Option<u32>,
    pub header_tooltip: Option<String>,
    pub hidden: Option<bool>,
    pub editable: Option<bool>,
    pub edit_placeholder: Option<String>,
}

impl ColumnPatch {
    pub fn width(width: u32) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    pub fn formatter(formatter: ValueFormatter) -> Self {
        Self {
            formatter: Some(formatter),
            ..Self::default()
        }
    }

    pub fn tooltip(text: &str) -> Self {
        Self {
            header_tooltip: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn pinned(pinned: bool) -> Self {
        Self {
            pinned: Some(pinned),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_column(name: &str) -> ColumnSchema {
        ColumnSchema {
            name: name.to_string(),
            semantic_type: SemanticType::String,
        }
    }

    #[test]
    fn base_follows_semantic_type_for_filter_kind() {
        let text = ColumnConfig::base(&string_column("Winners"));
        assert_eq!(text.filter, FilterKind::Text);
        assert_eq!(text.header_name, "Winners");
        assert_eq!(text.formatter, ValueFormatter::ZeroBlank);

        let numeric = ColumnConfig::base(&ColumnSchema {
            name: "#Players".to_string(),
            semantic_type: SemanticType::Number,
        });
        assert_eq!(numeric.filter, FilterKind::Numeric);
    }

    #[test]
    fn apply_is_last_writer_wins_per_field() {
        let mut config = ColumnConfig::base(&string_column("Difficulty"));
        config.apply(ColumnPatch::width(103));
        config.apply(ColumnPatch {
            header_name: Some("#".to_string()),
            ..ColumnPatch::default()
        });

        // The second patch did not mention width, so the first still holds.
        assert_eq!(config.width, Some(103));
        assert_eq!(config.header_name, "#");

        config.apply(ColumnPatch::width(61));
        assert_eq!(config.width, Some(61));
    }
}
