//! The column rule engine: ordered layers of view-specific configuration.
//!
//! Resolution starts from a base configuration per schema column and applies
//! rule layers selected by the view context. Layers merge per field, so a
//! later layer overrides exactly the fields it names and nothing else. The
//! grouped and ungrouped sub-modes are mutually exclusive branches of the
//! listing family.
//!
//! Every per-name rule is applied through [`patch()`], which silently skips
//! columns absent from the current schema. File variants drift; a missing
//! optional column must never abort resolution.

use indexmap::IndexMap;
use log::debug;

use crate::{
    config::{CellEditor, CellRenderer, ColumnConfig, ColumnPatch, FilterKind},
    format::ValueFormatter,
    order,
    schema::{self, ColumnSchema},
    view::{View, ViewContext},
};

type ConfigMap = IndexMap<String, ColumnConfig>;

/// Columns whose values are long enough to warrant the large text editor.
const LARGE_TEXT_COLUMNS: &[&str] = &["Copy Paste", "Winners", "Players"];

/// Replay-link columns are matched by substring: merged and per-result
/// variants all carry the suffix.
const REPLAY_COLUMN_SUBSTRING: &str = "Replays";

const GROUPED_PINNED_COLUMNS: &[&str] = &["Winners", "Players", "Difficulty"];

/// Rate-style ratings columns formatted as whole percentages.
const RATE_COLUMNS: &[&str] = &[
    "Award Rate",
    "Difficulty Record",
    "Difficulty Completion",
    "Win Rate",
];

const TOP5_COLUMN: &str = "Top-5 Difficulties";
const TOP5_EDIT_PLACEHOLDER: &str = "n/a";

/// Fixed pixel widths for the listing family.
const LISTING_WIDTHS: &[(&str, u32)] = &[
    ("Difficulty", 103),
    ("Winners", 110),
    ("Players", 110),
    ("Win Replays", 100),
    ("Merged Win Replays", 160),
    ("Loss Replays", 110),
    ("Merged Loss Replays", 160),
];

const COUNT_COLUMN_WIDTH: u32 = 61;
const COUNT_HEADER_GLYPH: &str = "#";

const GAMES_TOOLTIP: &str = "Weight: 0.4\nCount of games from 0 to 20";

/// Explanatory tooltips for metric columns, applied regardless of view.
/// Each entry touches a disjoint column, so order does not matter here.
const COLUMN_TOOLTIPS: &[(&str, &str)] = &[
    (
        "Award Rate",
        "Weight: 0\nEco and damage awards summed for games with more than one player, divided by the count of those games",
    ),
    (
        "Weighted Award Rate",
        "Weight: 1\nSame as Award Rate but also multiplied by the number of teammates in each game",
    ),
    (
        "Difficulty Record",
        "Weight: ~0.075\nHighest difficulty won (winners/players)",
    ),
    (
        "Difficulty Completion",
        "Weight: ~0.075\nCompletion of the best difficulty record: unique teammates divided by the mapped value for the lobby size",
    ),
    (
        "Difficulty Losers Sum",
        "Weight: 0.4\nSum of unique players that lost to gamesettings won by the player",
    ),
    ("#Settings", "Weight: 0.01\nUnique settings"),
    ("#Games", GAMES_TOOLTIP),
    ("Win Rate", "Weight: 0.005\nWins/Games"),
    (
        "Difficulty Rank",
        "(Difficulty Record * Difficulty Completion) ranked",
    ),
    ("Combined Rank", "Sum of ranks multiplied by their weights"),
    ("PVE Rating", "Linear interpolation of Combined Rank"),
];

/// Resolves the full ordered column configuration for one view.
///
/// Pure and stateless: identical inputs yield structurally identical
/// output, and every invocation allocates its own accumulator.
pub fn resolve_columns(schema: &[ColumnSchema], view: &ViewContext) -> Vec<ColumnConfig> {
    let mut configs = base_layer(schema);
    descriptive_layer(&mut configs);
    match view.view {
        View::RecentGames | View::Gamesettings => {
            listing_family_layer(&mut configs);
            if view.is_grouped() {
                grouped_layer(&mut configs);
            } else {
                unpin_all(&mut configs);
            }
        }
        View::Ratings => ratings_layer(&mut configs, view),
    }
    order::apply_moves(
        configs.into_values().collect(),
        order::view_moves(view.view),
    )
}

/// Applies a patch to a named column, skipping silently when the column is
/// absent from this schema variant.
fn patch(configs: &mut ConfigMap, name: &str, patch: ColumnPatch) {
    match configs.get_mut(name) {
        Some(config) => config.apply(patch),
        None => debug!("No column '{name}' in this schema; rule skipped"),
    }
}

fn base_layer(schema: &[ColumnSchema]) -> ConfigMap {
    let mut configs = ConfigMap::with_capacity(schema.len());
    for column in schema {
        let mut config = ColumnConfig::base(column);
        if LARGE_TEXT_COLUMNS.contains(&column.name.as_str()) {
            config.editor = CellEditor::LargeText;
        }
        // A retained index column exists only for deep-linking; never shown.
        if schema::is_index_column(&column.name) {
            config.hidden = true;
        }
        configs.insert(column.name.clone(), config);
    }
    configs
}

fn descriptive_layer(configs: &mut ConfigMap) {
    for (name, text) in COLUMN_TOOLTIPS {
        patch(configs, name, ColumnPatch::tooltip(text));
    }
}

/// Shared rules for the game-listing family (recent games and grouped
/// gamesettings).
fn listing_family_layer(configs: &mut ConfigMap) {
    for (name, width) in LISTING_WIDTHS {
        patch(configs, name, ColumnPatch::width(*width));
    }

    let replay_columns: Vec<String> = configs
        .keys()
        .filter(|name| name.contains(REPLAY_COLUMN_SUBSTRING))
        .cloned()
        .collect();
    for name in replay_columns {
        patch(
            configs,
            &name,
            ColumnPatch {
                editor: Some(CellEditor::LargeText),
                cell_renderer: Some(CellRenderer::ReplayLinks),
                editable: Some(false),
                filter: Some(FilterKind::Disabled),
                ..ColumnPatch::default()
            },
        );
    }

    patch(
        configs,
        "Difficulty",
        ColumnPatch::formatter(ValueFormatter::PercentTwoDecimals),
    );
    patch(
        configs,
        "Copy Paste",
        ColumnPatch {
            cell_renderer: Some(CellRenderer::CellCopy),
            ..ColumnPatch::default()
        },
    );
}

/// Grouped sub-mode: narrow count columns under a `#` glyph and pin the
/// identity columns to the leading edge.
fn grouped_layer(configs: &mut ConfigMap) {
    for name in ["#Winners", "#Players"] {
        patch(
            configs,
            name,
            ColumnPatch {
                width: Some(COUNT_COLUMN_WIDTH),
                header_name: Some(COUNT_HEADER_GLYPH.to_string()),
                ..ColumnPatch::default()
            },
        );
    }

    for (name, config) in configs.iter_mut() {
        config.pinned =
            GROUPED_PINNED_COLUMNS.contains(&name.as_str()) || name.contains(COUNT_HEADER_GLYPH);
    }

    patch(configs, "#Games", ColumnPatch::tooltip(GAMES_TOOLTIP));
}

/// Ungrouped sub-mode: nothing stays pinned, whatever earlier layers did.
fn unpin_all(configs: &mut ConfigMap) {
    for config in configs.values_mut() {
        config.pinned = false;
    }
}

fn ratings_layer(configs: &mut ConfigMap, view: &ViewContext) {
    patch(configs, "Player", ColumnPatch::pinned(true));

    for name in RATE_COLUMNS {
        patch(
            configs,
            name,
            ColumnPatch::formatter(ValueFormatter::PercentRounded),
        );
    }

    patch(
        configs,
        "Weighted Award Rate",
        ColumnPatch::formatter(ValueFormatter::PaddedFloat),
    );
    if let Some(per_player) = view.per_player_column() {
        patch(
            configs,
            &per_player,
            ColumnPatch::formatter(ValueFormatter::PaddedFloat),
        );
    }

    patch(
        configs,
        "Difficulty Score",
        ColumnPatch {
            cell_renderer: Some(CellRenderer::DifficultyScore {
                view: view.view,
                variant: view.variant,
                filter: view.filter,
            }),
            ..ColumnPatch::default()
        },
    );

    patch(
        configs,
        TOP5_COLUMN,
        ColumnPatch {
            hidden: Some(true),
            edit_placeholder: Some(TOP5_EDIT_PLACEHOLDER.to_string()),
            ..ColumnPatch::default()
        },
    );
}
