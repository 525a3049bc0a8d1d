//! Column reordering: pull named columns to fixed lead positions.
//!
//! Directives run in the order given and each one sees the array as the
//! previous moves left it, so target indices refer to live positions. A
//! directive that cannot be satisfied is logged and skipped; it never
//! aborts the remaining moves.

use log::warn;

use crate::{
    config::ColumnConfig,
    view::View,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDirective {
    pub field: &'static str,
    pub to_index: usize,
}

/// Lead-column directives per view. The grouped listing fronts its count
/// columns; the ratings view fronts the rank and headline rating.
pub fn view_moves(view: View) -> &'static [MoveDirective] {
    match view {
        View::Gamesettings => &[
            MoveDirective {
                field: "#Winners",
                to_index: 3,
            },
            MoveDirective {
                field: "#Players",
                to_index: 4,
            },
        ],
        View::Ratings => &[
            MoveDirective {
                field: "Combined Rank",
                to_index: 1,
            },
            MoveDirective {
                field: "PVE Rating",
                to_index: 2,
            },
        ],
        View::RecentGames => &[],
    }
}

pub fn apply_moves(mut columns: Vec<ColumnConfig>, moves: &[MoveDirective]) -> Vec<ColumnConfig> {
    for directive in moves {
        let Some(from_index) = columns.iter().position(|c| c.field == directive.field) else {
            warn!("Cannot move column '{}': not present", directive.field);
            continue;
        };
        if directive.to_index >= columns.len() {
            warn!(
                "Cannot move column '{}' to index {}: out of bounds for {} column(s)",
                directive.field,
                directive.to_index,
                columns.len()
            );
            continue;
        }
        let column = columns.remove(from_index);
        columns.insert(directive.to_index, column);
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::ColumnConfig,
        schema::{ColumnSchema, SemanticType},
    };

    fn configs(names: &[&str]) -> Vec<ColumnConfig> {
        names
            .iter()
            .map(|name| {
                ColumnConfig::base(&ColumnSchema {
                    name: name.to_string(),
                    semantic_type: SemanticType::String,
                })
            })
            .collect()
    }

    fn fields(columns: &[ColumnConfig]) -> Vec<&str> {
        columns.iter().map(|c| c.field.as_str()).collect()
    }

    #[test]
    fn moves_apply_in_sequence_on_live_state() {
        let moved = apply_moves(
            configs(&["a", "b", "c", "d", "e"]),
            &[
                MoveDirective {
                    field: "d",
                    to_index: 0,
                },
                MoveDirective {
                    field: "a",
                    to_index: 2,
                },
            ],
        );
        // After the first move: d a b c e; the second sees that state.
        assert_eq!(fields(&moved), vec!["d", "b", "a", "c", "e"]);
    }

    #[test]
    fn missing_field_and_out_of_bounds_targets_are_skipped() {
        let moved = apply_moves(
            configs(&["a", "b", "c"]),
            &[
                MoveDirective {
                    field: "zz",
                    to_index: 0,
                },
                MoveDirective {
                    field: "c",
                    to_index: 9,
                },
                MoveDirective {
                    field: "c",
                    to_index: 0,
                },
            ],
        );
        assert_eq!(fields(&moved), vec!["c", "a", "b"]);
    }

    #[test]
    fn untouched_columns_keep_relative_order() {
        let moved = apply_moves(
            configs(&["a", "b", "c", "d"]),
            &[MoveDirective {
                field: "c",
                to_index: 0,
            }],
        );
        assert_eq!(fields(&moved), vec!["c", "a", "b", "d"]);
    }
}
