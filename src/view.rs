//! View context: which report view is being resolved, for which AI variant,
//! under which filter preset.
//!
//! The context decides which rule layers the column engine applies and which
//! reorder directives run afterwards. Snapshot file naming is an external
//! pipeline convention surfaced here as [`ViewContext::dataset_name()`].

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum View {
    RecentGames,
    Gamesettings,
    Ratings,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::RecentGames => "recent-games",
            View::Gamesettings => "gamesettings",
            View::Ratings => "ratings",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum AiVariant {
    Barbarian,
    Raptors,
    Scavengers,
}

impl fmt::Display for AiVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AiVariant::Barbarian => "Barbarian",
            AiVariant::Raptors => "Raptors",
            AiVariant::Scavengers => "Scavengers",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    Regular,
    Unbeaten,
    Easy,
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterMode::Regular => "regular",
            FilterMode::Unbeaten => "unbeaten",
            FilterMode::Easy => "easy",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewContext {
    pub view: View,
    pub variant: Option<AiVariant>,
    pub filter: Option<FilterMode>,
}

impl ViewContext {
    pub fn new(view: View) -> Self {
        Self {
            view,
            variant: None,
            filter: None,
        }
    }

    pub fn with_variant(mut self, variant: AiVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Game-listing family: one row per game or per grouped gamesetting.
    pub fn is_listing_family(&self) -> bool {
        matches!(self.view, View::RecentGames | View::Gamesettings)
    }

    /// Grouped sub-mode within the listing family.
    pub fn is_grouped(&self) -> bool {
        self.view == View::Gamesettings
    }

    /// The ratings view keeps the synthetic index column (hidden) so a row
    /// can be deep-linked by position.
    pub fn requires_index_column(&self) -> bool {
        self.view == View::Ratings
    }

    /// Name of the variant-specific handicap column, e.g. `Barbarian Per
    /// Player`, when a variant is selected.
    pub fn per_player_column(&self) -> Option<String> {
        self.variant.map(|v| format!("{v} Per Player"))
    }

    /// File stem the offline pipeline publishes for this context.
    pub fn dataset_name(&self) -> String {
        let variant = self.variant.unwrap_or(AiVariant::Barbarian);
        match self.view {
            View::RecentGames => "recent_games".to_string(),
            View::Gamesettings => {
                let filter = self.filter.unwrap_or(FilterMode::Regular);
                format!("{variant}.{filter}.grouped_gamesettings")
            }
            View::Ratings => format!("{variant}.pve_rating"),
        }
    }
}
