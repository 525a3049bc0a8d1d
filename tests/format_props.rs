use proptest::prelude::*;

use snapgrid::data::RawValue;
use snapgrid::format::ValueFormatter;
use snapgrid::rules::resolve_columns;
use snapgrid::schema::{ColumnSchema, SemanticType};
use snapgrid::view::{View, ViewContext};

proptest! {
    #[test]
    fn percent_rounded_matches_round_of_scaled_value(v in 0.0f64..10.0) {
        let formatted = ValueFormatter::PercentRounded
            .apply(&RawValue::Number(v))
            .expect("always formats");
        let expected = format!("{}%", (v * 100.0).round() as i64);
        prop_assert_eq!(formatted, expected);
    }

    #[test]
    fn padded_float_output_is_at_least_four_chars(v in -999.0f64..999.0) {
        let formatted = ValueFormatter::PaddedFloat
            .apply(&RawValue::Number(v))
            .expect("defined input always formats");
        prop_assert!(formatted.chars().count() >= 4);
        prop_assert!(!formatted.ends_with(".0"));
    }

    #[test]
    fn zero_blank_only_blanks_zero(v in -100.0f64..100.0) {
        let formatted = ValueFormatter::ZeroBlank.apply(&RawValue::Number(v));
        if v == 0.0 {
            prop_assert_eq!(formatted, Some(String::new()));
        } else {
            prop_assert_eq!(formatted, None);
        }
    }

    #[test]
    fn resolution_is_pure_over_arbitrary_schemas(
        names in proptest::collection::vec("[A-Za-z#][A-Za-z0-9 #-]{0,14}", 1..12)
    ) {
        let mut seen = std::collections::HashSet::new();
        let schema: Vec<ColumnSchema> = names
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .enumerate()
            .map(|(idx, name)| ColumnSchema {
                name,
                semantic_type: if idx % 2 == 0 {
                    SemanticType::String
                } else {
                    SemanticType::Number
                },
            })
            .collect();

        for view in [View::RecentGames, View::Gamesettings, View::Ratings] {
            let ctx = ViewContext::new(view);
            let first = resolve_columns(&schema, &ctx);
            let second = resolve_columns(&schema, &ctx);
            prop_assert_eq!(&first, &second);
            // Every schema column resolves to exactly one config.
            prop_assert_eq!(first.len(), schema.len());
        }
    }
}
