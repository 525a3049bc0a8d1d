//! Cell value formatters installed by the column rule engine.
//!
//! A formatter is a pure function from raw value to display text. Returning
//! `None` means "no opinion": the presentation layer falls back to the raw
//! value's own display form.

use serde::{Deserialize, Serialize};

use crate::data::RawValue;

/// Width every padded float is right-padded to, aligning rating columns.
const PADDED_FLOAT_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormatter {
    /// Zero-valued metrics render as blank, not "0".
    #[default]
    ZeroBlank,
    /// Fractional difficulty as a two-decimal percentage; blank when falsy.
    PercentTwoDecimals,
    /// Fractional rate as a whole-number percentage; missing counts as 0.
    PercentRounded,
    /// One decimal place, trailing `.0` stripped, space-padded to width 4.
    PaddedFloat,
}

impl ValueFormatter {
    pub fn apply(&self, value: &RawValue) -> Option<String> {
        match self {
            ValueFormatter::ZeroBlank => value.is_zero().then(String::new),
            ValueFormatter::PercentTwoDecimals => match value.as_f64() {
                None => None,
                Some(n) if n == 0.0 => None,
                Some(n) => Some(format!("{:.2}%", n * 100.0)),
            },
            ValueFormatter::PercentRounded => {
                let n = value.as_f64().unwrap_or(0.0);
                Some(format!("{}%", (n * 100.0).round() as i64))
            }
            ValueFormatter::PaddedFloat => {
                let n = value.as_f64()?;
                let mut text = format!("{n:.1}");
                if let Some(stripped) = text.strip_suffix(".0") {
                    text.truncate(stripped.len());
                }
                Some(format!("{text:<width$}", width = PADDED_FLOAT_WIDTH))
            }
        }
    }
}
