use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw cell value as decoded from a snapshot file.
///
/// Values pass through the materializer unchanged; conversion to display
/// form is owned by [`crate::format::ValueFormatter`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawValue {
    Null,
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Numeric reading of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Null => None,
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse().ok(),
        }
    }

    /// True for the values the display convention treats as zero-valued.
    pub fn is_zero(&self) -> bool {
        match self {
            RawValue::Null => false,
            RawValue::Number(n) => *n == 0.0,
            RawValue::Text(s) => s == "0",
        }
    }

    pub fn as_display(&self) -> String {
        match self {
            RawValue::Null => String::new(),
            RawValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    (*n as i64).to_string()
                } else {
                    n.to_string()
                }
            }
            RawValue::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_display())
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_f64_reads_numbers_and_numeric_text() {
        assert_eq!(RawValue::Number(2.5).as_f64(), Some(2.5));
        assert_eq!(RawValue::Text(" 42 ".to_string()).as_f64(), Some(42.0));
        assert_eq!(RawValue::Text("A,B".to_string()).as_f64(), None);
        assert_eq!(RawValue::Null.as_f64(), None);
    }

    #[test]
    fn is_zero_matches_number_and_text_zero() {
        assert!(RawValue::Number(0.0).is_zero());
        assert!(RawValue::Text("0".to_string()).is_zero());
        assert!(!RawValue::Text("0.0".to_string()).is_zero());
        assert!(!RawValue::Null.is_zero());
    }

    #[test]
    fn as_display_renders_integral_floats_without_fraction() {
        assert_eq!(RawValue::Number(2.0).as_display(), "2");
        assert_eq!(RawValue::Number(2.5).as_display(), "2.5");
        assert_eq!(RawValue::Null.as_display(), "");
    }

    #[test]
    fn untagged_serde_round_trips_each_variant() {
        let decoded: Vec<RawValue> = serde_json::from_str(r#"["A,B", 2, null]"#).unwrap();
        assert_eq!(
            decoded,
            vec![
                RawValue::Text("A,B".to_string()),
                RawValue::Number(2.0),
                RawValue::Null
            ]
        );
    }
}
