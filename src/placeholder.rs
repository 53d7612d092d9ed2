//! Placeholder classification and numeric leaf coercion
//!
//! The upstream service writes `"n/a"` (in any case, sometimes padded) where a
//! number is missing. [`NumericLeaf`] makes that distinction explicit for a
//! single JSON leaf, and [`NumericLeaf::or_zero`] is the one place where a
//! missing or unreadable number becomes zero.

use crate::constants::PLACEHOLDER_TOKENS;
use serde_json::Value;

/// Returns true iff the trimmed, lower-cased text is a placeholder token
pub fn is_placeholder(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    PLACEHOLDER_TOKENS.contains(&normalized.as_str())
}

/// Classification of a JSON leaf expected to hold a number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericLeaf {
    /// Native number or quoted number that parsed
    Known(f64),
    /// Placeholder token, empty text or null
    Placeholder,
    /// Text or another JSON kind that does not read as a number
    Unparseable,
}

impl NumericLeaf {
    /// Classify a leaf; quoted numbers are parsed after trimming
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(v) if v.is_finite() => Self::Known(v),
                _ => Self::Unparseable,
            },
            Value::String(s) => Self::classify_text(s),
            Value::Null => Self::Placeholder,
            _ => Self::Unparseable,
        }
    }

    /// Classify text as it would appear inside a quoted number
    pub fn classify_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() || is_placeholder(trimmed) {
            return Self::Placeholder;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Self::Known(v),
            _ => Self::Unparseable,
        }
    }

    /// Collapse to a number, degrading placeholders and unreadable values to zero
    pub fn or_zero(self) -> f64 {
        match self {
            Self::Known(v) => v,
            Self::Placeholder | Self::Unparseable => 0.0,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}
