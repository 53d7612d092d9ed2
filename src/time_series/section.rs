//! Location of the dynamically-named, time-keyed section

use crate::config::SectionAmbiguity;
use crate::constants::TECHNICAL_ANALYSIS_PREFIX;
use crate::error::{DecodeError, Result};
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, warn};

/// Rule for recognising the section key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionSelector {
    /// Any key starting with the prefix
    Prefix(String),
    /// Exactly this key
    Exact(String),
}

impl SectionSelector {
    pub fn prefix(prefix: impl Into<String>) -> Self {
        SectionSelector::Prefix(prefix.into())
    }

    /// Section label of a technical indicator, from its canonical name
    pub fn indicator(name: &str) -> Self {
        SectionSelector::Exact(format!(
            "{}{}",
            TECHNICAL_ANALYSIS_PREFIX,
            canonical_indicator_name(name)
        ))
    }

    pub fn matches(&self, key: &str) -> bool {
        match self {
            SectionSelector::Prefix(prefix) => key.starts_with(prefix.as_str()),
            SectionSelector::Exact(label) => key == label,
        }
    }
}

impl fmt::Display for SectionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionSelector::Prefix(prefix) => write!(f, "prefix '{}'", prefix),
            SectionSelector::Exact(label) => write!(f, "key '{}'", label),
        }
    }
}

/// Indicator names are matched trimmed and upper-cased ("sma" -> "SMA")
pub fn canonical_indicator_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Find the section matching `selector` among the top-level keys.
///
/// Returns the matched key verbatim with its value, or `None` when no key
/// matches. Several matches are resolved by `ambiguity`.
pub fn locate_section<'a>(
    root: &'a Map<String, Value>,
    selector: &SectionSelector,
    ambiguity: SectionAmbiguity,
) -> Result<Option<(&'a str, &'a Value)>> {
    let candidates: Vec<(&'a str, &'a Value)> = root
        .iter()
        .filter(|(key, _)| selector.matches(key))
        .map(|(key, value)| (key.as_str(), value))
        .collect();

    match (candidates.len(), ambiguity) {
        (0, _) => {
            debug!("No section matches {}", selector);
            Ok(None)
        }
        (1, _) | (_, SectionAmbiguity::FirstInDocumentOrder) => {
            if candidates.len() > 1 {
                warn!(
                    "{} sections match {}; using '{}'",
                    candidates.len(),
                    selector,
                    candidates[0].0
                );
            }
            Ok(candidates.into_iter().next())
        }
        (_, SectionAmbiguity::Reject) => Err(DecodeError::ambiguous_section(
            selector.to_string(),
            candidates.iter().map(|(key, _)| key.to_string()).collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn root(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_indicator_selector_is_exact() {
        let selector = SectionSelector::indicator(" sma ");
        assert_eq!(selector, SectionSelector::Exact("Technical Analysis: SMA".to_string()));
        assert!(selector.matches("Technical Analysis: SMA"));
        assert!(!selector.matches("Technical Analysis: SMAX"));
        assert!(!selector.matches("Technical Analysis: sma"));
    }

    #[test]
    fn test_prefix_selector_records_label_verbatim() {
        let map = root(json!({
            "Meta Data": {},
            "Time Series (Digital Currency Daily)": {"2025-12-12": {}}
        }));

        let (label, value) = locate_section(&map, &SectionSelector::prefix("Time Series"), SectionAmbiguity::Reject)
            .unwrap()
            .unwrap();
        assert_eq!(label, "Time Series (Digital Currency Daily)");
        assert!(value.is_object());
    }

    #[test]
    fn test_no_match_is_none() {
        let map = root(json!({"Meta Data": {}}));
        let found = locate_section(&map, &SectionSelector::indicator("RSI"), SectionAmbiguity::Reject).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_ambiguous_prefix_is_rejected() {
        let map = root(json!({
            "Time Series (Daily)": {},
            "Time Series (Weekly)": {}
        }));

        let err = locate_section(&map, &SectionSelector::prefix("Time Series"), SectionAmbiguity::Reject)
            .unwrap_err();
        match err {
            DecodeError::AmbiguousSection { selector, candidates } => {
                assert_eq!(selector, "prefix 'Time Series'");
                assert_eq!(candidates, vec!["Time Series (Daily)", "Time Series (Weekly)"]);
            }
            other => panic!("expected ambiguity error, got {other:?}"),
        }
    }

    #[test]
    fn test_ambiguous_prefix_first_in_document_order() {
        let map = root(json!({
            "Time Series (Weekly)": {},
            "Time Series (Daily)": {}
        }));

        let (label, _) = locate_section(
            &map,
            &SectionSelector::prefix("Time Series"),
            SectionAmbiguity::FirstInDocumentOrder,
        )
        .unwrap()
        .unwrap();
        assert_eq!(label, "Time Series (Weekly)");
    }
}
