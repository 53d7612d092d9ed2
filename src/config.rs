//! Decoder configuration.
//!
//! Controls which tolerance mechanisms the decoder applies: envelope
//! detection, the single sanitizing retry, and how the time-keyed section
//! extractor treats ambiguous or missing sections.

use serde::{Deserialize, Serialize};

/// Resolution rule when several top-level keys match a section prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SectionAmbiguity {
    /// Fail with an ambiguity error listing every candidate
    #[default]
    Reject,
    /// Take the first candidate in document order
    FirstInDocumentOrder,
}

/// Global configuration for response decoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Inspect payloads for embedded service notices before decoding
    pub detect_envelope: bool,

    /// Retry a failed strict decode once after placeholder repair
    pub sanitize_on_failure: bool,

    /// How to resolve several matching time-keyed sections
    pub section_ambiguity: SectionAmbiguity,

    /// Return an empty series instead of failing when no section matches
    pub allow_missing_section: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            detect_envelope: true,
            sanitize_on_failure: true,
            section_ambiguity: SectionAmbiguity::Reject,
            allow_missing_section: false,
        }
    }
}

impl DecoderConfig {
    /// Strict decoding only: no envelope inspection, no sanitizing retry
    pub fn strict() -> Self {
        Self {
            detect_envelope: false,
            sanitize_on_failure: false,
            ..Self::default()
        }
    }

    /// Skip envelope inspection (the transport already ran it)
    pub fn without_envelope_detection(mut self) -> Self {
        self.detect_envelope = false;
        self
    }

    /// Disable the sanitizing retry
    pub fn without_sanitizing(mut self) -> Self {
        self.sanitize_on_failure = false;
        self
    }

    /// Set the section ambiguity rule
    pub fn with_section_ambiguity(mut self, ambiguity: SectionAmbiguity) -> Self {
        self.section_ambiguity = ambiguity;
        self
    }

    /// Accept responses without a time-keyed section
    pub fn with_missing_section_allowed(mut self) -> Self {
        self.allow_missing_section = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DecoderConfig::default();
        assert!(config.detect_envelope);
        assert!(config.sanitize_on_failure);
        assert_eq!(config.section_ambiguity, SectionAmbiguity::Reject);
        assert!(!config.allow_missing_section);
    }

    #[test]
    fn test_builder_methods() {
        let config = DecoderConfig::default()
            .without_envelope_detection()
            .with_section_ambiguity(SectionAmbiguity::FirstInDocumentOrder)
            .with_missing_section_allowed();

        assert!(!config.detect_envelope);
        assert!(config.sanitize_on_failure);
        assert_eq!(config.section_ambiguity, SectionAmbiguity::FirstInDocumentOrder);
        assert!(config.allow_missing_section);

        assert_eq!(DecoderConfig::strict(), DecoderConfig::default().without_envelope_detection().without_sanitizing());
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: DecoderConfig =
            serde_json::from_str(r#"{"section_ambiguity":"FirstInDocumentOrder"}"#).unwrap();
        assert!(config.detect_envelope);
        assert_eq!(config.section_ambiguity, SectionAmbiguity::FirstInDocumentOrder);
    }
}
