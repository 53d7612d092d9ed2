//! Error handling for response decoding operations.
//!
//! Every failure the decoding layer can surface is one variant of [`DecodeError`]:
//! service notices embedded in the payload, structural (shape) problems, timestamp
//! format problems and strict decode failures. Numeric leaves that degrade to zero
//! are not errors and never appear here.

use crate::models::EnvelopeKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("service {kind}: {message}")]
    Envelope { kind: EnvelopeKind, message: String },

    #[error("Unexpected shape at {path}: {reason}")]
    Shape { path: String, reason: String },

    #[error("Invalid timestamp key '{key}' (expected layout '{layout}')")]
    Format {
        key: String,
        layout: &'static str,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Failed to decode {target}: {source}")]
    Decode {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Ambiguous time-keyed section for {selector}: candidates {candidates:?}")]
    AmbiguousSection {
        selector: String,
        candidates: Vec<String>,
    },

    #[error("No time-keyed section matches {selector}")]
    MissingSection { selector: String },

    #[error("Logging setup failed: {message}")]
    Logging { message: String },
}

pub type Result<T> = std::result::Result<T, DecodeError>;

impl DecodeError {
    /// Create an error for an embedded service notice
    pub fn envelope(kind: EnvelopeKind, message: impl Into<String>) -> Self {
        Self::Envelope {
            kind,
            message: message.into(),
        }
    }

    /// Create a shape error anchored at a JSON path
    pub fn shape(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Shape {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a timestamp format error naming the offending key
    pub fn format(key: impl Into<String>, layout: &'static str, source: chrono::ParseError) -> Self {
        Self::Format {
            key: key.into(),
            layout,
            source,
        }
    }

    /// Create a strict decode error for the given target type
    pub fn decode(target: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { target, source }
    }

    pub fn ambiguous_section(selector: impl Into<String>, candidates: Vec<String>) -> Self {
        Self::AmbiguousSection {
            selector: selector.into(),
            candidates,
        }
    }

    pub fn missing_section(selector: impl Into<String>) -> Self {
        Self::MissingSection {
            selector: selector.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    /// The embedded service notice, if this error carries one
    pub fn envelope_kind(&self) -> Option<EnvelopeKind> {
        match self {
            Self::Envelope { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
