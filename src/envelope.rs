//! Detection of service notices embedded in response payloads.
//!
//! Rate-limit warnings, premium-endpoint notices and explicit errors arrive as
//! HTTP 200 responses whose top-level object carries a single notice key
//! instead of the expected data. These must be caught before typed decoding,
//! otherwise they surface as confusing missing-field errors or empty records.

use crate::constants::ENVELOPE_KEYS;
use crate::error::{DecodeError, Result};
use crate::models::EnvelopeMessage;
use serde_json::{Map, Value};
use tracing::debug;

/// Inspect raw bytes for a top-level service notice.
///
/// Returns `None` when the bytes are not a JSON object (the caller's strict
/// decode reports that itself) or when no notice key carries non-blank text.
/// Keys are checked in priority order and only the first hit is reported.
pub fn detect_envelope_message(bytes: &[u8]) -> Option<EnvelopeMessage> {
    let object: Map<String, Value> = serde_json::from_slice(bytes).ok()?;
    detect_in_object(&object)
}

/// Same as [`detect_envelope_message`] for an already decoded object
pub fn detect_in_object(object: &Map<String, Value>) -> Option<EnvelopeMessage> {
    ENVELOPE_KEYS.iter().find_map(|(key, kind)| {
        let message = object.get(*key)?.as_str()?;
        if message.trim().is_empty() {
            return None;
        }
        Some(EnvelopeMessage {
            kind: *kind,
            message: message.to_string(),
        })
    })
}

/// Fail with [`DecodeError::Envelope`] when the bytes carry a service notice
pub fn check_envelope(bytes: &[u8]) -> Result<()> {
    match detect_envelope_message(bytes) {
        Some(notice) => {
            debug!("Service {} detected: {}", notice.kind, notice.message);
            Err(DecodeError::envelope(notice.kind, notice.message))
        }
        None => Ok(()),
    }
}
