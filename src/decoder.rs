//! Response decoding entry points.
//!
//! [`ResponseDecoder`] runs the tolerance pipeline for one payload:
//!
//! 1. envelope detection, so service notices fail fast with their text;
//! 2. a strict typed decode;
//! 3. when that fails and the bytes contain a quoted placeholder, one
//!    schema-driven sanitizing pass followed by a second strict decode.
//!
//! If the second decode also fails the error of the first attempt is
//! returned, since it describes the payload the caller actually sent.

use crate::config::DecoderConfig;
use crate::envelope::{check_envelope, detect_in_object};
use crate::error::{DecodeError, Result};
use crate::json::parse_object;
use crate::models::TimeSeries;
use crate::sanitizer::{contains_placeholder_token, sanitize_bytes};
use crate::schema::{Described, Schema};
use crate::time_series::{SeriesRequest, extract_series};
use serde::de::DeserializeOwned;
use std::any::type_name;
use tracing::{debug, warn};

/// Decoder for service responses
///
/// Holds only its configuration; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ResponseDecoder {
    config: DecoderConfig,
}

impl ResponseDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a record type that publishes its own schema
    pub fn decode<T>(&self, bytes: &[u8]) -> Result<T>
    where
        T: DeserializeOwned + Described,
    {
        self.decode_with_schema(bytes, T::schema())
    }

    /// Decode `bytes` into `T`, using `schema` for the sanitizing retry
    pub fn decode_with_schema<T>(&self, bytes: &[u8], schema: &Schema) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let target = type_name::<T>();

        if self.config.detect_envelope {
            check_envelope(bytes)?;
        }

        let strict_error = match serde_json::from_slice::<T>(bytes) {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        if !self.config.sanitize_on_failure || !contains_placeholder_token(bytes) {
            return Err(DecodeError::decode(target, strict_error));
        }

        debug!("Strict decode of {} failed ({}); sanitizing", target, strict_error);
        let (repaired, rewrites) = match sanitize_bytes(bytes, schema) {
            Ok(result) => result,
            Err(e) => {
                debug!("Payload for {} is not sanitizable: {}", target, e);
                return Err(DecodeError::decode(target, strict_error));
            }
        };
        debug!("Rewrote {} leaves for {}", rewrites, target);

        serde_json::from_slice::<T>(&repaired).map_err(|retry_error| {
            warn!("Sanitized decode of {} still failed: {}", target, retry_error);
            DecodeError::decode(target, strict_error)
        })
    }

    /// Decode a time-indexed response into a [`TimeSeries`]
    pub fn decode_series(&self, bytes: &[u8], request: &SeriesRequest) -> Result<TimeSeries> {
        let root = parse_object(bytes, type_name::<TimeSeries>())?;

        if self.config.detect_envelope {
            if let Some(notice) = detect_in_object(&root) {
                debug!("Service {} detected: {}", notice.kind, notice.message);
                return Err(DecodeError::envelope(notice.kind, notice.message));
            }
        }

        extract_series(&root, request, &self.config)
    }
}

/// Decode with the default configuration
pub fn decode<T>(bytes: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Described,
{
    ResponseDecoder::default().decode(bytes)
}

/// Decode a time-indexed response with the default configuration
pub fn decode_series(bytes: &[u8], request: &SeriesRequest) -> Result<TimeSeries> {
    ResponseDecoder::default().decode_series(bytes, request)
}
