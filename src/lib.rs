//! Vantage Decoder Library
//!
//! Tolerant decoding of market-data JSON responses into strongly-typed
//! records. The upstream service is loose about its wire format: numbers
//! arrive quoted, missing values arrive as `"n/a"`, error notices arrive as
//! successful responses, and time series live under section names that vary
//! per endpoint.
//!
//! This library provides tools for:
//! - Detecting service notices ("Information", "Note", "Error Message")
//!   before typed decoding
//! - Strict decoding with one schema-driven sanitizing retry that zeroes
//!   placeholder numerics and normalizes mis-encoded numbers
//! - Mapping ordinal-labelled metadata blocks onto one canonical record
//! - Extracting time-keyed sections into ascending timestamped points
//!
//! ```rust
//! use vantage_decoder::records::EtfProfile;
//!
//! let body = br#"{"net_assets":"1000","net_expense_ratio":"n/a","portfolio_turnover":"n/a"}"#;
//! let profile: EtfProfile = vantage_decoder::decode(body)?;
//!
//! assert_eq!(profile.net_assets, 1000);
//! assert_eq!(profile.net_expense_ratio, 0.0);
//! assert_eq!(profile.portfolio_turnover, "n/a");
//! # Ok::<(), vantage_decoder::DecodeError>(())
//! ```

pub mod config;
pub mod constants;
pub mod decoder;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod models;
pub mod placeholder;
pub mod records;
pub mod sanitizer;
pub mod schema;
pub mod string_number;
pub mod time_series;

mod json;

// Re-export commonly used types
pub use config::{DecoderConfig, SectionAmbiguity};
pub use decoder::{ResponseDecoder, decode, decode_series};
pub use envelope::detect_envelope_message;
pub use error::{DecodeError, Result};
pub use metadata::MetadataLabels;
pub use models::{EnvelopeKind, EnvelopeMessage, MetaData, TimeSeries, TimeSeriesPoint};
pub use placeholder::NumericLeaf;
pub use schema::{Described, Schema};
pub use time_series::{Granularity, SectionSelector, SeriesRequest};
