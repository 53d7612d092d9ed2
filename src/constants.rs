//! Wire-level constants for the decoding layer
//!
//! Sentinel values, envelope keys, section labels and timestamp layouts used
//! by the upstream service. Everything that names a key on the wire lives here.

use crate::models::EnvelopeKind;

// =============================================================================
// Placeholder Values
// =============================================================================

/// Lower-cased sentinel strings the service emits in place of a number
pub const PLACEHOLDER_TOKENS: &[&str] = &["n/a", "na"];

/// Case-insensitive pattern for a quoted placeholder token in raw bytes.
/// Padding inside the quotes may be raw whitespace or an escaped `\t`, `\n`,
/// `\r` or `\f`, matching trimmed classification after decoding.
pub const QUOTED_PLACEHOLDER_PATTERN: &str = r#"(?i)"(?:\s|\\[tnrf])*n/?a(?:\s|\\[tnrf])*""#;

// =============================================================================
// Envelope Notices
// =============================================================================

/// Top-level notice keys in priority order; only the first hit is reported
pub const ENVELOPE_KEYS: &[(&str, EnvelopeKind)] = &[
    ("Information", EnvelopeKind::Information),
    ("Note", EnvelopeKind::Note),
    ("Error Message", EnvelopeKind::ErrorMessage),
];

// =============================================================================
// Section Labels
// =============================================================================

/// Top-level key of the metadata block in time-indexed responses
pub const META_DATA_KEY: &str = "Meta Data";

/// Prefix shared by equity and digital-currency time-series sections
pub const TIME_SERIES_PREFIX: &str = "Time Series";

/// Prefix of FX time-series sections
pub const FX_TIME_SERIES_PREFIX: &str = "Time Series FX";

/// Indicator sections are labelled with this prefix followed by the indicator name
pub const TECHNICAL_ANALYSIS_PREFIX: &str = "Technical Analysis: ";

// =============================================================================
// Timestamp Layouts
// =============================================================================

/// Daily, weekly and monthly series
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Intraday and indicator series
pub const DATE_MINUTE_LAYOUT: &str = "%Y-%m-%d %H:%M";

/// Equity intraday series carrying seconds
pub const DATE_SECOND_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";
