//! Tests for time-keyed section extraction
//!
//! Covers indicator and currency style responses end to end, plus the
//! ordering, shape and missing-section edge cases.

pub mod edge_cases;

use serde_json::{Map, Value};

/// Unwrap a `json!` literal into its top-level object
pub(crate) fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}
