//! Generic JSON decode boundary shared by the series extractor and the decoder.

use crate::error::{DecodeError, Result};
use serde_json::{Map, Value};

/// Decode raw bytes into a top-level object
pub(crate) fn parse_object(bytes: &[u8], target: &'static str) -> Result<Map<String, Value>> {
    let root: Value =
        serde_json::from_slice(bytes).map_err(|e| DecodeError::decode(target, e))?;
    match root {
        Value::Object(object) => Ok(object),
        other => Err(DecodeError::shape(
            "$",
            format!("expected object, got {}", kind_name(&other)),
        )),
    }
}

/// Human-readable JSON kind for diagnostics
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
