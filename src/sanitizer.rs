//! Schema-driven repair of placeholder and mis-encoded numeric leaves.
//!
//! The sanitizer only runs after a strict decode has failed and the raw bytes
//! textually contain a quoted placeholder. It decodes the payload into a
//! generic value tree (number literals keep their exact text), walks the tree
//! alongside the target [`Schema`], rewrites offending leaves in place and
//! re-serializes the result for a second strict decode.
//!
//! Leaf rules:
//! - plain-text and pass-through leaves are never touched;
//! - a placeholder or `null` on a numeric field becomes zero in the field's
//!   encoding (`"0"` when string-encoded, `0` when native);
//! - quoted text on a native numeric field is spliced in as a number when it
//!   parses for the field's numeric kind, otherwise left alone;
//! - a native number on a string-encoded field is rewritten to its literal text.
//!
//! A node whose JSON shape disagrees with its schema is left unchanged; the
//! retry will fail on it and the caller reports the original error.

use crate::constants::QUOTED_PLACEHOLDER_PATTERN;
use crate::placeholder::is_placeholder;
use crate::schema::{Encoding, NumericKind, Schema};
use regex::bytes::Regex;
use serde_json::{Number, Value};
use std::sync::LazyLock;
use tracing::trace;

static QUOTED_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(QUOTED_PLACEHOLDER_PATTERN).expect("placeholder pattern is a valid regex")
});

/// Cheap textual pre-check: do the raw bytes contain a quoted placeholder token?
pub fn contains_placeholder_token(bytes: &[u8]) -> bool {
    QUOTED_PLACEHOLDER.is_match(bytes)
}

/// Walk `value` against `schema`, rewriting leaves in place.
///
/// Returns the number of rewritten leaves; zero means the tree already
/// satisfied every declared encoding.
pub fn sanitize(value: &mut Value, schema: &Schema) -> usize {
    let mut walker = Walker::default();
    walker.walk(value, schema, "$");
    walker.rewrites
}

/// Decode `bytes`, sanitize against `schema` and re-serialize.
///
/// Returns the repaired bytes together with the rewrite count.
pub fn sanitize_bytes(bytes: &[u8], schema: &Schema) -> serde_json::Result<(Vec<u8>, usize)> {
    let mut root: Value = serde_json::from_slice(bytes)?;
    let rewrites = sanitize(&mut root, schema);
    let repaired = serde_json::to_vec(&root)?;
    Ok((repaired, rewrites))
}

#[derive(Default)]
struct Walker {
    rewrites: usize,
}

impl Walker {
    fn walk(&mut self, value: &mut Value, schema: &Schema, path: &str) {
        match schema {
            Schema::Record(fields) => {
                let Value::Object(object) = value else {
                    return;
                };
                for field in fields {
                    if let Some(child) = object.get_mut(&field.key) {
                        let child_path = format!("{}.{}", path, field.key);
                        self.walk(child, &field.schema, &child_path);
                    }
                }
            }
            Schema::Sequence(element) => {
                let Value::Array(items) = value else {
                    return;
                };
                for (i, item) in items.iter_mut().enumerate() {
                    self.walk(item, element, &format!("{}[{}]", path, i));
                }
            }
            Schema::OpenMap(element) => {
                let Value::Object(object) = value else {
                    return;
                };
                for (key, item) in object.iter_mut() {
                    self.walk(item, element, &format!("{}.{}", path, key));
                }
            }
            Schema::Leaf(encoding) => {
                if let Some(replacement) = sanitize_leaf(value, *encoding) {
                    trace!("Rewrote {} from {} to {}", path, value, replacement);
                    *value = replacement;
                    self.rewrites += 1;
                }
            }
        }
    }
}

/// Replacement for a leaf, or `None` when it already satisfies its encoding
fn sanitize_leaf(value: &Value, encoding: Encoding) -> Option<Value> {
    match encoding {
        Encoding::Text | Encoding::Any => None,
        Encoding::Native(kind) => match value {
            Value::Null => Some(Value::from(0)),
            Value::String(text) => {
                let trimmed = text.trim();
                if is_placeholder(trimmed) {
                    Some(Value::from(0))
                } else {
                    parse_literal(trimmed, kind).map(Value::Number)
                }
            }
            _ => None,
        },
        Encoding::StringEncoded(_) => match value {
            Value::Null => Some(Value::from("0")),
            Value::String(text) => {
                let trimmed = text.trim();
                if is_placeholder(trimmed) {
                    Some(Value::from("0"))
                } else if trimmed.len() != text.len() {
                    Some(Value::from(trimmed))
                } else {
                    None
                }
            }
            Value::Number(n) => Some(Value::String(n.to_string())),
            _ => None,
        },
    }
}

/// Parse text as a number of the given kind.
///
/// Valid JSON literals keep their exact text; forms only Rust accepts
/// (".5", "1.", "+5") are spliced in as their parsed value.
fn parse_literal(text: &str, kind: NumericKind) -> Option<Number> {
    if !kind.accepts(text) {
        return None;
    }
    if let Ok(literal) = text.parse::<Number>() {
        return Some(literal);
    }
    match kind {
        NumericKind::Float => text.parse::<f64>().ok().and_then(Number::from_f64),
        NumericKind::Signed => text.parse::<i64>().ok().map(Number::from),
        NumericKind::Unsigned => text.parse::<u64>().ok().map(Number::from),
    }
}
