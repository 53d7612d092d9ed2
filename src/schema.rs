//! Target type descriptions for record decoding.
//!
//! A [`Schema`] mirrors the wire shape of a record type: which keys it reads,
//! how each leaf is encoded (native number, quoted number, plain text) and how
//! composite fields nest. The sanitizer walks payloads against these
//! descriptions, so every record type that wants lenient decoding publishes one
//! through [`Described`]. Descriptions are built once and shared read-only.

use std::fmt;

/// Numeric family of a leaf; decides how text is parsed and how zero is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Float,
    Signed,
    Unsigned,
}

impl NumericKind {
    /// Whether trimmed text is a valid literal of this kind
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            NumericKind::Float => text.parse::<f64>().is_ok_and(f64::is_finite),
            NumericKind::Signed => text.parse::<i64>().is_ok(),
            NumericKind::Unsigned => text.parse::<u64>().is_ok(),
        }
    }
}

/// Wire encoding of a leaf field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// JSON number
    Native(NumericKind),
    /// JSON string holding a number
    StringEncoded(NumericKind),
    /// JSON string kept verbatim
    Text,
    /// Any JSON value, passed through untouched
    Any,
}

impl Encoding {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Encoding::Native(_) | Encoding::StringEncoded(_))
    }
}

/// Wire-shape description of a record or one of its fields
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Record(Vec<Field>),
    Sequence(Box<Schema>),
    /// Mapping with keys unknown ahead of time and a fixed value schema
    OpenMap(Box<Schema>),
    Leaf(Encoding),
}

/// Declared field of a record schema
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Key as it appears on the wire
    pub key: String,
    pub schema: Schema,
}

impl Field {
    pub fn new(key: impl Into<String>, schema: Schema) -> Self {
        Self {
            key: key.into(),
            schema,
        }
    }
}

impl Schema {
    pub fn record(fields: impl IntoIterator<Item = Field>) -> Self {
        Schema::Record(fields.into_iter().collect())
    }

    pub fn sequence(element: Schema) -> Self {
        Schema::Sequence(Box::new(element))
    }

    pub fn open_map(value: Schema) -> Self {
        Schema::OpenMap(Box::new(value))
    }

    pub fn native(kind: NumericKind) -> Self {
        Schema::Leaf(Encoding::Native(kind))
    }

    pub fn string_encoded(kind: NumericKind) -> Self {
        Schema::Leaf(Encoding::StringEncoded(kind))
    }

    pub fn text() -> Self {
        Schema::Leaf(Encoding::Text)
    }

    pub fn any() -> Self {
        Schema::Leaf(Encoding::Any)
    }

    /// Look up a declared field of a record schema
    pub fn field(&self, key: &str) -> Option<&Field> {
        match self {
            Schema::Record(fields) => fields.iter().find(|f| f.key == key),
            _ => None,
        }
    }

    /// Count numeric leaves reachable from this node
    pub fn numeric_leaf_count(&self) -> usize {
        match self {
            Schema::Record(fields) => fields.iter().map(|f| f.schema.numeric_leaf_count()).sum(),
            Schema::Sequence(element) | Schema::OpenMap(element) => element.numeric_leaf_count(),
            Schema::Leaf(encoding) => usize::from(encoding.is_numeric()),
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Record(fields) => {
                f.write_str("{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", field.key, field.schema)?;
                }
                f.write_str("}")
            }
            Schema::Sequence(element) => write!(f, "[{}]", element),
            Schema::OpenMap(value) => write!(f, "map<{}>", value),
            Schema::Leaf(Encoding::Native(kind)) => write!(f, "{:?}", kind),
            Schema::Leaf(Encoding::StringEncoded(kind)) => write!(f, "string<{:?}>", kind),
            Schema::Leaf(Encoding::Text) => f.write_str("text"),
            Schema::Leaf(Encoding::Any) => f.write_str("any"),
        }
    }
}

/// Record types that publish a wire-shape description.
///
/// Implementations build the schema once, typically behind a `OnceLock`:
///
/// ```rust
/// use std::sync::OnceLock;
/// use vantage_decoder::schema::{Described, Field, NumericKind, Schema};
///
/// struct Split;
///
/// impl Described for Split {
///     fn schema() -> &'static Schema {
///         static SCHEMA: OnceLock<Schema> = OnceLock::new();
///         SCHEMA.get_or_init(|| {
///             Schema::record([
///                 Field::new("effective_date", Schema::text()),
///                 Field::new("split_factor", Schema::string_encoded(NumericKind::Float)),
///             ])
///         })
///     }
/// }
///
/// assert_eq!(Split::schema().numeric_leaf_count(), 1);
/// ```
pub trait Described {
    fn schema() -> &'static Schema;
}
