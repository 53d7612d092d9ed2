//! Serde adapter for numbers carried as JSON strings.
//!
//! Use with `#[serde(with = "crate::string_number")]`. Deserialization is
//! strict: the string must parse as-is, so padded or placeholder text fails
//! and leaves the repair to the sanitizer. `null` reads as zero.

use serde::de::{self, Deserialize, Deserializer};
use serde::Serializer;
use std::fmt::Display;
use std::str::FromStr;

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(text) => text
            .parse::<T>()
            .map_err(|e| de::Error::custom(format!("invalid quoted number '{}': {}", text, e))),
        None => Ok(T::default()),
    }
}

pub fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Display,
{
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
    #[serde(default)]
    struct Holder {
        #[serde(with = "super")]
        weight: f64,
        #[serde(with = "super")]
        count: i64,
    }

    #[test]
    fn test_parses_quoted_numbers() {
        let holder: Holder = serde_json::from_str(r#"{"weight":"0.0928","count":"-3"}"#).unwrap();
        assert_eq!(holder, Holder { weight: 0.0928, count: -3 });
    }

    #[test]
    fn test_null_reads_as_zero() {
        let holder: Holder = serde_json::from_str(r#"{"weight":null,"count":null}"#).unwrap();
        assert_eq!(holder, Holder::default());
    }

    #[test]
    fn test_rejects_placeholder_and_padding() {
        assert!(serde_json::from_str::<Holder>(r#"{"weight":"n/a"}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"weight":" 1.5"}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"weight":1.5}"#).is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Holder { weight: 0.5, count: 7 }).unwrap();
        assert_eq!(json, r#"{"weight":"0.5","count":"7"}"#);
    }
}
