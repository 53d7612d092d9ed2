//! Fixed and sliding window analytics.
//!
//! The payload is grouped by calculation family ("RETURNS_CALCULATIONS",
//! ...), each group mapping calculation names to arbitrarily nested results.
//! Both levels are open mappings and every value is kept verbatim, number
//! literals included.

use crate::schema::{Described, Field, NumericKind, Schema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsMetaData {
    pub symbols: String,
    /// Zero for fixed window requests
    pub window_size: i64,
    pub min_dt: String,
    pub max_dt: String,
    pub ohlc: String,
    pub interval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsWindowResponse {
    pub meta_data: AnalyticsMetaData,
    pub payload: BTreeMap<String, Map<String, Value>>,
}

impl AnalyticsWindowResponse {
    pub fn is_sliding(&self) -> bool {
        self.meta_data.window_size > 0
    }

    /// Result of one calculation, e.g. `calculation("RETURNS_CALCULATIONS", "MEAN")`
    pub fn calculation(&self, group: &str, name: &str) -> Option<&Value> {
        self.payload.get(group)?.get(name)
    }
}

impl Described for AnalyticsWindowResponse {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::record([
                Field::new(
                    "meta_data",
                    Schema::record([
                        Field::new("symbols", Schema::text()),
                        Field::new("window_size", Schema::native(NumericKind::Signed)),
                        Field::new("min_dt", Schema::text()),
                        Field::new("max_dt", Schema::text()),
                        Field::new("ohlc", Schema::text()),
                        Field::new("interval", Schema::text()),
                    ]),
                ),
                Field::new("payload", Schema::open_map(Schema::open_map(Schema::any()))),
            ])
        })
    }
}

impl fmt::Display for AnalyticsWindowResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meta = &self.meta_data;
        if self.is_sliding() {
            writeln!(f, "Analytics Sliding Window")?;
            writeln!(
                f,
                "Symbols: {} | Interval: {} | Window: {}",
                meta.symbols, meta.interval, meta.window_size
            )?;
        } else {
            writeln!(f, "Analytics Fixed Window")?;
            writeln!(f, "Symbols: {} | Interval: {}", meta.symbols, meta.interval)?;
        }
        writeln!(f, "Range: {} -> {} | OHLC: {}", meta.min_dt, meta.max_dt, meta.ohlc)?;

        // BTreeMap iterates groups in sorted order
        let Some((first_group, calculations)) = self.payload.iter().next() else {
            return Ok(());
        };
        let groups: Vec<&str> = self.payload.keys().map(String::as_str).collect();
        writeln!(f, "Groups: {}", groups.join(", "))?;

        let mut names: Vec<&str> = calculations.keys().map(String::as_str).collect();
        if !names.is_empty() {
            names.sort_unstable();
            writeln!(f, "Calculations in {}: {}", first_group, names.join(", "))?;
        }
        Ok(())
    }
}
