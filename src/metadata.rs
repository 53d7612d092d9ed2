//! Metadata block mapping for time-indexed responses.
//!
//! The service labels metadata entries with ordinal prefixes ("1: Symbol",
//! "2. Digital Currency Code", ...) and both the numbering and the separator
//! differ per endpoint. Each endpoint family gets a fixed [`MetadataLabels`]
//! table; labels are matched by exact equality, in any order, and anything
//! not in the table is ignored.

use crate::models::MetaData;
use crate::placeholder::NumericLeaf;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Canonical metadata field a wire label maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaField {
    Information,
    Symbol,
    LastRefreshed,
    Interval,
    OutputSize,
    TimePeriod,
    SeriesType,
    TimeZone,
    MarketCode,
    MarketName,
    CurrencyName,
    ToSymbol,
}

/// Per-endpoint table of wire labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataLabels {
    pub name: &'static str,
    pub entries: &'static [(&'static str, MetaField)],
}

impl MetadataLabels {
    /// Canonical field for an exact wire label
    pub fn lookup(&self, label: &str) -> Option<MetaField> {
        self.entries
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, field)| *field)
    }

    /// Technical indicator responses
    pub const INDICATOR: MetadataLabels = MetadataLabels {
        name: "indicator",
        entries: &[
            ("1: Symbol", MetaField::Symbol),
            ("2: Indicator", MetaField::Information),
            ("3: Last Refreshed", MetaField::LastRefreshed),
            ("4: Interval", MetaField::Interval),
            ("5: Time Period", MetaField::TimePeriod),
            ("6: Series Type", MetaField::SeriesType),
            ("7: Time Zone", MetaField::TimeZone),
        ],
    };

    /// Digital currency daily/weekly/monthly series
    pub const DIGITAL_CURRENCY: MetadataLabels = MetadataLabels {
        name: "digital currency",
        entries: &[
            ("1. Information", MetaField::Information),
            ("2. Digital Currency Code", MetaField::Symbol),
            ("3. Digital Currency Name", MetaField::CurrencyName),
            ("4. Market Code", MetaField::MarketCode),
            ("5. Market Name", MetaField::MarketName),
            ("6. Last Refreshed", MetaField::LastRefreshed),
            ("7. Time Zone", MetaField::TimeZone),
        ],
    };

    /// Equity daily/weekly/monthly series
    pub const EQUITY_DAILY: MetadataLabels = MetadataLabels {
        name: "equity daily",
        entries: &[
            ("1. Information", MetaField::Information),
            ("2. Symbol", MetaField::Symbol),
            ("3. Last Refreshed", MetaField::LastRefreshed),
            ("4. Output Size", MetaField::OutputSize),
            ("4. Time Zone", MetaField::TimeZone),
            ("5. Time Zone", MetaField::TimeZone),
        ],
    };

    /// Equity intraday series
    pub const EQUITY_INTRADAY: MetadataLabels = MetadataLabels {
        name: "equity intraday",
        entries: &[
            ("1. Information", MetaField::Information),
            ("2. Symbol", MetaField::Symbol),
            ("3. Last Refreshed", MetaField::LastRefreshed),
            ("4. Interval", MetaField::Interval),
            ("5. Output Size", MetaField::OutputSize),
            ("6. Time Zone", MetaField::TimeZone),
        ],
    };

    /// FX daily/weekly/monthly series
    pub const FX: MetadataLabels = MetadataLabels {
        name: "fx",
        entries: &[
            ("1. Information", MetaField::Information),
            ("2. From Symbol", MetaField::Symbol),
            ("3. To Symbol", MetaField::ToSymbol),
            ("4. Output Size", MetaField::OutputSize),
            ("4. Last Refreshed", MetaField::LastRefreshed),
            ("5. Last Refreshed", MetaField::LastRefreshed),
            ("5. Time Zone", MetaField::TimeZone),
            ("6. Time Zone", MetaField::TimeZone),
        ],
    };
}

/// Map a metadata section onto the canonical record.
///
/// Never fails: metadata is informational, so values of an unexpected JSON
/// kind are skipped and numeric labels degrade to zero.
pub fn map_metadata(section: &Map<String, Value>, labels: &MetadataLabels) -> MetaData {
    let mut builder = MetaDataBuilder::default();
    for (label, value) in section {
        match labels.lookup(label) {
            Some(field) => builder.set(field, value),
            None => trace!("Ignoring unrecognized {} metadata label '{}'", labels.name, label),
        }
    }
    builder.build()
}

#[derive(Default)]
struct MetaDataBuilder {
    meta: MetaData,
}

impl MetaDataBuilder {
    fn set(&mut self, field: MetaField, value: &Value) {
        if field == MetaField::TimePeriod {
            self.meta.time_period = NumericLeaf::classify(value).or_zero();
            return;
        }

        let Some(text) = text_of(value) else {
            debug!("Skipping non-text metadata value for {:?}: {}", field, value);
            return;
        };

        let slot = match field {
            MetaField::Information => &mut self.meta.information,
            MetaField::Symbol => &mut self.meta.symbol,
            MetaField::LastRefreshed => &mut self.meta.last_refreshed,
            MetaField::Interval => &mut self.meta.interval,
            MetaField::OutputSize => &mut self.meta.output_size,
            MetaField::SeriesType => &mut self.meta.series_type,
            MetaField::TimeZone => &mut self.meta.time_zone,
            MetaField::MarketCode => &mut self.meta.market_code,
            MetaField::MarketName => &mut self.meta.market_name,
            MetaField::CurrencyName => &mut self.meta.currency_name,
            MetaField::ToSymbol => &mut self.meta.to_symbol,
            MetaField::TimePeriod => return,
        };
        *slot = text;
    }

    fn build(self) -> MetaData {
        self.meta
    }
}

/// Text of a string leaf, or the literal of a native number
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
