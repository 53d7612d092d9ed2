//! Canonical records produced by the decoding layer.
//!
//! Defines envelope notices, the metadata block shared by time-indexed
//! responses, individual time-series points and the assembled series.

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of service notice embedded in an otherwise well-formed payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvelopeKind {
    Information,
    Note,
    ErrorMessage,
}

impl fmt::Display for EnvelopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvelopeKind::Information => f.write_str("information"),
            EnvelopeKind::Note => f.write_str("note"),
            EnvelopeKind::ErrorMessage => f.write_str("error message"),
        }
    }
}

/// Service notice detected at the top level of a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeMessage {
    pub kind: EnvelopeKind,
    pub message: String,
}

/// Metadata block of a time-indexed response.
///
/// Fields not carried by a given endpoint stay empty (or zero for `time_period`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaData {
    pub symbol: String,
    /// Descriptive label ("Information" or indicator name)
    pub information: String,
    pub last_refreshed: String,
    pub interval: String,
    pub output_size: String,
    pub time_period: f64,
    pub series_type: String,
    pub time_zone: String,
    pub market_code: String,
    pub market_name: String,
    pub currency_name: String,
    /// Quote side of a currency pair
    pub to_symbol: String,
}

/// One timestamped observation with its metric columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: NaiveDateTime,
    /// Metric columns in source order
    pub values: IndexMap<String, f64>,
}

impl TimeSeriesPoint {
    /// Value of a metric column, if present
    pub fn value(&self, metric: &str) -> Option<f64> {
        self.values.get(metric).copied()
    }
}

/// Decoded time-indexed response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub meta_data: MetaData,
    /// Section key exactly as it appeared in the payload
    pub section_label: String,
    /// Points in ascending timestamp order
    pub points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    /// Metric column names in first-seen order across all points
    pub fn metric_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for point in &self.points {
            for name in point.values.keys() {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meta = &self.meta_data;
        writeln!(f, "{}", meta.information)?;
        writeln!(f, "Symbol: {}", meta.symbol)?;
        writeln!(f, "Last Refreshed: {}", meta.last_refreshed)?;
        writeln!(f, "Interval: {}", meta.interval)?;
        writeln!(f, "Output Size: {}", meta.output_size)?;
        writeln!(f, "Time Zone: {}", meta.time_zone)?;
        writeln!(f, "Section: {}", self.section_label)?;
        writeln!(f)?;

        let metrics = self.metric_names();
        write!(f, "{:<24}", "Time")?;
        for metric in &metrics {
            write!(f, "{:<15}", metric)?;
        }
        writeln!(f)?;
        writeln!(f, "{}{}", "=".repeat(24), "=".repeat(15 * metrics.len()))?;

        for point in &self.points {
            write!(f, "{:<24}", point.timestamp.format("%Y-%m-%d %H:%M:%S"))?;
            for metric in &metrics {
                write!(f, "{:>15.2}", point.value(metric).unwrap_or(0.0))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
