//! Timestamp key parsing for time-keyed sections

use crate::constants::{DATE_LAYOUT, DATE_MINUTE_LAYOUT, DATE_SECOND_LAYOUT};
use crate::error::{DecodeError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Response granularity; selects the layout of entry keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    /// Daily, weekly and monthly series keyed by date
    Daily,
    /// Intraday and indicator series keyed by date, hour and minute
    Intraday,
    /// Intraday series keyed down to the second
    IntradaySeconds,
}

impl Granularity {
    pub fn layout(&self) -> &'static str {
        match self {
            Granularity::Daily => DATE_LAYOUT,
            Granularity::Intraday => DATE_MINUTE_LAYOUT,
            Granularity::IntradaySeconds => DATE_SECOND_LAYOUT,
        }
    }

    /// Parse an entry key; date-only keys resolve to midnight
    pub fn parse(&self, key: &str) -> Result<NaiveDateTime> {
        let layout = self.layout();
        let parsed = match self {
            Granularity::Daily => {
                NaiveDate::parse_from_str(key, layout).map(|date| date.and_time(NaiveTime::MIN))
            }
            Granularity::Intraday | Granularity::IntradaySeconds => {
                NaiveDateTime::parse_from_str(key, layout)
            }
        };
        parsed.map_err(|e| DecodeError::format(key, layout, e))
    }
}
