//! Time-keyed section extraction
//!
//! Time-indexed responses carry a "Meta Data" block next to a section whose
//! name varies per endpoint ("Time Series (Daily)", "Technical Analysis: SMA")
//! and whose keys are timestamps. This module locates that section, maps the
//! metadata through the endpoint's label table and returns the points in
//! ascending time order.

pub mod points;
pub mod section;
pub mod timestamp;

#[cfg(test)]
pub mod tests;

pub use self::points::extract_points;
pub use self::section::{SectionSelector, canonical_indicator_name, locate_section};
pub use self::timestamp::Granularity;

use crate::config::DecoderConfig;
use crate::constants::{FX_TIME_SERIES_PREFIX, META_DATA_KEY, TIME_SERIES_PREFIX};
use crate::error::{DecodeError, Result};
use crate::metadata::{MetadataLabels, map_metadata};
use crate::models::{MetaData, TimeSeries};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// What to pull out of a time-indexed response
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRequest {
    pub selector: SectionSelector,
    pub granularity: Granularity,
    pub labels: MetadataLabels,
}

impl SeriesRequest {
    pub fn new(selector: SectionSelector, granularity: Granularity, labels: MetadataLabels) -> Self {
        Self {
            selector,
            granularity,
            labels,
        }
    }

    /// Technical indicator response, e.g. `indicator("sma", Granularity::Intraday)`
    pub fn indicator(name: &str, granularity: Granularity) -> Self {
        Self::new(
            SectionSelector::indicator(name),
            granularity,
            MetadataLabels::INDICATOR,
        )
    }

    /// Digital currency daily/weekly/monthly series
    pub fn digital_currency(granularity: Granularity) -> Self {
        Self::new(
            SectionSelector::prefix(TIME_SERIES_PREFIX),
            granularity,
            MetadataLabels::DIGITAL_CURRENCY,
        )
    }

    /// Equity series; daily granularity uses the daily label table
    pub fn equity(granularity: Granularity) -> Self {
        let labels = match granularity {
            Granularity::Daily => MetadataLabels::EQUITY_DAILY,
            Granularity::Intraday | Granularity::IntradaySeconds => MetadataLabels::EQUITY_INTRADAY,
        };
        Self::new(SectionSelector::prefix(TIME_SERIES_PREFIX), granularity, labels)
    }

    pub fn fx(granularity: Granularity) -> Self {
        Self::new(
            SectionSelector::prefix(FX_TIME_SERIES_PREFIX),
            granularity,
            MetadataLabels::FX,
        )
    }
}

/// Build a [`TimeSeries`] from a decoded top-level object
pub fn extract_series(
    root: &Map<String, Value>,
    request: &SeriesRequest,
    config: &DecoderConfig,
) -> Result<TimeSeries> {
    let meta_data = match root.get(META_DATA_KEY) {
        Some(Value::Object(section)) => map_metadata(section, &request.labels),
        Some(other) => {
            warn!("'{}' is not an object ({}); using empty metadata", META_DATA_KEY, other);
            MetaData::default()
        }
        None => {
            debug!("Response has no '{}' block", META_DATA_KEY);
            MetaData::default()
        }
    };

    let Some((label, section)) =
        locate_section(root, &request.selector, config.section_ambiguity)?
    else {
        if config.allow_missing_section {
            debug!("No section for {}; returning empty series", request.selector);
            return Ok(TimeSeries {
                meta_data,
                ..Default::default()
            });
        }
        return Err(DecodeError::missing_section(request.selector.to_string()));
    };

    let points = extract_points(label, section, request.granularity)?;
    debug!("Extracted {} points from '{}'", points.len(), label);

    Ok(TimeSeries {
        meta_data,
        section_label: label.to_string(),
        points,
    })
}
