//! Conversion of section entries into ordered points

use super::timestamp::Granularity;
use crate::error::{DecodeError, Result};
use crate::json::kind_name;
use crate::models::TimeSeriesPoint;
use crate::placeholder::NumericLeaf;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

/// Extract every entry of the section at `label` as a point.
///
/// Metric labels are kept verbatim and in source order. Metric values go
/// through the placeholder classifier, so placeholders and unparseable text
/// read as zero. The result is sorted ascending by timestamp.
pub fn extract_points(
    label: &str,
    section: &Value,
    granularity: Granularity,
) -> Result<Vec<TimeSeriesPoint>> {
    let entries = section.as_object().ok_or_else(|| {
        DecodeError::shape(
            format!("$.{}", label),
            format!("expected object, got {}", kind_name(section)),
        )
    })?;

    let mut points = Vec::with_capacity(entries.len());
    for (key, entry) in entries {
        let timestamp = granularity.parse(key)?;
        let metrics = entry.as_object().ok_or_else(|| {
            DecodeError::shape(
                format!("$.{}.{}", label, key),
                format!("expected object, got {}", kind_name(entry)),
            )
        })?;

        let mut values = IndexMap::with_capacity(metrics.len());
        for (metric, raw) in metrics {
            if raw.is_object() || raw.is_array() {
                return Err(DecodeError::shape(
                    format!("$.{}.{}.{}", label, key, metric),
                    format!("expected scalar, got {}", kind_name(raw)),
                ));
            }

            let leaf = NumericLeaf::classify(raw);
            if !leaf.is_known() {
                trace!("Zeroing {} at {} ({:?})", metric, key, leaf);
            }
            values.insert(metric.clone(), leaf.or_zero());
        }

        points.push(TimeSeriesPoint { timestamp, values });
    }

    points.sort_by_key(|point| point.timestamp);
    Ok(points)
}
