//! Ordering, malformed sections and section resolution

use super::object;
use crate::config::{DecoderConfig, SectionAmbiguity};
use crate::error::DecodeError;
use crate::time_series::{Granularity, SeriesRequest, extract_points, extract_series};
use serde_json::json;

#[test]
fn test_points_sorted_ascending() {
    let section = json!({
        "2025-12-12 16:00": {"SMA": "1"},
        "2025-12-12 15:45": {"SMA": "2"}
    });

    let points = extract_points("Technical Analysis: SMA", &section, Granularity::Intraday).unwrap();

    assert_eq!(points[0].timestamp.to_string(), "2025-12-12 15:45:00");
    assert_eq!(points[1].timestamp.to_string(), "2025-12-12 16:00:00");
}

#[test]
fn test_equal_timestamps_keep_source_order() {
    // Both keys parse to 2025-12-01
    let section = json!({
        "2025-12-01": {"v": 1},
        "2025-12-1": {"v": 2},
        "2025-11-30": {"v": 0}
    });

    let points = extract_points("Time Series (Daily)", &section, Granularity::Daily).unwrap();
    let values: Vec<f64> = points.iter().filter_map(|p| p.value("v")).collect();
    assert_eq!(values, vec![0.0, 1.0, 2.0]);
    assert_eq!(points[1].timestamp, points[2].timestamp);
}

#[test]
fn test_metric_columns_keep_source_order() {
    let section = json!({
        "2025-12-12": {"4. close": "2", "1. open": "1", "5. volume": "3"}
    });

    let points = extract_points("Time Series (Daily)", &section, Granularity::Daily).unwrap();
    let columns: Vec<&str> = points[0].values.keys().map(String::as_str).collect();
    assert_eq!(columns, vec!["4. close", "1. open", "5. volume"]);
}

#[test]
fn test_out_of_order_days_sorted_ascending() {
    let section = json!({
        "2025-12-10": {"v": 3},
        "2025-12-12": {"v": 1},
        "2025-12-11": {"v": 2}
    });

    let points = extract_points("Time Series (Daily)", &section, Granularity::Daily).unwrap();
    let values: Vec<f64> = points.iter().filter_map(|p| p.value("v")).collect();
    assert_eq!(values, vec![3.0, 2.0, 1.0]);
}

#[test]
fn test_placeholder_metrics_read_as_zero() {
    let section = json!({
        "2025-12-12": {"a": "N/A", "b": " na ", "c": null, "d": "", "e": "garbage", "f": true}
    });

    let points = extract_points("Time Series (Daily)", &section, Granularity::Daily).unwrap();
    for metric in ["a", "b", "c", "d", "e", "f"] {
        assert_eq!(points[0].value(metric), Some(0.0), "metric {metric}");
    }
}

#[test]
fn test_bad_timestamp_names_the_key() {
    let section = json!({"yesterday": {"SMA": "1"}});

    let err = extract_points("Technical Analysis: SMA", &section, Granularity::Intraday).unwrap_err();
    match err {
        DecodeError::Format { key, .. } => assert_eq!(key, "yesterday"),
        other => panic!("expected format error, got {other:?}"),
    }
}

#[test]
fn test_non_object_section_is_shape_error() {
    let err = extract_points("Time Series (Daily)", &json!([1, 2]), Granularity::Daily).unwrap_err();
    match err {
        DecodeError::Shape { path, reason } => {
            assert_eq!(path, "$.Time Series (Daily)");
            assert_eq!(reason, "expected object, got array");
        }
        other => panic!("expected shape error, got {other:?}"),
    }
}

#[test]
fn test_non_object_entry_is_shape_error() {
    let section = json!({"2025-12-12": "291.5"});

    let err = extract_points("Time Series (Daily)", &section, Granularity::Daily).unwrap_err();
    match err {
        DecodeError::Shape { path, .. } => assert_eq!(path, "$.Time Series (Daily).2025-12-12"),
        other => panic!("expected shape error, got {other:?}"),
    }
}

#[test]
fn test_nested_metric_is_shape_error() {
    let section = json!({"2025-12-12": {"close": {"value": "1"}}});

    let err = extract_points("Time Series (Daily)", &section, Granularity::Daily).unwrap_err();
    match err {
        DecodeError::Shape { path, reason } => {
            assert_eq!(path, "$.Time Series (Daily).2025-12-12.close");
            assert_eq!(reason, "expected scalar, got object");
        }
        other => panic!("expected shape error, got {other:?}"),
    }
}

#[test]
fn test_missing_section() {
    let root = object(json!({"Meta Data": {"1: Symbol": "IBM"}}));
    let request = SeriesRequest::indicator("EMA", Granularity::Intraday);

    let err = extract_series(&root, &request, &DecoderConfig::default()).unwrap_err();
    match err {
        DecodeError::MissingSection { selector } => {
            assert_eq!(selector, "key 'Technical Analysis: EMA'");
        }
        other => panic!("expected missing section error, got {other:?}"),
    }

    let relaxed = DecoderConfig::default().with_missing_section_allowed();
    let series = extract_series(&root, &request, &relaxed).unwrap();
    assert!(series.is_empty());
    assert_eq!(series.meta_data.symbol, "IBM");
    assert_eq!(series.section_label, "");
}

#[test]
fn test_ambiguous_sections_follow_config() {
    let root = object(json!({
        "Time Series (Daily)": {"2025-12-12": {"1. open": "1"}},
        "Time Series (Weekly)": {"2025-12-12": {"1. open": "2"}}
    }));
    let request = SeriesRequest::equity(Granularity::Daily);

    let err = extract_series(&root, &request, &DecoderConfig::default()).unwrap_err();
    assert!(matches!(err, DecodeError::AmbiguousSection { ref candidates, .. } if candidates.len() == 2));

    let config = DecoderConfig::default().with_section_ambiguity(SectionAmbiguity::FirstInDocumentOrder);
    let series = extract_series(&root, &request, &config).unwrap();
    assert_eq!(series.section_label, "Time Series (Daily)");
    assert_eq!(series.points[0].value("1. open"), Some(1.0));
}

#[test]
fn test_non_object_metadata_falls_back_to_default() {
    let root = object(json!({
        "Meta Data": "unavailable",
        "Technical Analysis: SMA": {"2025-12-12 16:00": {"SMA": "1.5"}}
    }));

    let series = extract_series(
        &root,
        &SeriesRequest::indicator("SMA", Granularity::Intraday),
        &DecoderConfig::default(),
    )
    .unwrap();

    assert_eq!(series.meta_data, Default::default());
    assert_eq!(series.points[0].value("SMA"), Some(1.5));
}
