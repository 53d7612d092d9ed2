//! End-to-end decoding of recorded service responses
//!
//! Fixtures under `tests/fixtures/` are trimmed copies of real payloads,
//! including the placeholder and notice quirks the decoder exists for.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;
use vantage_decoder::records::EtfProfile;
use vantage_decoder::{
    DecodeError, DecoderConfig, EnvelopeKind, Granularity, ResponseDecoder, SeriesRequest,
    decode, decode_series, detect_envelope_message,
};

fn fixture(name: &str) -> Result<Vec<u8>> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read(&path).with_context(|| format!("reading fixture {}", path.display()))
}

#[test]
fn test_indicator_fixture() -> Result<()> {
    let body = fixture("sma_intraday.json")?;
    let series = decode_series(&body, &SeriesRequest::indicator("sma", Granularity::Intraday))?;

    assert_eq!(series.section_label, "Technical Analysis: SMA");
    assert_eq!(series.meta_data.symbol, "IBM");
    assert_eq!(series.meta_data.time_period, 10.0);
    assert_eq!(series.len(), 4);

    let times: Vec<String> = series
        .points
        .iter()
        .map(|p| p.timestamp.format("%H:%M").to_string())
        .collect();
    assert_eq!(times, vec!["15:15", "15:30", "15:45", "16:00"]);

    assert_eq!(series.points[1].value("SMA"), Some(0.0));
    assert_eq!(series.points[3].value("SMA"), Some(291.512));
    Ok(())
}

#[test]
fn test_digital_currency_fixture() -> Result<()> {
    let body = fixture("digital_currency_daily.json")?;
    let series = decode_series(&body, &SeriesRequest::digital_currency(Granularity::Daily))?;

    assert_eq!(series.meta_data.symbol, "BTC");
    assert_eq!(series.meta_data.market_code, "EUR");
    assert_eq!(series.len(), 3);
    assert!(series.points.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

    let latest = series.points.last().context("series has points")?;
    assert_eq!(latest.value("5. volume"), Some(0.0));
    assert_eq!(latest.value("4. close"), Some(86900.0));

    let rendered = series.to_string();
    assert!(rendered.contains("Section: Time Series (Digital Currency Daily)"));
    Ok(())
}

#[test]
fn test_etf_profile_fixture() -> Result<()> {
    let body = fixture("etf_profile.json")?;
    let profile: EtfProfile = decode(&body)?;

    assert_eq!(profile.net_assets, 377_000_000_000);
    assert_eq!(profile.net_expense_ratio, 0.002);
    assert_eq!(profile.dividend_yield, 0.0);
    assert_eq!(profile.portfolio_turnover, "n/a");
    assert_eq!(profile.sectors[2].weight, 0.0);
    assert_eq!(profile.holdings.len(), 12);
    assert_eq!(profile.holdings[11].symbol, "n/a");
    assert_eq!(profile.holdings[11].weight, 0.0);

    let rendered = profile.to_string();
    assert!(rendered.contains(" - NVDA (NVIDIA CORP): 0.0915"));
    assert!(rendered.ends_with(" ...and 2 more\n"));
    Ok(())
}

#[test]
fn test_strict_decoder_rejects_placeholders() -> Result<()> {
    let body = fixture("etf_profile.json")?;
    let strict = ResponseDecoder::new(DecoderConfig::strict());

    match strict.decode::<EtfProfile>(&body) {
        Err(DecodeError::Decode { .. }) => Ok(()),
        other => bail!("expected strict decode failure, got {:?}", other),
    }
}

#[test]
fn test_premium_notice_fixture() -> Result<()> {
    let body = fixture("premium_notice.json")?;

    let notice = detect_envelope_message(&body).context("notice detected")?;
    assert_eq!(notice.kind, EnvelopeKind::Information);
    assert!(notice.message.contains("premium endpoint"));

    let err = decode::<EtfProfile>(&body).unwrap_err();
    assert_eq!(err.envelope_kind(), Some(EnvelopeKind::Information));

    let err = decode_series(&body, &SeriesRequest::equity(Granularity::Daily)).unwrap_err();
    assert!(err.to_string().contains("premium endpoint"));
    Ok(())
}

#[test]
fn test_notice_priority_fixture() -> Result<()> {
    let body = fixture("rate_limit_note.json")?;

    let notice = detect_envelope_message(&body).context("notice detected")?;
    assert_eq!(notice.kind, EnvelopeKind::Information);
    assert!(notice.message.starts_with("Please consider"));
    Ok(())
}

#[test]
fn test_regular_payload_has_no_notice() {
    assert!(detect_envelope_message(br#"{"foo":"bar"}"#).is_none());
    assert!(detect_envelope_message(b"not json").is_none());
}
