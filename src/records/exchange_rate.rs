//! Realtime currency exchange rate (physical and digital currencies)

use crate::schema::{Described, Field, NumericKind, Schema};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyExchangeRate {
    #[serde(rename = "Realtime Currency Exchange Rate")]
    pub rate: ExchangeRate,
}

/// Quote between two currencies, keyed by the service's ordinal labels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeRate {
    #[serde(rename = "1. From_Currency Code")]
    pub from_currency_code: String,
    #[serde(rename = "2. From_Currency Name")]
    pub from_currency_name: String,
    #[serde(rename = "3. To_Currency Code")]
    pub to_currency_code: String,
    #[serde(rename = "4. To_Currency Name")]
    pub to_currency_name: String,
    #[serde(rename = "5. Exchange Rate", with = "crate::string_number")]
    pub exchange_rate: f64,
    #[serde(rename = "6. Last Refreshed")]
    pub last_refreshed: String,
    #[serde(rename = "7. Time Zone")]
    pub time_zone: String,
    #[serde(rename = "8. Bid Price", with = "crate::string_number")]
    pub bid_price: f64,
    #[serde(rename = "9. Ask Price", with = "crate::string_number")]
    pub ask_price: f64,
}

impl Described for CurrencyExchangeRate {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            let quoted = || Schema::string_encoded(NumericKind::Float);
            Schema::record([Field::new(
                "Realtime Currency Exchange Rate",
                Schema::record([
                    Field::new("1. From_Currency Code", Schema::text()),
                    Field::new("2. From_Currency Name", Schema::text()),
                    Field::new("3. To_Currency Code", Schema::text()),
                    Field::new("4. To_Currency Name", Schema::text()),
                    Field::new("5. Exchange Rate", quoted()),
                    Field::new("6. Last Refreshed", Schema::text()),
                    Field::new("7. Time Zone", Schema::text()),
                    Field::new("8. Bid Price", quoted()),
                    Field::new("9. Ask Price", quoted()),
                ]),
            )])
        })
    }
}

impl fmt::Display for CurrencyExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rate = &self.rate;
        writeln!(
            f,
            "{} ({}) -> {} ({}): {}",
            rate.from_currency_code,
            rate.from_currency_name,
            rate.to_currency_code,
            rate.to_currency_name,
            rate.exchange_rate
        )?;
        writeln!(f, "Bid: {} | Ask: {}", rate.bid_price, rate.ask_price)?;
        writeln!(f, "Last Refreshed: {} {}", rate.last_refreshed, rate.time_zone)
    }
}
