//! Dividend and split histories

use super::DISPLAY_LIMIT;
use crate::schema::{Described, Field, NumericKind, Schema};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dividends {
    pub symbol: String,
    pub data: Vec<Dividend>,
}

/// One dividend event; dates are kept as sent ("None" when not announced)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dividend {
    pub ex_dividend_date: String,
    pub declaration_date: String,
    pub record_date: String,
    pub payment_date: String,
    #[serde(with = "crate::string_number")]
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Splits {
    pub symbol: String,
    pub data: Vec<Split>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Split {
    pub effective_date: String,
    #[serde(with = "crate::string_number")]
    pub split_factor: f64,
}

impl Described for Dividends {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::record([
                Field::new("symbol", Schema::text()),
                Field::new(
                    "data",
                    Schema::sequence(Schema::record([
                        Field::new("ex_dividend_date", Schema::text()),
                        Field::new("declaration_date", Schema::text()),
                        Field::new("record_date", Schema::text()),
                        Field::new("payment_date", Schema::text()),
                        Field::new("amount", Schema::string_encoded(NumericKind::Float)),
                    ])),
                ),
            ])
        })
    }
}

impl Described for Splits {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::record([
                Field::new("symbol", Schema::text()),
                Field::new(
                    "data",
                    Schema::sequence(Schema::record([
                        Field::new("effective_date", Schema::text()),
                        Field::new("split_factor", Schema::string_encoded(NumericKind::Float)),
                    ])),
                ),
            ])
        })
    }
}

impl fmt::Display for Dividends {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dividends for {}", self.symbol)?;
        for dividend in self.data.iter().take(DISPLAY_LIMIT) {
            writeln!(
                f,
                "{}: {:.2} (pay {})",
                dividend.ex_dividend_date, dividend.amount, dividend.payment_date
            )?;
        }
        if self.data.len() > DISPLAY_LIMIT {
            writeln!(f, "...and {} more", self.data.len() - DISPLAY_LIMIT)?;
        }
        Ok(())
    }
}

impl fmt::Display for Splits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Splits for {}", self.symbol)?;
        for split in self.data.iter().take(DISPLAY_LIMIT) {
            writeln!(f, "{}: {:.4}", split.effective_date, split.split_factor)?;
        }
        if self.data.len() > DISPLAY_LIMIT {
            writeln!(f, "...and {} more", self.data.len() - DISPLAY_LIMIT)?;
        }
        Ok(())
    }
}
