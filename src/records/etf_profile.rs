//! ETF profile and holdings

use super::DISPLAY_LIMIT;
use crate::schema::{Described, Field, NumericKind, Schema};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Fund summary with sector allocation and holdings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EtfProfile {
    #[serde(with = "crate::string_number")]
    pub net_assets: i64,
    #[serde(with = "crate::string_number")]
    pub net_expense_ratio: f64,
    /// Free text; the service sends "n/a" for funds without turnover data
    pub portfolio_turnover: String,
    #[serde(with = "crate::string_number")]
    pub dividend_yield: f64,
    pub inception_date: String,
    pub leveraged: String,
    pub sectors: Vec<EtfSector>,
    pub holdings: Vec<EtfHolding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EtfSector {
    pub sector: String,
    #[serde(with = "crate::string_number")]
    pub weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EtfHolding {
    pub symbol: String,
    pub description: String,
    #[serde(with = "crate::string_number")]
    pub weight: f64,
}

impl Described for EtfProfile {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::record([
                Field::new("net_assets", Schema::string_encoded(NumericKind::Signed)),
                Field::new("net_expense_ratio", Schema::string_encoded(NumericKind::Float)),
                Field::new("portfolio_turnover", Schema::text()),
                Field::new("dividend_yield", Schema::string_encoded(NumericKind::Float)),
                Field::new("inception_date", Schema::text()),
                Field::new("leveraged", Schema::text()),
                Field::new("sectors", Schema::sequence(EtfSector::schema().clone())),
                Field::new("holdings", Schema::sequence(EtfHolding::schema().clone())),
            ])
        })
    }
}

impl Described for EtfSector {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::record([
                Field::new("sector", Schema::text()),
                Field::new("weight", Schema::string_encoded(NumericKind::Float)),
            ])
        })
    }
}

impl Described for EtfHolding {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::record([
                Field::new("symbol", Schema::text()),
                Field::new("description", Schema::text()),
                Field::new("weight", Schema::string_encoded(NumericKind::Float)),
            ])
        })
    }
}

impl fmt::Display for EtfProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ETF Profile")?;
        writeln!(f, "Net Assets: {}", self.net_assets)?;
        writeln!(f, "Expense Ratio: {:.4}", self.net_expense_ratio)?;
        writeln!(f, "Dividend Yield: {:.4}", self.dividend_yield)?;
        writeln!(f, "Inception Date: {}", self.inception_date)?;
        writeln!(f, "Leveraged: {}", self.leveraged)?;

        if !self.sectors.is_empty() {
            writeln!(f, "\nSectors (weight):")?;
            for sector in &self.sectors {
                writeln!(f, " - {}: {:.3}", sector.sector, sector.weight)?;
            }
        }

        if !self.holdings.is_empty() {
            writeln!(f, "\nHoldings (weight):")?;
            for holding in self.holdings.iter().take(DISPLAY_LIMIT) {
                writeln!(
                    f,
                    " - {} ({}): {:.4}",
                    holding.symbol, holding.description, holding.weight
                )?;
            }
            if self.holdings.len() > DISPLAY_LIMIT {
                writeln!(f, " ...and {} more", self.holdings.len() - DISPLAY_LIMIT)?;
            }
        }

        Ok(())
    }
}
