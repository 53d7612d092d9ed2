//! Typed response records
//!
//! Each record publishes its [`Schema`](crate::schema::Schema) through
//! [`Described`](crate::schema::Described), so the decoder can repair
//! placeholder leaves before retrying a failed decode. Records default every
//! missing field.

pub mod analytics;
pub mod corporate_actions;
pub mod etf_profile;
pub mod exchange_rate;

pub use self::analytics::{AnalyticsMetaData, AnalyticsWindowResponse};
pub use self::corporate_actions::{Dividend, Dividends, Split, Splits};
pub use self::etf_profile::{EtfHolding, EtfProfile, EtfSector};
pub use self::exchange_rate::{CurrencyExchangeRate, ExchangeRate};

/// Rows shown by the list renderings before collapsing into "...and N more"
pub(crate) const DISPLAY_LIMIT: usize = 10;
