//! Exchange rate abstractions

use super::currency::CurrencyCode;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single lookup: one currency on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateQuery {
    pub currency: CurrencyCode,
    pub date: NaiveDate,
}

/// Source of official hryvnia exchange rates.
///
/// Any failure (transport, status, payload, or no record for the query)
/// comes back as an error; callers do not distinguish between them.
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    async fn get_rate(&self, query: &RateQuery) -> Result<Decimal>;
}
