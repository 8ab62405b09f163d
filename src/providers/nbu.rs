use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::{ExchangeRateProvider, RateQuery};

const EXCHANGE_ENDPOINT: &str = "/NBUStatService/v1/statdirectory/exchange";

/// Date format of the `date` query parameter.
const QUERY_DATE_FORMAT: &str = "%Y%m%d";

/// One entry of the NBU exchange directory.
#[derive(Debug, Deserialize)]
pub struct ExchangeRateRecord {
    #[serde(rename = "r030")]
    pub source_id: i32,
    #[serde(rename = "txt")]
    pub description: String,
    pub rate: Decimal,
    #[serde(rename = "cc")]
    pub currency_code: String,
    #[serde(rename = "exchangedate")]
    pub exchange_date: String,
}

// NbuProvider implementation for ExchangeRateProvider
pub struct NbuProvider {
    base_url: String,
    client: reqwest::Client,
}

impl NbuProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nbu-rate/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(NbuProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn request_url(&self, query: &RateQuery) -> String {
        format!(
            "{}{}?date={}&json&valcode={}",
            self.base_url,
            EXCHANGE_ENDPOINT,
            query.date.format(QUERY_DATE_FORMAT),
            query.currency.code()
        )
    }
}

#[async_trait]
impl ExchangeRateProvider for NbuProvider {
    #[instrument(
        name = "NbuRateFetch",
        skip(self),
        fields(currency = %query.currency, date = %query.date)
    )]
    async fn get_rate(&self, query: &RateQuery) -> Result<Decimal> {
        let url = self.request_url(query);
        debug!("Requesting exchange rate from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for currency {} on {}",
                response.status(),
                query.currency,
                query.date
            ));
        }

        let text = response.text().await?;
        debug!(response = %text, "Received NBU response");

        let records: Vec<ExchangeRateRecord> = serde_json::from_str(&text).map_err(|e| {
            anyhow!(
                "Failed to parse JSON response for {} on {}: {}",
                query.currency,
                query.date,
                e
            )
        })?;

        let record = records.into_iter().next().ok_or_else(|| {
            anyhow!(
                "No rate data found for {} on {}",
                query.currency,
                query.date
            )
        })?;

        debug!(
            source_id = record.source_id,
            description = %record.description,
            exchange_date = %record.exchange_date,
            "Found rate {} for {}",
            record.rate,
            record.currency_code
        );
        Ok(record.rate)
    }
}
