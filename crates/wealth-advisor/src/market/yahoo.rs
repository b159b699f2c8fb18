//! Yahoo Finance Market Data
//!
//! Historical OHLCV comes from the chart API via `yahoo_finance_api`;
//! the current price and market cap come from the quote endpoint, which
//! the chart response does not carry.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use time::OffsetDateTime;
use yahoo_finance_api as yahoo;

use super::MarketData;
use crate::error::MarketError;
use crate::model::{HistoryWindow, PriceBar, QuoteSnapshot};

const QUOTE_ENDPOINT: &str = "https://query1.finance.yahoo.com/v7/finance/quote";

/// Yahoo Finance client
pub struct YahooMarketData {
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteBody,
}

#[derive(Debug, Deserialize)]
struct QuoteBody {
    #[serde(default)]
    result: Vec<QuoteRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteRecord {
    regular_market_price: Option<f64>,
    market_cap: Option<f64>,
}

impl Default for YahooMarketData {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooMarketData {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    fn api_err(err: impl std::fmt::Display) -> MarketError {
        MarketError::Api(err.to_string())
    }

    async fn fetch_history(
        &self,
        symbol: &str,
        window: HistoryWindow,
    ) -> Result<Vec<PriceBar>, MarketError> {
        let connector = yahoo::YahooConnector::new().map_err(Self::api_err)?;

        let end = Utc::now();
        let start = end - Duration::days(window.days());
        let start_odt =
            OffsetDateTime::from_unix_timestamp(start.timestamp()).map_err(Self::api_err)?;
        let end_odt =
            OffsetDateTime::from_unix_timestamp(end.timestamp()).map_err(Self::api_err)?;

        let response = connector
            .get_quote_history(symbol, start_odt, end_odt)
            .await
            .map_err(Self::api_err)?;
        let quotes = response.quotes().map_err(Self::api_err)?;

        Ok(quotes
            .iter()
            .map(|q| PriceBar {
                date: DateTime::from_timestamp(q.timestamp as i64, 0).unwrap_or_else(Utc::now),
                high: Decimal::from_f64_retain(q.high).unwrap_or(Decimal::ZERO),
                low: Decimal::from_f64_retain(q.low).unwrap_or(Decimal::ZERO),
                volume: q.volume,
            })
            .collect())
    }

    async fn fetch_quote_record(&self, symbol: &str) -> Result<Option<QuoteRecord>, MarketError> {
        let envelope: QuoteEnvelope = self
            .http
            .get(QUOTE_ENDPOINT)
            .query(&[("symbols", symbol)])
            .send()
            .await
            .map_err(Self::api_err)?
            .error_for_status()
            .map_err(Self::api_err)?
            .json()
            .await
            .map_err(Self::api_err)?;

        Ok(envelope.quote_response.result.into_iter().next())
    }
}

#[async_trait]
impl MarketData for YahooMarketData {
    async fn fetch(
        &self,
        symbol: &str,
        window: HistoryWindow,
    ) -> Result<QuoteSnapshot, MarketError> {
        tracing::debug!(symbol, ?window, "fetching snapshot from Yahoo Finance");

        let history = self.fetch_history(symbol, window).await?;
        let record = self.fetch_quote_record(symbol).await?;

        let mut snapshot = QuoteSnapshot::new(symbol);
        snapshot.history = history;
        if let Some(record) = record {
            snapshot.current_price = record
                .regular_market_price
                .and_then(Decimal::from_f64_retain);
            snapshot.market_cap = record.market_cap.and_then(Decimal::from_f64_retain);
        }

        Ok(snapshot)
    }

    async fn health_check(&self) -> bool {
        yahoo::YahooConnector::new().is_ok()
    }

    fn name(&self) -> &str {
        "YahooFinance"
    }
}
