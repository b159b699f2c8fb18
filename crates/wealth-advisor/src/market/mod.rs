//! Market Data Integration
//!
//! Abstractions and implementations for equity market data providers.

mod mock;
mod yahoo;

pub use mock::MockMarketData;
pub use yahoo::YahooMarketData;

use async_trait::async_trait;

use crate::error::MarketError;
use crate::model::{HistoryWindow, QuoteSnapshot};

/// Suffix appended to a bare ticker to form the National Stock Exchange
/// (India) symbol understood by the data provider
pub const NSE_SUFFIX: &str = ".NS";

/// Provider-specific symbol for a bare NSE ticker
pub fn nse_symbol(symbol: &str) -> String {
    format!("{}{}", symbol.trim().to_uppercase(), NSE_SUFFIX)
}

/// Market data client trait (Strategy pattern)
///
/// Implement this for each provider: Yahoo Finance, a broker API, etc.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Fetch current price, market cap, and a historical series for a
    /// provider-specific symbol
    async fn fetch(
        &self,
        symbol: &str,
        window: HistoryWindow,
    ) -> Result<QuoteSnapshot, MarketError>;

    /// Check if the provider is available
    async fn health_check(&self) -> bool;

    /// Provider name
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nse_symbol() {
        assert_eq!(nse_symbol("RELIANCE"), "RELIANCE.NS");
        assert_eq!(nse_symbol(" tcs "), "TCS.NS");
    }
}
