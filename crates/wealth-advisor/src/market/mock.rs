//! Mock Market Data Client
//!
//! For testing and offline demos. Returns deterministic static quotes
//! for a handful of NSE large caps.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::MarketData;
use crate::error::MarketError;
use crate::model::{HistoryWindow, PriceBar, QuoteSnapshot};

/// Mock market data client with static quotes
#[derive(Default)]
pub struct MockMarketData;

impl MockMarketData {
    pub fn new() -> Self {
        Self
    }

    /// (current price, market cap, period high, period low, latest volume)
    fn base_quote(symbol: &str) -> Option<(Decimal, Decimal, Decimal, Decimal, u64)> {
        match symbol.to_uppercase().as_str() {
            "RELIANCE.NS" => Some((
                dec!(2856.40),
                dec!(19_320_000_000_000),
                dec!(3024.90),
                dec!(2221.05),
                7_450_000,
            )),
            "TCS.NS" => Some((
                dec!(4012.75),
                dec!(14_520_000_000_000),
                dec!(4254.45),
                dec!(3311.00),
                2_310_000,
            )),
            "INFY.NS" => Some((
                dec!(1867.35),
                dec!(7_760_000_000_000),
                dec!(1953.90),
                dec!(1358.35),
                5_870_000,
            )),
            "HDFCBANK.NS" => Some((
                dec!(1728.20),
                dec!(13_180_000_000_000),
                dec!(1794.00),
                dec!(1430.15),
                11_240_000,
            )),
            "SBIN.NS" => Some((
                dec!(812.50),
                dec!(7_250_000_000_000),
                dec!(912.10),
                dec!(680.00),
                14_660_000,
            )),
            "TATAMOTORS.NS" => Some((
                dec!(788.45),
                dec!(2_900_000_000_000),
                dec!(1179.00),
                dec!(718.10),
                9_980_000,
            )),
            _ => None,
        }
    }

    /// Synthesize a bar series spanning the window, oldest first, whose
    /// extremes match the quoted period high and low exactly
    fn build_history(
        window: HistoryWindow,
        high: Decimal,
        low: Decimal,
        latest_volume: u64,
    ) -> Vec<PriceBar> {
        const BARS: i64 = 6;

        let now = Utc::now();
        let step_days = window.days() / BARS;
        let span = high - low;

        (0..BARS)
            .map(|i| {
                let t = Decimal::from(i) / Decimal::from(BARS - 1);
                let bar_high = low + span * t;
                let bar_low = (bar_high - span / Decimal::from(BARS)).max(low);
                PriceBar {
                    date: now - Duration::days(step_days * (BARS - 1 - i)),
                    high: bar_high,
                    low: bar_low,
                    volume: latest_volume,
                }
            })
            .collect()
    }
}

#[async_trait]
impl MarketData for MockMarketData {
    async fn fetch(
        &self,
        symbol: &str,
        window: HistoryWindow,
    ) -> Result<QuoteSnapshot, MarketError> {
        let (price, market_cap, high, low, volume) = Self::base_quote(symbol)
            .ok_or_else(|| MarketError::UnsupportedSymbol(symbol.to_string()))?;

        let mut snapshot = QuoteSnapshot::new(symbol);
        snapshot.current_price = Some(price);
        snapshot.market_cap = Some(market_cap);
        snapshot.history = Self::build_history(window, high, low, volume);

        Ok(snapshot)
    }

    async fn health_check(&self) -> bool {
        true // Mock always healthy
    }

    fn name(&self) -> &str {
        "MockMarket"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_symbol() {
        let market = MockMarketData::new();

        let snapshot = market
            .fetch("RELIANCE.NS", HistoryWindow::SixMonths)
            .await
            .unwrap();
        assert!(snapshot.has_sufficient_data());
        assert_eq!(snapshot.current_price, Some(dec!(2856.40)));
        assert_eq!(snapshot.period_high(), Some(dec!(3024.90)));
        assert_eq!(snapshot.period_low(), Some(dec!(2221.05)));
        assert_eq!(snapshot.latest_volume(), Some(7_450_000));
    }

    #[tokio::test]
    async fn test_unknown_symbol() {
        let market = MockMarketData::new();

        let result = market.fetch("NOTREAL.NS", HistoryWindow::SixMonths).await;
        assert!(matches!(result, Err(MarketError::UnsupportedSymbol(_))));
    }
}
