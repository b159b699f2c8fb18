//! Domain Models
//!
//! Core data types for the advisor. Uses `rust_decimal` for all monetary
//! values - never use f64 for money!

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lookback window for a historical quote request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryWindow {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl HistoryWindow {
    /// Window length in days
    pub fn days(self) -> i64 {
        match self {
            Self::OneMonth => 30,
            Self::ThreeMonths => 90,
            Self::SixMonths => 180,
            Self::OneYear => 365,
        }
    }

    /// Label used in prompt text (e.g., "6-Month")
    pub fn label(self) -> &'static str {
        match self {
            Self::OneMonth => "1-Month",
            Self::ThreeMonths => "3-Month",
            Self::SixMonths => "6-Month",
            Self::OneYear => "1-Year",
        }
    }
}

/// One bar of a historical price series
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading day
    pub date: DateTime<Utc>,

    /// Intraday high
    pub high: Decimal,

    /// Intraday low
    pub low: Decimal,

    /// Shares traded
    pub volume: u64,
}

/// Fetched market data for one symbol at call time
///
/// Built fresh from the provider response for each request and discarded
/// after prompt rendering; nothing here is persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    /// Provider-specific symbol (e.g., "RELIANCE.NS")
    pub symbol: String,

    /// Last traded price, if the provider reported one
    pub current_price: Option<Decimal>,

    /// Market capitalization, if the provider reported one
    pub market_cap: Option<Decimal>,

    /// Historical series, oldest bar first
    pub history: Vec<PriceBar>,
}

impl QuoteSnapshot {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            current_price: None,
            market_cap: None,
            history: Vec::new(),
        }
    }

    /// Highest high across the series
    pub fn period_high(&self) -> Option<Decimal> {
        self.history.iter().map(|b| b.high).max()
    }

    /// Lowest low across the series
    pub fn period_low(&self) -> Option<Decimal> {
        self.history.iter().map(|b| b.low).min()
    }

    /// Volume of the most recent bar
    pub fn latest_volume(&self) -> Option<u64> {
        self.history.last().map(|b| b.volume)
    }

    /// Whether there is enough data to analyze this symbol
    ///
    /// Requires a current price and at least one historical bar; anything
    /// less never reaches the model.
    pub fn has_sufficient_data(&self) -> bool {
        self.current_price.is_some() && !self.history.is_empty()
    }
}

/// Investor profile for strategy generation
///
/// Deserialization is strict: a profile with any field missing is
/// rejected before a prompt is ever rendered.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InvestorProfile {
    /// Age in years
    pub age: u32,

    /// Annual income in INR
    pub income: Decimal,

    /// Risk tolerance on a 0-10 scale
    pub risk_tolerance: u8,

    /// Free-text investment goals
    pub goals: String,

    /// Investment horizon in years
    pub time_horizon_years: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bar(high: Decimal, low: Decimal, volume: u64) -> PriceBar {
        PriceBar {
            date: Utc::now(),
            high,
            low,
            volume,
        }
    }

    #[test]
    fn test_snapshot_period_extremes() {
        let mut snapshot = QuoteSnapshot::new("RELIANCE.NS");
        snapshot.current_price = Some(dec!(2500));
        snapshot.history = vec![
            bar(dec!(2400), dec!(2100), 4_000_000),
            bar(dec!(2700), dec!(2350), 5_000_000),
            bar(dec!(2600), dec!(2450), 3_000_000),
        ];

        assert_eq!(snapshot.period_high(), Some(dec!(2700)));
        assert_eq!(snapshot.period_low(), Some(dec!(2100)));
        assert_eq!(snapshot.latest_volume(), Some(3_000_000));
        assert!(snapshot.has_sufficient_data());
    }

    #[test]
    fn test_snapshot_insufficient_without_price_or_history() {
        let mut snapshot = QuoteSnapshot::new("TCS.NS");
        assert!(!snapshot.has_sufficient_data());

        snapshot.current_price = Some(dec!(4000));
        assert!(!snapshot.has_sufficient_data());

        snapshot.history = vec![bar(dec!(4100), dec!(3900), 1_000_000)];
        assert!(snapshot.has_sufficient_data());

        snapshot.current_price = None;
        assert!(!snapshot.has_sufficient_data());
    }

    #[test]
    fn test_history_window_days() {
        assert_eq!(HistoryWindow::SixMonths.days(), 180);
        assert_eq!(HistoryWindow::OneYear.days(), 365);
    }

    #[test]
    fn test_profile_missing_age_is_rejected() {
        let result: std::result::Result<InvestorProfile, _> = serde_json::from_value(serde_json::json!({
            "income": "1800000",
            "risk_tolerance": 8,
            "goals": "Build long-term wealth for retirement",
            "time_horizon_years": 20
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_full_roundtrip() {
        let profile = InvestorProfile {
            age: 35,
            income: dec!(1_800_000),
            risk_tolerance: 8,
            goals: "Build long-term wealth for retirement".into(),
            time_horizon_years: 20,
        };
        let json = serde_json::to_string(&profile).expect("serializable");
        let back: InvestorProfile = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back.age, 35);
        assert_eq!(back.income, dec!(1_800_000));
    }
}
