//! Prompt Templates
//!
//! The fixed natural-language templates sent to the model. Rendering is
//! pure: identical inputs produce byte-identical prompts. The snapshot
//! templates return `None` when the data cannot support analysis, so a
//! prompt for a symbol without a price or history never exists at all.

use crate::model::{HistoryWindow, InvestorProfile, QuoteSnapshot};

/// Market-context block embedded in the insight prompt
pub fn market_context(
    symbol: &str,
    snapshot: &QuoteSnapshot,
    window: HistoryWindow,
) -> Option<String> {
    let price = snapshot.current_price?;
    let high = snapshot.period_high()?;
    let low = snapshot.period_low()?;
    let volume = snapshot.latest_volume()?;
    let market_cap = snapshot.market_cap.map_or_else(
        || "N/A".to_string(),
        |cap| format!("₹{}", group_digits(&cap.trunc().to_string())),
    );
    let label = window.label();

    Some(format!(
        "Stock: {symbol} (NSE)\n\
         Current Price: ₹{price:.2}\n\
         {label} High: ₹{high:.2}\n\
         {label} Low: ₹{low:.2}\n\
         Market Cap: {market_cap} (if available)\n\
         Volume (latest): {volume}\n",
        volume = group_digits(&volume.to_string()),
    ))
}

/// Market-insight request for one symbol
pub fn insight_prompt(
    symbol: &str,
    snapshot: &QuoteSnapshot,
    window: HistoryWindow,
) -> Option<String> {
    let context = market_context(symbol, snapshot, window)?;

    Some(format!(
        "As a financial expert familiar with the Indian stock market, analyze the following market data and provide:\n\
         1. Current market sentiment in India.\n\
         2. Key risks specific to {symbol} and the Indian market.\n\
         3. Growth potential and sectoral trends.\n\
         4. Investment recommendation (Buy, Hold, or Sell).\n\
         \n\
         Data:\n\
         {context}"
    ))
}

/// Wealth-building strategy request for an investor profile
pub fn strategy_prompt(profile: &InvestorProfile) -> String {
    format!(
        "Create a wealth-building strategy for this Indian investor:\n\
         Profile:\n\
         - Age: {age}\n\
         - Income: ₹{income}\n\
         - Risk Tolerance: {risk}/10\n\
         - Investment Goals: {goals}\n\
         - Time Horizon: {horizon} years\n\
         \n\
         Include:\n\
         1. Suggested asset allocation (Indian equity, debt, and gold).\n\
         2. Specific investment vehicles (e.g., mutual funds, stocks, FDs, PPF, NPS).\n\
         3. Tax optimization strategies (under Indian tax laws).\n\
         4. Risk management suggestions.\n\
         5. Specific steps aligned with current market conditions.",
        age = profile.age,
        income = group_digits(&profile.income.to_string()),
        risk = profile.risk_tolerance,
        goals = profile.goals,
        horizon = profile.time_horizon_years,
    )
}

/// Window-length prediction request for one symbol
pub fn prediction_prompt(
    symbol: &str,
    snapshot: &QuoteSnapshot,
    window: HistoryWindow,
) -> Option<String> {
    let price = snapshot.current_price?;
    let high = snapshot.period_high()?;
    let low = snapshot.period_low()?;
    let label = window.label();

    Some(format!(
        "Analyze the following Indian stock's recent performance and provide a {horizon} prediction:\n\
         Symbol: {symbol} (NSE)\n\
         Current Price: ₹{price:.2}\n\
         {label} High: ₹{high:.2}\n\
         {label} Low: ₹{low:.2}\n\
         \n\
         Consider current market conditions, economic trends, and sectoral developments.",
        horizon = label.to_lowercase(),
    ))
}

/// Insert comma thousand separators into a plain numeric string
fn group_digits(value: &str) -> String {
    let (sign, rest) = value
        .strip_prefix('-')
        .map_or(("", value), |stripped| ("-", stripped));
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(value.len() + int_part.len() / 3);
    grouped.push_str(sign);

    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use crate::model::PriceBar;

    fn reliance_snapshot() -> QuoteSnapshot {
        let mut snapshot = QuoteSnapshot::new("RELIANCE.NS");
        snapshot.current_price = Some(dec!(2500.00));
        snapshot.market_cap = Some(dec!(1_700_000_000_000));
        snapshot.history = vec![
            PriceBar {
                date: Utc::now(),
                high: dec!(2700.00),
                low: dec!(2100.00),
                volume: 5_000_000,
            },
        ];
        snapshot
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("5000000"), "5,000,000");
        assert_eq!(group_digits("812"), "812");
        assert_eq!(group_digits("1800000.50"), "1,800,000.50");
        assert_eq!(group_digits("-12345"), "-12,345");
    }

    #[test]
    fn test_market_context_renders_all_fields() {
        let context =
            market_context("RELIANCE", &reliance_snapshot(), HistoryWindow::SixMonths).unwrap();

        assert!(context.contains("Stock: RELIANCE (NSE)"));
        assert!(context.contains("Current Price: ₹2500.00"));
        assert!(context.contains("6-Month High: ₹2700.00"));
        assert!(context.contains("6-Month Low: ₹2100.00"));
        assert!(context.contains("Market Cap: ₹1,700,000,000,000"));
        assert!(context.contains("Volume (latest): 5,000,000"));
    }

    #[test]
    fn test_market_context_requires_price_and_history() {
        let empty = QuoteSnapshot::new("RELIANCE.NS");
        assert!(market_context("RELIANCE", &empty, HistoryWindow::SixMonths).is_none());

        let mut priceless = reliance_snapshot();
        priceless.current_price = None;
        assert!(market_context("RELIANCE", &priceless, HistoryWindow::SixMonths).is_none());
    }

    #[test]
    fn test_missing_market_cap_renders_na() {
        let mut snapshot = reliance_snapshot();
        snapshot.market_cap = None;

        let context = market_context("RELIANCE", &snapshot, HistoryWindow::SixMonths).unwrap();
        assert!(context.contains("Market Cap: N/A (if available)"));
    }

    #[test]
    fn test_insight_prompt_is_deterministic() {
        let snapshot = reliance_snapshot();
        let first = insight_prompt("RELIANCE", &snapshot, HistoryWindow::SixMonths).unwrap();
        let second = insight_prompt("RELIANCE", &snapshot, HistoryWindow::SixMonths).unwrap();

        assert_eq!(first, second);
        assert!(first.contains("Investment recommendation (Buy, Hold, or Sell)"));
    }

    #[test]
    fn test_strategy_prompt_embeds_profile() {
        let profile = InvestorProfile {
            age: 35,
            income: dec!(1_800_000),
            risk_tolerance: 8,
            goals: "Build long-term wealth for retirement".into(),
            time_horizon_years: 20,
        };

        let prompt = strategy_prompt(&profile);
        assert!(prompt.contains("- Age: 35"));
        assert!(prompt.contains("- Income: ₹1,800,000"));
        assert!(prompt.contains("- Risk Tolerance: 8/10"));
        assert!(prompt.contains("- Time Horizon: 20 years"));
        assert!(prompt.contains("PPF, NPS"));
    }

    #[test]
    fn test_prediction_prompt_embeds_extremes() {
        let prompt =
            prediction_prompt("RELIANCE", &reliance_snapshot(), HistoryWindow::SixMonths).unwrap();

        assert!(prompt.contains("provide a 6-month prediction"));
        assert!(prompt.contains("Symbol: RELIANCE (NSE)"));
        assert!(prompt.contains("6-Month High: ₹2700.00"));
        assert!(prompt.contains("6-Month Low: ₹2100.00"));
    }
}
