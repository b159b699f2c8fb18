//! The Wealth Advisor
//!
//! Owns a text-generation handle and a market-data handle and exposes
//! three operations: market insights, wealth strategy, and multi-symbol
//! predictions. Each operation fetches what it needs, renders a fixed
//! prompt, and issues exactly one generation call per request/symbol,
//! strictly in sequence.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use advisor_core::{GenerationOptions, LlmProvider};

use crate::error::{AdvisorError, MarketError, Result};
use crate::market::{nse_symbol, MarketData};
use crate::model::{HistoryWindow, InvestorProfile, QuoteSnapshot};
use crate::prompt;

/// Lookback window every advisor operation analyzes
const LOOKBACK: HistoryWindow = HistoryWindow::SixMonths;

/// AI-generated market analysis for one symbol
#[derive(Clone, Debug, Serialize)]
pub struct MarketInsights {
    pub symbol: String,
    pub insights: String,
}

/// AI-generated wealth-building strategy
#[derive(Clone, Debug, Serialize)]
pub struct WealthStrategy {
    pub strategy: String,
}

/// Wealth advisor for Indian (NSE) equities
pub struct WealthAdvisor {
    provider: Arc<dyn LlmProvider>,
    market: Arc<dyn MarketData>,
    options: GenerationOptions,
}

impl WealthAdvisor {
    pub fn new(provider: Arc<dyn LlmProvider>, market: Arc<dyn MarketData>) -> Self {
        Self {
            provider,
            market,
            options: GenerationOptions::default(),
        }
    }

    /// Override generation options (model, temperature, ...)
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Fetch the lookback snapshot for a bare NSE ticker
    async fn fetch_snapshot(&self, symbol: &str) -> std::result::Result<QuoteSnapshot, MarketError> {
        self.market.fetch(&nse_symbol(symbol), LOOKBACK).await
    }

    /// AI market insights for one NSE symbol
    ///
    /// An empty history or a missing current price yields `NoData`
    /// without a generation call; a failed fetch yields `Fetch`.
    pub async fn market_insights(&self, symbol: &str) -> Result<MarketInsights> {
        let snapshot = self
            .fetch_snapshot(symbol)
            .await
            .map_err(|e| AdvisorError::Fetch {
                symbol: symbol.to_string(),
                message: e.to_string(),
            })?;

        let prompt = prompt::insight_prompt(symbol, &snapshot, LOOKBACK)
            .ok_or_else(|| AdvisorError::NoData(symbol.to_string()))?;

        tracing::debug!(symbol, "requesting market insights");
        let insights = self.provider.generate(&prompt, &self.options).await?;

        Ok(MarketInsights {
            symbol: symbol.to_string(),
            insights,
        })
    }

    /// Personalized wealth-building strategy for an investor profile
    pub async fn wealth_strategy(&self, profile: &InvestorProfile) -> Result<WealthStrategy> {
        let prompt = prompt::strategy_prompt(profile);

        tracing::debug!(age = profile.age, "requesting wealth strategy");
        let strategy = self.provider.generate(&prompt, &self.options).await?;

        Ok(WealthStrategy { strategy })
    }

    /// Predictions for multiple NSE symbols
    ///
    /// Symbols are handled independently and in order. Data problems
    /// become per-symbol diagnostic strings and the batch continues; the
    /// returned map always covers every requested symbol. Only a
    /// generation failure aborts the batch.
    pub async fn predictions(&self, symbols: &[&str]) -> Result<BTreeMap<String, String>> {
        let mut predictions = BTreeMap::new();

        for &symbol in symbols {
            let snapshot = match self.fetch_snapshot(symbol).await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    tracing::warn!(symbol, error = %e, "prediction fetch failed");
                    predictions.insert(
                        symbol.to_string(),
                        format!("Error fetching data for {symbol}: {e}"),
                    );
                    continue;
                }
            };

            let Some(prompt) = prompt::prediction_prompt(symbol, &snapshot, LOOKBACK) else {
                predictions.insert(symbol.to_string(), "No sufficient data available".to_string());
                continue;
            };

            let forecast = self.provider.generate(&prompt, &self.options).await?;
            predictions.insert(symbol.to_string(), forecast);
        }

        Ok(predictions)
    }
}
