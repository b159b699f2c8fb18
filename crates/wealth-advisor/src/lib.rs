//! # wealth-advisor
//!
//! AI-powered wealth advisor for Indian (NSE) equities.
//!
//! For each request the advisor fetches a six-month market snapshot,
//! renders a fixed natural-language prompt, and asks a locally hosted
//! model for the narrative:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      WealthAdvisor                        │
//! │  ┌─────────────┐   ┌─────────────┐   ┌───────────────┐   │
//! │  │ MarketData  │──▶│   Prompt    │──▶│  LlmProvider  │   │
//! │  │ (snapshot)  │   │  templates  │   │  (generate)   │   │
//! │  └─────────────┘   └─────────────┘   └───────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//!      fetch                render              invoke
//! ```
//!
//! ## Operations
//!
//! - **Market insights** - sentiment, risks, and a Buy/Hold/Sell call for
//!   one symbol
//! - **Wealth strategy** - a personalized plan for an investor profile
//!   (no market fetch)
//! - **Predictions** - per-symbol forecasts for a batch of symbols, with
//!   per-symbol failure diagnostics
//!
//! Symbols without a current price or history are reported as having no
//! data and never reach the model.

pub mod advisor;
pub mod error;
pub mod market;
pub mod model;
pub mod prompt;

pub use advisor::{MarketInsights, WealthAdvisor, WealthStrategy};
pub use error::{AdvisorError, MarketError, Result};
pub use market::{MarketData, MockMarketData, YahooMarketData, NSE_SUFFIX};
pub use model::{HistoryWindow, InvestorProfile, PriceBar, QuoteSnapshot};
