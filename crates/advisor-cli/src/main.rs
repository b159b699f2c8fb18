//! Wealth Advisor Demo
//!
//! Wires a local Ollama provider and a market data client into the
//! advisor, then walks through the three operations for a sample
//! investor and a handful of NSE symbols, printing results to stdout.

use std::sync::Arc;

use rust_decimal_macros::dec;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisor_core::{GenerationOptions, LlmProvider};
use advisor_runtime::OllamaProvider;
use wealth_advisor::{InvestorProfile, MarketData, MockMarketData, WealthAdvisor, YahooMarketData};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Initialize LLM provider
    let ollama = OllamaProvider::from_env();
    tracing::info!(
        "Ollama endpoint: {}:{}",
        ollama.config().host,
        ollama.config().port
    );

    let provider: Arc<dyn LlmProvider> = Arc::new(ollama);

    // Verify Ollama connection
    match provider.health_check().await {
        Ok(true) => {
            tracing::info!("✓ Connected to Ollama");
            if let Ok(models) = provider.list_models().await {
                for model in models {
                    tracing::info!("  Model: {}", model);
                }
            }
        }
        Ok(false) | Err(_) => {
            tracing::warn!("⚠ Ollama not available - generation will fail");
            tracing::warn!("  Make sure Ollama is running: ollama serve");
        }
    }

    // Pick a market data client (ADVISOR_MARKET_DATA=mock for offline demos)
    let market: Arc<dyn MarketData> = match std::env::var("ADVISOR_MARKET_DATA").as_deref() {
        Ok("mock") => Arc::new(MockMarketData::new()),
        _ => Arc::new(YahooMarketData::new()),
    };
    tracing::info!("Market data: {}", market.name());

    let options = std::env::var("OLLAMA_MODEL")
        .map(GenerationOptions::for_model)
        .unwrap_or_default();

    let advisor = WealthAdvisor::new(provider, market).with_options(options);

    // Example investor profile
    let profile = InvestorProfile {
        age: 35,
        income: dec!(1_800_000), // In INR
        risk_tolerance: 8,
        goals: "Build long-term wealth for retirement".into(),
        time_horizon_years: 20,
    };

    // Generate a wealth-building strategy
    println!("\nFetching wealth strategy...");
    match advisor.wealth_strategy(&profile).await {
        Ok(result) => println!("\nStrategy: {}", result.strategy),
        Err(e) => println!("\nStrategy failed: {e}"),
    }

    // Get current market insights for Reliance Industries
    println!("\nFetching market insights for Reliance...");
    match advisor.market_insights("RELIANCE").await {
        Ok(result) => println!("\nInsights: {}", result.insights),
        Err(e) => println!("\nInsights failed: {e}"),
    }

    // Get AI predictions for multiple stocks
    println!("\nFetching predictions for multiple stocks...");
    match advisor.predictions(&["RELIANCE", "TCS", "INFY"]).await {
        Ok(predictions) => {
            for (symbol, prediction) in predictions {
                println!("\nPrediction for {symbol}: {prediction}");
            }
        }
        Err(e) => println!("\nPredictions failed: {e}"),
    }

    Ok(())
}
