//! Error Types

use thiserror::Error;

use advisor_core::ProviderError;

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Errors from market data providers
#[derive(Error, Debug)]
pub enum MarketError {
    /// Provider has no data source for this symbol
    #[error("unsupported symbol {0}")]
    UnsupportedSymbol(String),

    /// Transport or provider API failure
    #[error("{0}")]
    Api(String),
}

/// Advisor error types
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Empty history or missing current price for a symbol
    #[error("No data found for symbol {0}")]
    NoData(String),

    /// Data retrieval failed for a symbol
    #[error("Error fetching stock data for {symbol}: {message}")]
    Fetch { symbol: String, message: String },

    /// Text generation failed; passed through from the provider untouched
    #[error(transparent)]
    Generation(#[from] ProviderError),
}
