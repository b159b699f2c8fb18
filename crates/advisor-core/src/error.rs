//! Error Types

use thiserror::Error;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors surfaced by text-generation backends
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Backend rejected or failed a generation request
    #[error("Provider error: {0}")]
    Provider(String),

    /// Backend unreachable or not responding
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),
}
