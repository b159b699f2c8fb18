//! # advisor-runtime
//!
//! Runtime providers for the wealth advisor.
//!
//! ## Providers
//!
//! - **Ollama** (default): Local LLM inference via Ollama
//!
//! ## Usage
//!
//! ```rust,ignore
//! use advisor_runtime::OllamaProvider;
//!
//! let provider = OllamaProvider::from_env();
//! let response = provider.generate("prompt", &GenerationOptions::default()).await?;
//! ```

#[cfg(feature = "ollama")]
pub mod ollama;

#[cfg(feature = "ollama")]
pub use ollama::{OllamaConfig, OllamaProvider};

// Re-export core types for convenience
pub use advisor_core::{GenerationOptions, LlmProvider, ProviderError, Result};
