//! # advisor-core
//!
//! Provider-agnostic text-generation abstraction for the wealth advisor.
//!
//! The [`LlmProvider`] trait is the single seam between prompt-rendering
//! logic and a concrete model backend: one free-text prompt in, the full
//! response text out. Swapping Ollama for any other backend never touches
//! advisor code.
//!
//! ```rust,ignore
//! use advisor_core::{GenerationOptions, LlmProvider};
//!
//! let response = provider.generate(&prompt, &GenerationOptions::default()).await?;
//! ```

pub mod error;
pub mod provider;

pub use error::{ProviderError, Result};
pub use provider::{GenerationOptions, LlmProvider};
