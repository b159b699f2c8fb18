//! LLM Provider Strategy Pattern
//!
//! Defines a common interface for all text-generation backends (Ollama,
//! OpenAI, etc.) so the advisor can work with any of them without code
//! changes. The contract is deliberately narrow: one prompt string in,
//! the complete response string out, no streaming.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for a generation call
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model identifier (e.g., "stablelm-zephyr", "llama3.2")
    pub model: String,

    /// Temperature for sampling (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Top-p nucleus sampling
    #[serde(default = "default_top_p")]
    pub top_p: f32,
}

fn default_temperature() -> f32 {
    0.7
}
fn default_max_tokens() -> u32 {
    2048
}
fn default_top_p() -> f32 {
    0.9
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: "stablelm-zephyr".into(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
        }
    }
}

impl GenerationOptions {
    /// Options for a specific model, everything else at defaults
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

/// Strategy trait for text-generation backends
///
/// Implement this trait to add support for a new model backend. The
/// advisor works exclusively through this interface, and each call
/// blocks until the full response is available.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion for a single free-text prompt
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String>;

    /// Check if the provider is available and configured correctly
    async fn health_check(&self) -> Result<bool>;

    /// List model identifiers available on this provider
    async fn list_models(&self) -> Result<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_options_defaults() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.model, "stablelm-zephyr");
        assert_eq!(opts.temperature, 0.7);
        assert_eq!(opts.max_tokens, 2048);
    }

    #[test]
    fn test_for_model_keeps_defaults() {
        let opts = GenerationOptions::for_model("llama3.2");
        assert_eq!(opts.model, "llama3.2");
        assert_eq!(opts.top_p, 0.9);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let opts: GenerationOptions =
            serde_json::from_str(r#"{"model": "mistral"}"#).expect("valid options");
        assert_eq!(opts.model, "mistral");
        assert_eq!(opts.max_tokens, 2048);
    }
}
