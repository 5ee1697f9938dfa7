//! Text generation capability used by the responder

use async_trait::async_trait;

use crate::error::Result;

/// Trait for pretrained-model text generation
///
/// Output is non-deterministic and latency is unbounded; callers get the raw
/// completion or an error.
///
/// Implementations:
/// - `OllamaGenerator`: local Ollama server
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Complete `prompt`, producing at most `max_tokens` tokens
    async fn generate(&self, prompt: &str, max_tokens: u32, temperature: f32) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
