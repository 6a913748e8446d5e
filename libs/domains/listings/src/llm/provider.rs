use async_trait::async_trait;

use crate::error::ListingResult;

/// Text generation and embedding operations
///
/// Both enrichment and search go through this trait, so tests can swap
/// in a mock and the HTTP client stays confined to one module.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmProvider: Send + Sync + 'static {
    /// Generate a chat completion for the given prompts
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> ListingResult<String>;

    /// Embed a single text into a vector
    async fn embed(&self, text: &str) -> ListingResult<Vec<f32>>;
}
