//! Text generation provider abstraction.
//!
//! The fallback endpoint depends only on [`TextProvider`], so the Gemini
//! client can be swapped for [`mock::MockTextProvider`] in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::{GeminiConfig, GeminiTextProvider};
pub use mock::{MockBehavior, MockTextProvider};

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Provider returned no text")]
    EmptyResponse,
}

impl ProviderError {
    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::ApiError(_) => "api_error",
            ProviderError::RateLimited => "rate_limited",
            ProviderError::ContentFiltered => "content_filtered",
            ProviderError::NetworkError(_) => "network_error",
            ProviderError::Timeout => "timeout",
            ProviderError::EmptyResponse => "empty_response",
        }
    }
}

/// A backend that turns one prompt into one piece of generated text.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate text for `prompt`, passed through unmodified.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
