use async_trait::async_trait;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// One-shot chat completion; the prompt is sent as a single user
    /// message and the first choice's text comes back verbatim.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
