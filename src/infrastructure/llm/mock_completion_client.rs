use crate::application::ports::{CompletionClient, CompletionClientError};

pub struct MockCompletionClient;

#[async_trait::async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, _prompt: &str) -> Result<String, CompletionClientError> {
        Ok("Mock completion".to_string())
    }
}

/// Always fails, standing in for an unreachable provider.
pub struct FailingCompletionClient;

#[async_trait::async_trait]
impl CompletionClient for FailingCompletionClient {
    async fn complete(&self, _prompt: &str) -> Result<String, CompletionClientError> {
        Err(CompletionClientError::ApiRequestFailed(
            "connection refused".to_string(),
        ))
    }
}
