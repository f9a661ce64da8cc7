use std::sync::Arc;

use crate::application::ports::{CompletionClient, CompletionClientError};

pub struct CompletionService {
    client: Arc<dyn CompletionClient>,
    pretext: String,
}

impl CompletionService {
    pub fn new(client: Arc<dyn CompletionClient>, pretext: String) -> Self {
        Self { client, pretext }
    }

    /// The configured pretext is prefixed directly onto the caller's
    /// message, no separator in between.
    pub async fn complete(&self, message: &str) -> Result<String, CompletionClientError> {
        let prompt = format!("{}{}", self.pretext, message);
        self.client.complete(&prompt).await
    }
}
