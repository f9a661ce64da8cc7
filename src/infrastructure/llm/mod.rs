mod groq_client;
mod mock_completion_client;

pub use groq_client::GroqCompletionClient;
pub use mock_completion_client::{FailingCompletionClient, MockCompletionClient};
