mod completion_service;
mod conversation_service;
mod message_service;

pub use completion_service::CompletionService;
pub use conversation_service::ConversationService;
pub use message_service::MessageService;

use crate::application::ports::RepositoryError;

/// `NotFound` covers both a conversation that does not exist and one
/// owned by another subject; callers cannot tell the two apart.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("conversation not found")]
    NotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
