use async_trait::async_trait;

use crate::domain::{ConversationId, Message};

use super::RepositoryError;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Messages for a conversation in chronological order.
    async fn list_for_conversation(
        &self,
        conversation_id: ConversationId,
    ) -> Result<Vec<Message>, RepositoryError>;

    async fn insert(&self, message: &Message) -> Result<(), RepositoryError>;

    /// Remove every message belonging to a conversation. Part of the
    /// app-level cascade; runs before the conversation row is deleted.
    async fn delete_for_conversation(
        &self,
        conversation_id: ConversationId,
    ) -> Result<(), RepositoryError>;
}
