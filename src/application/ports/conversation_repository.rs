use async_trait::async_trait;

use crate::domain::{Conversation, ConversationId, UserId};

use super::RepositoryError;

#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// All conversations owned by the user, most recently active first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Conversation>, RepositoryError>;

    async fn create(&self, conversation: &Conversation) -> Result<(), RepositoryError>;

    /// Compound `(id, owner)` lookup. Callers must never look a
    /// conversation up by id alone; the ownership filter is part of the
    /// query, not a separate check.
    async fn find_for_user(
        &self,
        id: ConversationId,
        user_id: &UserId,
    ) -> Result<Option<Conversation>, RepositoryError>;

    /// Persist title and `updated_at` for an existing conversation.
    async fn save(&self, conversation: &Conversation) -> Result<(), RepositoryError>;

    async fn delete(&self, id: ConversationId) -> Result<(), RepositoryError>;
}
