use std::sync::Arc;

use tracing::instrument;

use crate::application::ports::{ConversationRepository, MessageRepository};
use crate::domain::{Conversation, ConversationId, UserId};

use super::ServiceError;

pub struct ConversationService {
    conversations: Arc<dyn ConversationRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl ConversationService {
    pub fn new(
        conversations: Arc<dyn ConversationRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            conversations,
            messages,
        }
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn list(&self, user_id: &UserId) -> Result<Vec<Conversation>, ServiceError> {
        Ok(self.conversations.list_for_user(user_id).await?)
    }

    #[instrument(skip(self, title), fields(user_id = %user_id))]
    pub async fn create(
        &self,
        user_id: UserId,
        title: Option<String>,
    ) -> Result<Conversation, ServiceError> {
        let conversation = Conversation::new(user_id, title);
        self.conversations.create(&conversation).await?;
        Ok(conversation)
    }

    #[instrument(skip(self, title), fields(conversation_id = %id, user_id = %user_id))]
    pub async fn rename(
        &self,
        user_id: &UserId,
        id: ConversationId,
        title: String,
    ) -> Result<(), ServiceError> {
        let mut conversation = self
            .conversations
            .find_for_user(id, user_id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        conversation.rename(title);
        self.conversations.save(&conversation).await?;
        Ok(())
    }

    /// Cascade delete: messages first, then the conversation row. The two
    /// steps are independent store operations; a crash between them
    /// leaves orphaned messages behind.
    #[instrument(skip(self), fields(conversation_id = %id, user_id = %user_id))]
    pub async fn delete(&self, user_id: &UserId, id: ConversationId) -> Result<(), ServiceError> {
        self.conversations
            .find_for_user(id, user_id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        self.messages.delete_for_conversation(id).await?;
        self.conversations.delete(id).await?;
        Ok(())
    }
}
