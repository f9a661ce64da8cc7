use std::sync::Arc;

use tracing::instrument;

use crate::application::ports::{ConversationRepository, MessageRepository};
use crate::domain::{ConversationId, Message, MessageRole, UserId, derive_title};

use super::ServiceError;

pub struct MessageService {
    conversations: Arc<dyn ConversationRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl MessageService {
    pub fn new(
        conversations: Arc<dyn ConversationRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            conversations,
            messages,
        }
    }

    #[instrument(skip(self), fields(conversation_id = %conversation_id, user_id = %user_id))]
    pub async fn list(
        &self,
        user_id: &UserId,
        conversation_id: ConversationId,
    ) -> Result<Vec<Message>, ServiceError> {
        self.conversations
            .find_for_user(conversation_id, user_id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        Ok(self.messages.list_for_conversation(conversation_id).await?)
    }

    /// Append a message and mutate the parent: `updated_at` always moves
    /// forward, and the first user message names a conversation whose
    /// title is still the placeholder. The parent read and the later save
    /// are separate store calls, so two concurrent first messages can
    /// both pass the title check; last write wins.
    #[instrument(
        skip(self, content, model),
        fields(conversation_id = %conversation_id, user_id = %user_id, role = %role)
    )]
    pub async fn append(
        &self,
        user_id: &UserId,
        conversation_id: ConversationId,
        role: MessageRole,
        content: String,
        model: Option<String>,
    ) -> Result<Message, ServiceError> {
        let mut conversation = self
            .conversations
            .find_for_user(conversation_id, user_id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        let message = Message::new(conversation_id, role, content, model);
        self.messages.insert(&message).await?;

        conversation.touch();
        if role == MessageRole::User && conversation.has_default_title() {
            conversation.title = derive_title(&message.content);
        }
        self.conversations.save(&conversation).await?;

        Ok(message)
    }
}
