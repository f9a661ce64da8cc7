use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::application::ports::{ConversationRepository, MessageRepository, RepositoryError};
use crate::domain::{Conversation, ConversationId, Message, UserId};

/// In-memory adapter backing the HTTP and service tests. Behaves like the
/// Postgres adapter (scoping, ordering, rows-affected semantics) without a
/// running database.
pub struct InMemoryConversationRepository {
    rows: Mutex<HashMap<Uuid, Conversation>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryConversationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Conversation>, RepositoryError> {
        let rows = self.rows.lock().expect("lock poisoned");
        let mut conversations: Vec<Conversation> = rows
            .values()
            .filter(|c| &c.user_id == user_id)
            .cloned()
            .collect();
        conversations.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(conversations)
    }

    async fn create(&self, conversation: &Conversation) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().expect("lock poisoned");
        if rows
            .insert(conversation.id.as_uuid(), conversation.clone())
            .is_some()
        {
            return Err(RepositoryError::ConstraintViolation(
                conversation.id.to_string(),
            ));
        }
        Ok(())
    }

    async fn find_for_user(
        &self,
        id: ConversationId,
        user_id: &UserId,
    ) -> Result<Option<Conversation>, RepositoryError> {
        let rows = self.rows.lock().expect("lock poisoned");
        Ok(rows
            .get(&id.as_uuid())
            .filter(|c| &c.user_id == user_id)
            .cloned())
    }

    async fn save(&self, conversation: &Conversation) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().expect("lock poisoned");
        match rows.get_mut(&conversation.id.as_uuid()) {
            Some(existing) => {
                *existing = conversation.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound(conversation.id.to_string())),
        }
    }

    async fn delete(&self, id: ConversationId) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().expect("lock poisoned");
        match rows.remove(&id.as_uuid()) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound(id.to_string())),
        }
    }
}

pub struct InMemoryMessageRepository {
    rows: Mutex<Vec<Message>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn list_for_conversation(
        &self,
        conversation_id: ConversationId,
    ) -> Result<Vec<Message>, RepositoryError> {
        let rows = self.rows.lock().expect("lock poisoned");
        let mut messages: Vec<Message> = rows
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(messages)
    }

    async fn insert(&self, message: &Message) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().expect("lock poisoned");
        rows.push(message.clone());
        Ok(())
    }

    async fn delete_for_conversation(
        &self,
        conversation_id: ConversationId,
    ) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().expect("lock poisoned");
        rows.retain(|m| m.conversation_id != conversation_id);
        Ok(())
    }
}
