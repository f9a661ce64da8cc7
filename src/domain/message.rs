use chrono::{DateTime, Utc};

use super::{ConversationId, MessageId, MessageRole};

/// Model tag recorded when the caller does not name one.
pub const DEFAULT_MODEL: &str = "groq";

#[derive(Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub model: String,
}

impl Message {
    pub fn new(
        conversation_id: ConversationId,
        role: MessageRole,
        content: String,
        model: Option<String>,
    ) -> Self {
        Self {
            id: MessageId::new(),
            conversation_id,
            role,
            content,
            created_at: Utc::now(),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}
