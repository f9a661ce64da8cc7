use chrono::{DateTime, Utc};

use super::{ConversationId, UserId};

/// Placeholder title until the first user message names the conversation.
pub const DEFAULT_TITLE: &str = "New Conversation";

const MAX_TITLE_CHARS: usize = 50;
const TRUNCATED_TITLE_CHARS: usize = 47;

#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: ConversationId,
    pub user_id: UserId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(user_id: UserId, title: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ConversationId::new(),
            user_id,
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn rename(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Bump `updated_at` without changing anything else.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Auto-titling only applies while the title is still the placeholder.
    pub fn has_default_title(&self) -> bool {
        self.title == DEFAULT_TITLE
    }
}

/// Derive a conversation title from the first user message: content over
/// 50 characters is cut to the first 47 plus an ellipsis.
pub fn derive_title(content: &str) -> String {
    if content.chars().count() > MAX_TITLE_CHARS {
        let mut title: String = content.chars().take(TRUNCATED_TITLE_CHARS).collect();
        title.push_str("...");
        title
    } else {
        content.to_string()
    }
}
