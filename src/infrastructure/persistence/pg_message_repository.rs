use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{MessageRepository, RepositoryError};
use crate::domain::{ConversationId, Message, MessageId, MessageRole};

pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn message_from_row(row: &PgRow) -> Result<Message, RepositoryError> {
    let role = row
        .try_get::<String, _>("role")
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?
        .parse::<MessageRole>()
        .map_err(RepositoryError::QueryFailed)?;

    Ok(Message {
        id: MessageId::from_uuid(
            row.try_get("id")
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
        ),
        conversation_id: ConversationId::from_uuid(
            row.try_get("conversation_id")
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
        ),
        role,
        content: row
            .try_get("content")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
        created_at: row
            .try_get("created_at")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
        model: row
            .try_get("model")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
    })
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self), fields(conversation_id = %conversation_id))]
    async fn list_for_conversation(
        &self,
        conversation_id: ConversationId,
    ) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, conversation_id, role, content, created_at, model
            FROM messages
            WHERE conversation_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(conversation_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.iter().map(message_from_row).collect()
    }

    #[instrument(
        skip(self, message),
        fields(message_id = %message.id, conversation_id = %message.conversation_id)
    )]
    async fn insert(&self, message: &Message) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, conversation_id, role, content, created_at, model)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(message.id.as_uuid())
        .bind(message.conversation_id.as_uuid())
        .bind(message.role.as_str())
        .bind(&message.content)
        .bind(message.created_at)
        .bind(&message.model)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(conversation_id = %conversation_id))]
    async fn delete_for_conversation(
        &self,
        conversation_id: ConversationId,
    ) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM messages WHERE conversation_id = $1")
            .bind(conversation_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}
