use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::services::ServiceError;
use crate::domain::{ConversationId, Message, MessageRole};
use crate::presentation::middleware::AuthUser;
use crate::presentation::state::AppState;

use super::{StatusMessage, bad_request, conversation_not_found, internal_error};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub role: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub model: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.as_uuid(),
            conversation_id: message.conversation_id.as_uuid(),
            role: message.role.as_str().to_string(),
            content: message.content,
            timestamp: message.created_at,
            model: message.model,
        }
    }
}

#[derive(Deserialize)]
pub struct AddMessageRequest {
    pub role: String,
    pub content: String,
    pub model: Option<String>,
}

pub async fn list_messages_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(conversation_id): Path<Uuid>,
) -> impl IntoResponse {
    let result = state
        .message_service
        .list(&user.user_id(), ConversationId::from_uuid(conversation_id))
        .await;

    match result {
        Ok(messages) => {
            let body: Vec<MessageResponse> = messages.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(ServiceError::NotFound) => conversation_not_found(),
        Err(e) => {
            tracing::error!(error = %e, "Error fetching messages");
            internal_error("Failed to fetch messages")
        }
    }
}

pub async fn add_message_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(conversation_id): Path<Uuid>,
    Json(request): Json<AddMessageRequest>,
) -> impl IntoResponse {
    let role = match request.role.parse::<MessageRole>() {
        Ok(role) => role,
        Err(_) => return bad_request("Invalid message role"),
    };

    if request.content.is_empty() {
        return bad_request("Message content is required");
    }

    let result = state
        .message_service
        .append(
            &user.user_id(),
            ConversationId::from_uuid(conversation_id),
            role,
            request.content,
            request.model,
        )
        .await;

    match result {
        Ok(_) => (
            StatusCode::CREATED,
            Json(StatusMessage {
                message: "Message added successfully".to_string(),
            }),
        )
            .into_response(),
        Err(ServiceError::NotFound) => conversation_not_found(),
        Err(e) => {
            tracing::error!(error = %e, "Error adding message");
            internal_error("Failed to add message")
        }
    }
}
