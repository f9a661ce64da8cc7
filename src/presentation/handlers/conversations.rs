use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::services::ServiceError;
use crate::domain::{Conversation, ConversationId};
use crate::presentation::middleware::AuthUser;
use crate::presentation::state::AppState;

use super::{StatusMessage, conversation_not_found, internal_error};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResponse {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Conversation> for ConversationResponse {
    fn from(conversation: Conversation) -> Self {
        Self {
            id: conversation.id.as_uuid(),
            user_id: conversation.user_id.as_str().to_string(),
            title: conversation.title,
            created_at: conversation.created_at,
            updated_at: conversation.updated_at,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateConversationRequest {
    pub title: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationResponse {
    pub conversation_id: Uuid,
    pub message: String,
}

#[derive(Deserialize)]
pub struct UpdateConversationRequest {
    pub title: String,
}

pub async fn list_conversations_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> impl IntoResponse {
    match state.conversation_service.list(&user.user_id()).await {
        Ok(conversations) => {
            let body: Vec<ConversationResponse> =
                conversations.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching conversations");
            internal_error("Failed to fetch conversations")
        }
    }
}

pub async fn create_conversation_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateConversationRequest>,
) -> impl IntoResponse {
    // An empty title means "unset"; the placeholder takes over.
    let title = request.title.filter(|t| !t.is_empty());

    match state.conversation_service.create(user.user_id(), title).await {
        Ok(conversation) => (
            StatusCode::CREATED,
            Json(CreateConversationResponse {
                conversation_id: conversation.id.as_uuid(),
                message: "Conversation created successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Error creating conversation");
            internal_error("Failed to create conversation")
        }
    }
}

pub async fn update_conversation_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateConversationRequest>,
) -> impl IntoResponse {
    let result = state
        .conversation_service
        .rename(&user.user_id(), ConversationId::from_uuid(id), request.title)
        .await;

    match result {
        Ok(()) => (
            StatusCode::OK,
            Json(StatusMessage {
                message: "Conversation updated successfully".to_string(),
            }),
        )
            .into_response(),
        Err(ServiceError::NotFound) => conversation_not_found(),
        Err(e) => {
            tracing::error!(error = %e, "Error updating conversation");
            internal_error("Failed to update conversation")
        }
    }
}

pub async fn delete_conversation_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let result = state
        .conversation_service
        .delete(&user.user_id(), ConversationId::from_uuid(id))
        .await;

    match result {
        Ok(()) => (
            StatusCode::OK,
            Json(StatusMessage {
                message: "Conversation deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(ServiceError::NotFound) => conversation_not_found(),
        Err(e) => {
            tracing::error!(error = %e, "Error deleting conversation");
            internal_error("Failed to delete conversation")
        }
    }
}
