use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::internal_error;

#[derive(Deserialize)]
pub struct CompletionRequest {
    pub message: String,
}

/// Stateless passthrough to the completion provider. Deliberately outside
/// the auth gate and unrelated to any stored conversation; the response
/// body is the completion text as a bare JSON string.
pub async fn groq_completion_handler(
    State(state): State<AppState>,
    Json(request): Json<CompletionRequest>,
) -> impl IntoResponse {
    tracing::debug!(message = %sanitize_prompt(&request.message), "Proxying completion request");

    match state.completion_service.complete(&request.message).await {
        Ok(text) => (StatusCode::OK, Json(text)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Error fetching chat completion");
            internal_error("Failed to get chat completion")
        }
    }
}
