mod completion;
mod conversations;
mod health;
mod messages;

pub use completion::groq_completion_handler;
pub use conversations::{
    create_conversation_handler, delete_conversation_handler, list_conversations_handler,
    update_conversation_handler,
};
pub use health::health_handler;
pub use messages::{add_message_handler, list_messages_handler};

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Error envelope every failure path returns; nothing else leaks out.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Acknowledgement body for mutations that return no record.
#[derive(Serialize)]
pub struct StatusMessage {
    pub message: String,
}

pub(crate) fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

pub(crate) fn conversation_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Conversation not found".to_string(),
        }),
    )
        .into_response()
}

pub(crate) fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
