use axum::Json;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::domain::UserId;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

/// Authenticated subject attached to the request once the gate passes.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
}

impl AuthUser {
    pub fn user_id(&self) -> UserId {
        UserId::new(self.sub.clone())
    }
}

/// Bearer-token gate in front of the conversation routes. A missing
/// header, a malformed header, and a rejected credential all produce the
/// same 401; no handler runs.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty());

    let claims = match token.map(|t| state.token_verifier.verify(t)) {
        Some(Ok(claims)) => claims,
        Some(Err(e)) => {
            tracing::debug!(error = %e, "Token rejected");
            return unauthorized();
        }
        None => return unauthorized(),
    };

    request.extensions_mut().insert(AuthUser { sub: claims.sub });
    next.run(request).await
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: "Invalid token".to_string(),
        }),
    )
        .into_response()
}
