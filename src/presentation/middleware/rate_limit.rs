use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use axum::Json;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::ports::RateLimitDecision;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

pub const RATE_LIMIT_MESSAGE: &str =
    "Too many requests from this IP, please try again after 15 minutes";

/// Counts every request against its source IP ahead of the auth gate and
/// all routes. Standard `RateLimit-*` headers go on every response, the
/// rejected ones included; legacy `X-RateLimit-*` headers are not sent.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let source = client_ip(&request);

    match state.rate_limiter.check(source) {
        RateLimitDecision::Allowed {
            limit,
            remaining,
            reset_after,
        } => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), limit, remaining, reset_after);
            response
        }
        RateLimitDecision::Limited { limit, reset_after } => {
            tracing::warn!(source = %source, "Rate limit exceeded");
            let mut response = (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorResponse {
                    error: RATE_LIMIT_MESSAGE.to_string(),
                }),
            )
                .into_response();
            apply_headers(response.headers_mut(), limit, 0, reset_after);
            response
        }
    }
}

/// First `x-forwarded-for` entry when present, otherwise the socket peer.
fn client_ip(request: &Request) -> IpAddr {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|v| v.trim().parse().ok())
        .or_else(|| {
            request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|info| info.0.ip())
        })
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

fn apply_headers(headers: &mut HeaderMap, limit: u32, remaining: u32, reset_after: Duration) {
    headers.insert("ratelimit-limit", HeaderValue::from(limit));
    headers.insert("ratelimit-remaining", HeaderValue::from(remaining));
    headers.insert("ratelimit-reset", HeaderValue::from(reset_after.as_secs()));
}
