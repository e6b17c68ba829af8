//! API-key check for protected routes

use super::{ApiError, AppState};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use sha2::{Digest, Sha256};

/// Request header carrying the key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Compare two keys without short-circuiting on the first differing byte.
///
/// Both sides are hashed first so the comparison length does not depend on
/// the inputs.
pub fn keys_match(provided: &str, expected: &str) -> bool {
    let a = Sha256::digest(provided.as_bytes());
    let b = Sha256::digest(expected.as_bytes());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Middleware rejecting requests without a valid `X-API-Key` header
pub async fn require_api_key(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let Some(expected) = state.api_key.as_deref() else {
        return ApiError::unauthorized("API key is not configured on the server.").into_response();
    };

    let authorized = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .is_some_and(|key| keys_match(key, expected));

    if !authorized {
        tracing::debug!(path = %request.uri().path(), "rejected API key");
        return ApiError::unauthorized("Invalid or missing API Key").into_response();
    }
    next.run(request).await
}
