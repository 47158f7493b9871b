use axum::Json;
use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::error::ApiError;
use crate::generator::MAX_MESSAGE_LENGTH;
use crate::metrics::{RATE_LIMITED_TOTAL, REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{ChatRequest, ChatResponse};
use crate::state::AppState;

// Rate limit subject: client address plus the caller-supplied user tag.
// Behind a proxy the real client is in X-Forwarded-For; fall back to the
// socket peer otherwise.
fn derive_identifier(headers: &HeaderMap, peer: &SocketAddr, user_id: &str) -> String {
    let client_ip = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| peer.ip().to_string());
    format!("{}_{}", client_ip, user_id)
}

pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    REQUEST_TOTAL.inc();
    let start_time = Instant::now();

    let message = payload.message.trim();
    if message.is_empty() {
        return Err(ApiError::MissingMessage);
    }
    // character count, not bytes, so multibyte messages get the same cap
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(ApiError::MessageTooLong);
    }
    state
        .chatbot
        .validate_content(message)
        .map_err(ApiError::InappropriateContent)?;

    // one admission check per logical chat request, before the provider call
    let identifier = derive_identifier(&headers, &addr, &payload.user_id);
    if !state.rate_limiter.check_and_record(&identifier, Instant::now()) {
        RATE_LIMITED_TOTAL.inc();
        return Err(ApiError::RateLimitExceeded);
    }

    let response = state.chatbot.generate(message, &payload.user_id).await;

    log::info!(
        "Chat interaction - User: {}, Message length: {}",
        payload.user_id,
        message.len()
    );
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    Ok(Json(ChatResponse {
        success: true,
        response,
        timestamp: chrono::Utc::now().to_rfc3339(),
        user_id: payload.user_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> SocketAddr {
        "203.0.113.7:51234".parse().unwrap()
    }

    #[test]
    fn identifier_uses_peer_address_without_proxy_header() {
        let headers = HeaderMap::new();
        assert_eq!(
            derive_identifier(&headers, &peer(), "anonymous"),
            "203.0.113.7_anonymous"
        );
    }

    #[test]
    fn identifier_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("198.51.100.1, 10.0.0.2"),
        );
        assert_eq!(
            derive_identifier(&headers, &peer(), "player42"),
            "198.51.100.1_player42"
        );
    }
}
