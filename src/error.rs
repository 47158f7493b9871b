use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::ErrorResponse;

// Failures the chat route can report to clients. The generator itself
// never fails; these are all produced before it is called.
pub enum ApiError {
    MissingMessage,
    MessageTooLong,
    InappropriateContent(String),
    RateLimitExceeded,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::MissingMessage => (
                StatusCode::BAD_REQUEST,
                "Missing Message",
                "The 'message' field is required and cannot be empty".to_string(),
            ),
            ApiError::MessageTooLong => (
                StatusCode::BAD_REQUEST,
                "Message Too Long",
                "Message cannot exceed 1000 characters".to_string(),
            ),
            ApiError::InappropriateContent(reason) => {
                (StatusCode::BAD_REQUEST, "Inappropriate Content", reason)
            }
            ApiError::RateLimitExceeded => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate Limit Exceeded",
                "Too many requests. Please wait 60 seconds before sending another message."
                    .to_string(),
            ),
        };

        let body = ErrorResponse {
            success: false,
            error: error.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
