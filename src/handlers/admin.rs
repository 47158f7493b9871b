use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::models::{ResetRequest, ResetResponse};
use crate::state::AppState;

// administrative override: clear one identifier's rate limit log
pub async fn reset_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ResetRequest>,
) -> Json<ResetResponse> {
    let removed = state.rate_limiter.reset(&payload.identifier);
    Json(ResetResponse {
        success: true,
        removed,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
