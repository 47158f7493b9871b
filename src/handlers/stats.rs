use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::models::StatsResponse;
use crate::state::AppState;

// usage statistics, passed through from the rate limiter untransformed
pub async fn stats_handler(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        success: true,
        stats: state.rate_limiter.get_stats(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
