use serde::{Deserialize, Serialize};

use crate::rate_limit::RateLimiterStats;

// Chat API request format
#[derive(Deserialize, Clone)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "userId", default = "default_user_id")]
    pub user_id: String,
}

fn default_user_id() -> String {
    "anonymous".to_string()
}

// Chat API response format
#[derive(Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub timestamp: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

// Error body shared by every failing route
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: String,
    pub timestamp: String,
    pub gemini_available: bool,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: RateLimiterStats,
    pub timestamp: String,
}

// Admin reset request/response
#[derive(Deserialize)]
pub struct ResetRequest {
    pub identifier: String,
}

#[derive(Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub removed: bool,
    pub timestamp: String,
}
