use crate::generator::GeminiChatbot;
use crate::rate_limit::RateLimiter;
// app's shared state

pub struct AppState {
    pub chatbot: GeminiChatbot,
    pub rate_limiter: RateLimiter,
}
