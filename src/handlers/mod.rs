mod admin;
mod chat;
mod health;
mod metrics;
mod stats;

pub use admin::reset_handler;
pub use chat::chat_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use stats::stats_handler;
