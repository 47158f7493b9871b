use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("chat_requests_total", "Total number of chat requests").unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter =
        register_counter!("chat_rate_limited_total", "Total requests rejected by the rate limiter").unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "chat_request_latency_seconds",
        "Chat request latency in seconds"
    )
    .unwrap();
    pub static ref ACTIVE_IDENTIFIERS: Gauge =
        register_gauge!("chat_active_identifiers", "Identifiers with a non-empty rate limit log").unwrap();
}
