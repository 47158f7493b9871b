mod config;
mod error;
mod generator;
mod handlers;
mod metrics;
mod models;
mod rate_limit;
mod state;

use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::{Any, CorsLayer};

use config::Args;
use generator::GeminiChatbot;
use rate_limit::RateLimiter;
use state::AppState;

// this is main async function with tokio
#[tokio::main]
async fn main() {
    env_logger::init();

    // parse cli arguments
    let args = Args::parse();

    let api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|k| !k.is_empty());
    if api_key.is_none() {
        log::warn!(
            "GEMINI_API_KEY not found in environment variables. Please set it for AI functionality."
        );
    }

    // creating shared state
    let state = Arc::new(AppState {
        chatbot: GeminiChatbot::new(api_key, args.gemini_url.clone(), args.model.clone()),
        rate_limiter: RateLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window)),
    });

    // spawn the periodic cleanup sweep; the limiter itself only purges lazily
    let cleanup_state = Arc::clone(&state);
    let cleanup_interval = Duration::from_secs(args.cleanup_interval);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(cleanup_interval);
        interval.tick().await; // first tick fires immediately
        loop {
            interval.tick().await;
            cleanup_state.rate_limiter.cleanup_expired(Instant::now());
            let stats = cleanup_state.rate_limiter.get_stats();
            metrics::ACTIVE_IDENTIFIERS.set(stats.active_identifiers as f64);
        }
    });

    // CORS open for Roblox Studio clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // creating the router with routes
    let app = Router::new()
        .route("/api/chat", post(handlers::chat_handler))
        .route("/api/health", get(handlers::health_handler))
        .route("/api/stats", get(handlers::stats_handler))
        .route("/api/admin/reset", post(handlers::reset_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .layer(cors)
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    log::info!("Gateway running on http://localhost:{}", args.port);
    log::info!("Gemini model: {}", args.model);
    log::info!(
        "Rate limit: {} requests per {} seconds",
        args.rate_limit,
        args.rate_window
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
