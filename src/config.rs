use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "gemini-chat-gateway")]
#[command(about = "Rate-limited chat backend in front of the Gemini API")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 5000)]
    pub port: u16,

    // Gemini API base URL (override for testing)
    #[arg(long, default_value = "https://generativelanguage.googleapis.com")]
    pub gemini_url: String,

    // Gemini model name
    #[arg(short, long, default_value = "gemini-1.5-flash")]
    pub model: String,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 10)]
    pub rate_limit: usize,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 60)]
    pub rate_window: u64,

    // Seconds between rate limiter cleanup sweeps
    #[arg(long, default_value_t = 300)]
    pub cleanup_interval: u64,
}
