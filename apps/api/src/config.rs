use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Nothing is required at startup; a missing API key only fails the model call.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: optional_env("GOOGLE_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8501".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and empty both count as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
