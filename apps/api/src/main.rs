mod config;
mod critique;
mod errors;
mod llm_client;
mod placeholders;
mod routes;
mod state;
mod ui;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Critiquer v{}", env!("CARGO_PKG_VERSION"));

    if config.google_api_key.is_none() {
        warn!("GOOGLE_API_KEY is not set; analysis requests will be rejected by the Gemini API");
    }

    // Initialize LLM client
    let llm = GeminiClient::new(config.google_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        model: Arc::new(llm),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
