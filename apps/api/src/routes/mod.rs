pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::critique::handlers;
use crate::state::AppState;
use crate::ui;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Browser page
        .route("/", get(ui::handlers::index))
        .route("/analyze", post(ui::handlers::analyze))
        // JSON API
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        // Resume uploads are not size-limited
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
