//! HTTP router and handlers.

use crate::app::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod error;
pub mod health;
pub mod logs;
pub mod search;
pub mod stats;
pub mod ui;

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::ui_index))
        .route("/dashboard.js", get(ui::ui_script))
        .route("/health", get(health::health))
        .route("/logs", post(logs::create_log).get(logs::list_logs))
        .route("/logs/stats", get(stats::log_stats))
        .route("/logs/search", get(search::search_logs))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
