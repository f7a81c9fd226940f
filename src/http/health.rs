//! Store connectivity check.

use crate::{app::AppState, models::response::health_status::HealthStatus};
use axum::{Json, extract::State, http::StatusCode};
use tracing::warn;

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
  match state.store.health_check().await {
    Ok(()) => (StatusCode::OK, Json(HealthStatus::connected())),
    Err(e) => {
      warn!("health check failed: {e}");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(HealthStatus::disconnected()),
      )
    }
  }
}
