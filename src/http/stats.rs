//! Aggregate statistics.

use crate::{app::AppState, http::error::ApiError, models::log::log_stats::LogStats};
use axum::{Json, extract::State};
use tracing::error;

pub async fn log_stats(State(state): State<AppState>) -> Result<Json<LogStats>, ApiError> {
  let stats = state
    .store
    .compute_stats()
    .await
    .inspect_err(|e| error!("log_stats error: {e}"))?;
  Ok(Json(stats))
}
