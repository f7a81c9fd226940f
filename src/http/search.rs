//! Search API.

use crate::{
  app::AppState,
  db::SearchQuery,
  http::error::{ApiError, MSG_SEARCH_PARAMS},
  models::response::search_result::SearchResult,
};
use axum::{
  Json,
  extract::{Query, State},
};
use std::collections::HashMap;
use tracing::error;

pub async fn search_logs(
  State(state): State<AppState>,
  Query(params): Query<HashMap<String, String>>,
) -> Result<Json<SearchResult>, ApiError> {
  let fragment = |key: &str| params.get(key).map(String::as_str).filter(|s| !s.is_empty());
  let (cpf, mac) = (fragment("cpf"), fragment("mac"));
  if cpf.is_none() && mac.is_none() {
    return Err(ApiError::Validation(MSG_SEARCH_PARAMS));
  }

  let query = SearchQuery::new(cpf, mac);
  let rows = state
    .store
    .search_logs(&query)
    .await
    .inspect_err(|e| error!("search error: {e}"))?;
  Ok(Json(SearchResult::from(rows)))
}
