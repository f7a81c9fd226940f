//! Log creation and paged listing.

use crate::{
  app::AppState,
  http::error::{ApiError, MSG_INVALID_BODY, MSG_INVALID_CPF, MSG_INVALID_MAC, MSG_MISSING_FIELDS},
  models::response::{
    created_log::CreatedLog,
    log_page::{DEFAULT_LIMIT, DEFAULT_PAGE, LogPage, Pagination, page_offset},
  },
  util::parse_int_prefix,
  validate::{is_valid_cpf, is_valid_mac},
};
use axum::{
  Json,
  body::Bytes,
  extract::{Query, State, rejection::JsonRejection},
  http::{HeaderMap, StatusCode, header},
};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{error, info, warn};

#[derive(Debug, Default, Deserialize)]
pub struct CreateLogRequest {
  pub cpf: Option<String>,
  pub macaddress: Option<String>,
}

/// Page and limit from raw query values. Anything that does not start with
/// a positive integer falls back to the default.
pub fn compute_page_params(params: &HashMap<String, String>) -> (i64, i64) {
  let read = |key: &str, default: i64| {
    params
      .get(key)
      .and_then(|v| parse_int_prefix(v))
      .filter(|n| *n > 0)
      .unwrap_or(default)
  };
  (read("page", DEFAULT_PAGE), read("limit", DEFAULT_LIMIT))
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
  let Some(ctype) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
    return false;
  };
  let mime = ctype.split(';').next().unwrap_or("").trim();
  mime.eq_ignore_ascii_case("application/json") || mime.to_ascii_lowercase().ends_with("+json")
}

/// Decode a create request. A non-JSON content type or a blank body reads as
/// an empty object, so the caller sees the missing-fields error.
pub fn parse_create_body(
  headers: &HeaderMap,
  body: &[u8],
) -> Result<CreateLogRequest, JsonRejection> {
  if !is_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
    return Ok(CreateLogRequest::default());
  }
  Json::<CreateLogRequest>::from_bytes(body).map(|Json(req)| req)
}

pub async fn create_log(
  State(state): State<AppState>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<(StatusCode, Json<CreatedLog>), ApiError> {
  let req = parse_create_body(&headers, &body).map_err(|rejection| {
    warn!("create_log rejected body: {rejection}");
    ApiError::Validation(MSG_INVALID_BODY)
  })?;

  let present = |v: Option<String>| v.filter(|s| !s.is_empty());
  let (Some(cpf), Some(mac)) = (present(req.cpf), present(req.macaddress)) else {
    return Err(ApiError::Validation(MSG_MISSING_FIELDS));
  };
  if !is_valid_cpf(&cpf) {
    return Err(ApiError::Validation(MSG_INVALID_CPF));
  }
  if !is_valid_mac(&mac) {
    return Err(ApiError::Validation(MSG_INVALID_MAC));
  }

  let record = state
    .store
    .insert_log(&cpf, &mac.to_uppercase())
    .await
    .inspect_err(|e| error!("create_log error: {e}"))?;
  info!(id = record.id, mac = %record.mac_address, "stored log");
  Ok((StatusCode::CREATED, Json(CreatedLog::from(record))))
}

pub async fn list_logs(
  State(state): State<AppState>,
  Query(params): Query<HashMap<String, String>>,
) -> Result<Json<LogPage>, ApiError> {
  let (page, limit) = compute_page_params(&params);
  let (data, total) = state
    .store
    .list_logs(limit, page_offset(page, limit))
    .await
    .inspect_err(|e| error!("list_logs error: {e}"))?;
  Ok(Json(LogPage {
    data,
    pagination: Pagination::new(page, limit, total),
  }))
}
