//! Handler error type and its JSON rendering.

use crate::{db::StoreError, models::response::error_body::ErrorBody};
use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

pub const MSG_MISSING_FIELDS: &str = "Campos obrigatórios: cpf, macaddress";
pub const MSG_INVALID_CPF: &str = "CPF inválido. Deve conter 11 dígitos.";
pub const MSG_INVALID_MAC: &str = "MAC Address inválido. Formato esperado: XX:XX:XX:XX:XX:XX";
pub const MSG_INVALID_BODY: &str = "Corpo da requisição inválido. Envie um JSON com cpf e macaddress.";
pub const MSG_SEARCH_PARAMS: &str = "Informe pelo menos um parâmetro: cpf ou mac";
pub const MSG_INTERNAL: &str = "Erro interno do servidor";

#[derive(Debug, Error)]
pub enum ApiError {
  /// Caller input problem; the message goes back verbatim with a 400.
  #[error("{0}")]
  Validation(&'static str),
  /// Store failure. The cause stays in the server log.
  #[error(transparent)]
  Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
      ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL),
    };
    (
      status,
      Json(ErrorBody {
        error: message.to_string(),
      }),
    )
      .into_response()
  }
}
