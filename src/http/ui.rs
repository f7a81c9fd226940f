//! Dashboard page and script, compiled into the binary.

use axum::{
  http::header,
  response::{Html, IntoResponse},
};

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const DASHBOARD_JS: &str = include_str!("../../assets/dashboard.js");

pub async fn ui_index() -> Html<&'static str> {
  Html(INDEX_HTML)
}

pub async fn ui_script() -> impl IntoResponse {
  (
    [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
    DASHBOARD_JS,
  )
}
