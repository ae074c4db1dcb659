//! JSON response bodies with an explicit UTF-8 content type.

use axum::{
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Serialise `value` as the response body with `status`.
pub(crate) fn json_response<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Response {
  match serde_json::to_string(value) {
    Ok(body) => json_body(status, body),
    Err(e) => {
      tracing::error!(error = %e, "failed to encode response body");
      json_body(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": e.to_string() }).to_string(),
      )
    }
  }
}

pub(crate) fn json_body(status: StatusCode, body: String) -> Response {
  (status, [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)], body).into_response()
}
