//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  BoxError,
  extract::rejection::BytesRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use trivia_core::Error as DomainError;
use trivia_service::ServiceError;

use crate::response::json_body;

/// An error returned by an API handler. Rendered as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("fact id must be numeric")]
  NonNumericFactId,

  #[error("invalid request body: {0}")]
  InvalidRequestBody(#[source] serde_json::Error),

  /// The body could not be read at all, e.g. it exceeded the size limit.
  #[error("invalid request body: {0}")]
  UnreadableBody(#[source] BytesRejection),

  #[error("request timed out")]
  RequestTimeout,

  /// A middleware layer failed before a handler produced a response.
  #[error("request failed: {0}")]
  Layer(#[source] BoxError),

  #[error("resource not found")]
  ResourceNotFound,

  #[error("method not allowed")]
  MethodNotAllowed,

  #[error(transparent)]
  Service(#[from] ServiceError),
}

impl ApiError {
  /// The HTTP status this error maps to.
  ///
  /// Only domain errors the service passes through unwrapped keep their
  /// specific status; every wrapped failure is a 500.
  pub fn status(&self) -> StatusCode {
    match self {
      Self::NonNumericFactId | Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
      Self::ResourceNotFound => StatusCode::NOT_FOUND,
      Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      Self::UnreadableBody(rejection) => rejection.status(),
      Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
      Self::Layer(_) => StatusCode::INTERNAL_SERVER_ERROR,
      Self::Service(ServiceError::Domain(DomainError::NotFound)) => StatusCode::NOT_FOUND,
      Self::Service(ServiceError::Domain(DomainError::AlreadyExists)) => StatusCode::CONFLICT,
      Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }
    json_body(status, json!({ "error": self.to_string() }).to_string())
  }
}
