//! Per-handler request logging middleware.

use std::time::Instant;

use axum::{
  extract::{Request, State},
  middleware::Next,
  response::Response,
};

/// Log `operation`, method, path, elapsed time and final status of every
/// request that reaches the wrapped handler.
///
/// Attach with `axum::middleware::from_fn_with_state("operation", log_request)`.
pub async fn log_request(
  State(operation): State<&'static str>,
  req: Request,
  next: Next,
) -> Response {
  let method = req.method().clone();
  let path = req.uri().path().to_owned();
  let begin = Instant::now();

  let response = next.run(req).await;

  tracing::info!(
    operation,
    method = %method,
    path = %path,
    took = ?begin.elapsed(),
    status = response.status().as_u16(),
    "handled request"
  );
  response
}
