//! Handlers for `/fact` endpoints.
//!
//! | Method   | Path        | Notes |
//! |----------|-------------|-------|
//! | `POST`   | `/fact`     | Body: [`CreateFactBody`]; returns 200 + stored fact |
//! | `GET`    | `/fact`     | All facts, `[]` when empty |
//! | `DELETE` | `/fact/:id` | 204, empty body |
//! | `PUT`    | `/fact/:id` | Body: [`UpdateFactBody`]; 201 if created, else 200 |
//!
//! Bodies are decoded from the raw bytes, so no `Content-Type` is required.

use std::sync::Arc;

use axum::{
  extract::{
    Path, State,
    rejection::{BytesRejection, PathRejection},
  },
  http::StatusCode,
  response::Response,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, de::DeserializeOwned};
use trivia_core::{Fact, zero_time};
use trivia_service::FactService;

use crate::{error::ApiError, response::json_response};

// Extractor rejections arrive as `Result`s and are mapped onto `ApiError`.

fn decode<T: DeserializeOwned>(body: Result<Bytes, BytesRejection>) -> Result<T, ApiError> {
  let body = body.map_err(ApiError::UnreadableBody)?;
  serde_json::from_slice(&body).map_err(ApiError::InvalidRequestBody)
}

fn parse_id(raw: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
  let Path(raw) = raw.map_err(|_| ApiError::NonNumericFactId)?;
  raw.parse().map_err(|_| ApiError::NonNumericFactId)
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /fact`.
#[derive(Debug, Deserialize)]
pub struct CreateFactBody {
  pub question: String,
  pub answer:   String,
}

/// `POST /fact`
pub async fn create<S: FactService>(
  State(service): State<Arc<S>>,
  body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
  let body: CreateFactBody = decode(body)?;
  let fact = service.save(Fact::new(body.question, body.answer)).await?;
  Ok(json_response(StatusCode::OK, &fact))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /fact`
pub async fn list<S: FactService>(
  State(service): State<Arc<S>>,
) -> Result<Response, ApiError> {
  let facts = service.list().await?;
  Ok(json_response(StatusCode::OK, &facts))
}

// ─── Remove ───────────────────────────────────────────────────────────────────

/// `DELETE /fact/:id`
pub async fn remove<S: FactService>(
  State(service): State<Arc<S>>,
  id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
  service.remove(parse_id(id)?).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Update or create ─────────────────────────────────────────────────────────

/// JSON body accepted by `PUT /fact/:id`. Any `id` in the body is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFactBody {
  pub question:   String,
  pub answer:     String,
  #[serde(default = "zero_time")]
  pub created_at: DateTime<Utc>,
}

/// `PUT /fact/:id` — replaces the fact, or creates it under the path ID.
pub async fn update<S: FactService>(
  State(service): State<Arc<S>>,
  id: Result<Path<String>, PathRejection>,
  body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
  let id = parse_id(id)?;
  let body: UpdateFactBody = decode(body)?;

  let outcome = service
    .update(Fact {
      id,
      question: body.question,
      answer: body.answer,
      created_at: body.created_at,
    })
    .await?;

  let status = if outcome.was_created() { StatusCode::CREATED } else { StatusCode::OK };
  Ok(json_response(status, outcome.fact()))
}

// ─── Fallbacks ────────────────────────────────────────────────────────────────

pub async fn method_not_allowed() -> ApiError { ApiError::MethodNotAllowed }

pub async fn not_found() -> ApiError { ApiError::ResourceNotFound }
