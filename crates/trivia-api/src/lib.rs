//! JSON REST API for the trivia fact list.
//!
//! Exposes an axum [`Router`] backed by any [`trivia_service::FactService`].
//! Listening, timeouts and shutdown are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = trivia_api::fact_router(Arc::new(service), "factlist/v1");
//! ```

pub mod error;
pub mod facts;
pub mod logging;
mod response;

use std::sync::Arc;

use axum::{
  Router,
  handler::Handler,
  middleware::from_fn_with_state,
  routing::{delete, post},
};
use trivia_service::FactService;

pub use error::ApiError;
pub use response::CONTENT_TYPE_JSON;

use logging::log_request;

/// Build the fact API router for `service`, mounted under `/{prefix}`.
///
/// Surrounding slashes on `prefix` are ignored; an empty prefix mounts the
/// routes at `/fact`. Every handler is wrapped in its own request-logging
/// layer. Unknown paths answer 404 and unsupported methods 405, both with a
/// JSON error body.
pub fn fact_router<S>(service: Arc<S>, prefix: &str) -> Router<()>
where
  S: FactService + 'static,
{
  let routes = Router::new()
    .route(
      "/fact",
      post(facts::create::<S>.layer(from_fn_with_state("create_fact", log_request)))
        .get(facts::list::<S>.layer(from_fn_with_state("list_facts", log_request)))
        .fallback(facts::method_not_allowed),
    )
    .route(
      "/fact/{id}",
      delete(facts::remove::<S>.layer(from_fn_with_state("remove_fact", log_request)))
        .put(facts::update::<S>.layer(from_fn_with_state("update_fact", log_request)))
        .fallback(facts::method_not_allowed),
    )
    .with_state(service);

  let prefix = prefix.trim_matches('/');
  let router = if prefix.is_empty() {
    routes
  } else {
    Router::new().nest(&format!("/{prefix}"), routes)
  };
  router.fallback(facts::not_found)
}

// ─── Integration tests ────────────────────────────────────────────────────────
