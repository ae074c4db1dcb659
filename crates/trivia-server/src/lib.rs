//! Process wiring for the trivia fact server: configuration and the
//! fully-layered application router.

use std::{path::Path, sync::Arc, time::Duration};

use axum::{BoxError, Router, error_handling::HandleErrorLayer};
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;
use tower::{
  ServiceBuilder,
  timeout::{TimeoutLayer, error::Elapsed},
};
use trivia_api::ApiError;
use trivia_service::{FactList, FactServiceExt};
use trivia_store_memory::InMemoryRepository;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Sources, lowest precedence first: built-in defaults, the optional TOML file,
/// then `TRIVIA_*` environment variables (e.g. `TRIVIA_SERVER_ADDRESS`).
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub server_address:         String,
  /// Path segment(s) the `/fact` routes are mounted under.
  pub route_prefix:           String,
  pub request_timeout_secs:   u64,
  /// How long in-flight requests may drain after a shutdown signal.
  pub graceful_shutdown_secs: u64,
}

impl ServerConfig {
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    defaults()?
      .add_source(File::from(path).required(false))
      .add_source(Environment::with_prefix("TRIVIA"))
      .build()?
      .try_deserialize()
  }

  pub fn request_timeout(&self) -> Duration { Duration::from_secs(self.request_timeout_secs) }

  pub fn graceful_shutdown(&self) -> Duration { Duration::from_secs(self.graceful_shutdown_secs) }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
  Config::builder()
    .set_default("server_address", "localhost:8082")?
    .set_default("route_prefix", "factlist/v1")?
    .set_default("request_timeout_secs", 15)?
    .set_default("graceful_shutdown_secs", 30)
}

// ─── Application ──────────────────────────────────────────────────────────────

/// Build the served router: an empty in-memory store behind the logged fact
/// service, with a per-request timeout.
pub fn app(config: &ServerConfig) -> Router {
  let service = FactList::new(InMemoryRepository::new())
    .logged(tracing::info_span!("fact_service"));

  with_request_timeout(
    trivia_api::fact_router(Arc::new(service), &config.route_prefix),
    config.request_timeout(),
  )
}

/// Fail requests that run longer than `timeout` with a JSON `408`.
pub fn with_request_timeout(router: Router, timeout: Duration) -> Router {
  router.layer(
    ServiceBuilder::new()
      .layer(HandleErrorLayer::new(handle_layer_error))
      .layer(TimeoutLayer::new(timeout)),
  )
}

async fn handle_layer_error(err: BoxError) -> ApiError {
  if err.is::<Elapsed>() {
    ApiError::RequestTimeout
  } else {
    ApiError::Layer(err)
  }
}
