//! Error type for `trivia-service`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
  /// A repository outcome passed through untouched so the transport can map
  /// it. Only [`FactService::remove`](crate::FactService::remove) produces
  /// this, and only for `NotFound`.
  #[error(transparent)]
  Domain(trivia_core::Error),

  /// Any other repository failure, with the operation that hit it.
  #[error("could not {action}: {source}")]
  Failed {
    action: &'static str,
    source: trivia_core::Error,
  },
}

impl ServiceError {
  pub(crate) fn failed(action: &'static str) -> impl FnOnce(trivia_core::Error) -> Self {
    move |source| Self::Failed { action, source }
  }
}
