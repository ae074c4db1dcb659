//! Error types for `trivia-core`.

use thiserror::Error;

/// Failures a [`FactRepository`](crate::FactRepository) may report.
///
/// `NotFound` and `AlreadyExists` are the domain outcomes callers match on;
/// the remaining variants describe the backend itself failing.
#[derive(Debug, Error)]
pub enum Error {
  #[error("fact not found")]
  NotFound,

  #[error("fact already exists")]
  AlreadyExists,

  /// A writer panicked while holding the store lock.
  #[error("storage lock poisoned during {0}")]
  LockPoisoned(&'static str),

  #[error("storage backend error: {0}")]
  Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
