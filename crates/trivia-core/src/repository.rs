//! The `FactRepository` trait.
//!
//! Implemented by storage backends (e.g. `trivia-store-memory`). The service
//! layer depends on this abstraction, not on any concrete backend.
//!
//! Cancellation follows the usual async contract: a caller that gives up on a
//! request drops the returned future. Backends that do real I/O must only
//! mutate state in ways that stay consistent if dropped at an `.await`.

use std::future::Future;

use crate::{Error, fact::Fact};

/// Storage capability set for [`Fact`] records.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait FactRepository: Send + Sync {
  /// Store `fact`, allocating an ID when [`Fact::needs_id`] is true, and
  /// return the stored copy.
  ///
  /// An explicit ID that is already in use fails with
  /// [`Error::AlreadyExists`] and leaves the store untouched.
  fn insert(
    &self,
    fact: Fact,
  ) -> impl Future<Output = Result<Fact, Error>> + Send + '_;

  /// All facts, in insertion order.
  fn find_all(&self) -> impl Future<Output = Result<Vec<Fact>, Error>> + Send + '_;

  /// The fact with `id`, or [`Error::NotFound`].
  fn find_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Fact, Error>> + Send + '_;

  /// Replace the stored fact carrying `fact.id` wholesale.
  ///
  /// Fails with [`Error::NotFound`] if no such fact exists.
  fn update(
    &self,
    fact: Fact,
  ) -> impl Future<Output = Result<Fact, Error>> + Send + '_;

  /// Remove the fact with `id`, or fail with [`Error::NotFound`].
  fn delete_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Error>> + Send + '_;
}
