//! The [`FactService`] contract and its repository-backed implementation.

use std::future::Future;

use tracing::Span;
use trivia_core::{Error, Fact, FactRepository};

use crate::{Logging, ServiceError};

// ─── Outcome ─────────────────────────────────────────────────────────────────

/// Result of [`FactService::update`]: which branch of the upsert ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upsert {
  /// An existing fact was replaced.
  Updated(Fact),
  /// No fact had the ID, so one was created with it.
  Created(Fact),
}

impl Upsert {
  pub fn was_created(&self) -> bool { matches!(self, Self::Created(_)) }

  pub fn fact(&self) -> &Fact {
    match self {
      Self::Updated(f) | Self::Created(f) => f,
    }
  }

  pub fn into_fact(self) -> Fact {
    match self {
      Self::Updated(f) | Self::Created(f) => f,
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Operations on the fact list exposed to the transport layer.
pub trait FactService: Send + Sync {
  /// Store a new fact and return it with its assigned ID.
  fn save(
    &self,
    fact: Fact,
  ) -> impl Future<Output = Result<Fact, ServiceError>> + Send + '_;

  /// All facts, in insertion order.
  fn list(&self) -> impl Future<Output = Result<Vec<Fact>, ServiceError>> + Send + '_;

  /// Replace the fact carrying `fact.id`, or create it under that ID.
  fn update(
    &self,
    fact: Fact,
  ) -> impl Future<Output = Result<Upsert, ServiceError>> + Send + '_;

  /// Delete the fact with `id`.
  ///
  /// A missing fact yields `ServiceError::Domain(Error::NotFound)`.
  fn remove(&self, id: i64) -> impl Future<Output = Result<(), ServiceError>> + Send + '_;
}

/// Combinators for stacking decorators around a [`FactService`].
pub trait FactServiceExt: FactService + Sized {
  /// Wrap `self` in a [`Logging`] decorator that reports under `span`.
  fn logged(self, span: Span) -> Logging<Self> { Logging::new(self, span) }
}

impl<S: FactService> FactServiceExt for S {}

// ─── Implementation ──────────────────────────────────────────────────────────

/// The repository-backed [`FactService`].
#[derive(Debug, Clone)]
pub struct FactList<R> {
  repository: R,
}

impl<R: FactRepository> FactList<R> {
  pub fn new(repository: R) -> Self { Self { repository } }
}

impl<R: FactRepository> FactService for FactList<R> {
  async fn save(&self, fact: Fact) -> Result<Fact, ServiceError> {
    self
      .repository
      .insert(fact)
      .await
      .map_err(ServiceError::failed("save fact"))
  }

  async fn list(&self) -> Result<Vec<Fact>, ServiceError> {
    self
      .repository
      .find_all()
      .await
      .map_err(ServiceError::failed("list all facts"))
  }

  // The update and the fallback insert take the repository lock separately,
  // so a concurrent writer can claim the ID in between. The insert then fails
  // with `AlreadyExists`, which surfaces here as a hard error.
  async fn update(&self, fact: Fact) -> Result<Upsert, ServiceError> {
    match self.repository.update(fact.clone()).await {
      Ok(updated) => Ok(Upsert::Updated(updated)),
      Err(Error::NotFound) => self
        .repository
        .insert(fact)
        .await
        .map(Upsert::Created)
        .map_err(ServiceError::failed("create fact")),
      Err(e) => Err(ServiceError::failed("update fact")(e)),
    }
  }

  async fn remove(&self, id: i64) -> Result<(), ServiceError> {
    match self.repository.delete_by_id(id).await {
      Ok(()) => Ok(()),
      Err(Error::NotFound) => Err(ServiceError::Domain(Error::NotFound)),
      Err(e) => Err(ServiceError::failed("remove fact")(e)),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
