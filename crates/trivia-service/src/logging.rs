//! [`Logging`] — a [`FactService`] decorator that records every call.

use std::time::Instant;

use tracing::{Span, field};
use trivia_core::Fact;

use crate::{FactService, ServiceError, Upsert};

/// Emits one `info` event per call, parented to the injected span, then
/// returns the wrapped service's result untouched.
///
/// Decorators nest: `inner.logged(a).logged(b)` reports under `a` first, then
/// `b` around it.
#[derive(Debug, Clone)]
pub struct Logging<S> {
  inner: S,
  span:  Span,
}

impl<S: FactService> Logging<S> {
  pub fn new(inner: S, span: Span) -> Self { Self { inner, span } }

  pub fn inner(&self) -> &S { &self.inner }
}

impl<S: FactService> FactService for Logging<S> {
  async fn save(&self, fact: Fact) -> Result<Fact, ServiceError> {
    let question = fact.question.clone();
    let begin = Instant::now();
    let result = self.inner.save(fact).await;
    tracing::info!(
      parent: &self.span,
      method = "save",
      question = %question,
      took = ?begin.elapsed(),
      err = result.as_ref().err().map(field::display),
      "fact service call"
    );
    result
  }

  async fn list(&self) -> Result<Vec<Fact>, ServiceError> {
    let begin = Instant::now();
    let result = self.inner.list().await;
    tracing::info!(
      parent: &self.span,
      method = "list",
      took = ?begin.elapsed(),
      err = result.as_ref().err().map(field::display),
      "fact service call"
    );
    result
  }

  async fn update(&self, fact: Fact) -> Result<Upsert, ServiceError> {
    let (id, question) = (fact.id, fact.question.clone());
    let begin = Instant::now();
    let result = self.inner.update(fact).await;
    tracing::info!(
      parent: &self.span,
      method = "update",
      id,
      question = %question,
      created = result.as_ref().ok().map(Upsert::was_created),
      took = ?begin.elapsed(),
      err = result.as_ref().err().map(field::display),
      "fact service call"
    );
    result
  }

  async fn remove(&self, id: i64) -> Result<(), ServiceError> {
    let begin = Instant::now();
    let result = self.inner.remove(id).await;
    tracing::info!(
      parent: &self.span,
      method = "remove",
      id,
      took = ?begin.elapsed(),
      err = result.as_ref().err().map(field::display),
      "fact service call"
    );
    result
  }
}
