//! [`InMemoryRepository`] — the in-memory implementation of [`FactRepository`].

use std::{
  collections::HashSet,
  sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use trivia_core::{Error, Fact, FactRepository, Result};

// ─── State ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct State {
  /// Live facts in insertion order.
  facts:   Vec<Fact>,
  /// IDs currently held by a live fact.
  in_use:  HashSet<i64>,
  /// Last ID handed out by [`State::next_id`]. Never decreases.
  counter: i64,
}

impl State {
  /// Advance the counter past every ID already in use.
  fn next_id(&mut self) -> i64 {
    self.counter += 1;
    while self.in_use.contains(&self.counter) {
      self.counter += 1;
    }
    self.counter
  }

  fn position(&self, id: i64) -> Option<usize> {
    self.facts.iter().position(|f| f.id == id)
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A fact store held in process memory behind a read/write lock.
///
/// Lookups, updates and deletes scan the ordered list, so each costs O(n) in
/// the number of live facts. Cloning is cheap; clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
  state: Arc<RwLock<State>>,
}

impl InMemoryRepository {
  pub fn new() -> Self { Self::default() }

  fn read(&self, op: &'static str) -> Result<RwLockReadGuard<'_, State>> {
    self.state.read().map_err(|_| Error::LockPoisoned(op))
  }

  fn write(&self, op: &'static str) -> Result<RwLockWriteGuard<'_, State>> {
    self.state.write().map_err(|_| Error::LockPoisoned(op))
  }
}

impl FactRepository for InMemoryRepository {
  async fn insert(&self, mut fact: Fact) -> Result<Fact> {
    let mut state = self.write("insert")?;

    if fact.needs_id() {
      fact.id = state.next_id();
    } else if state.in_use.contains(&fact.id) {
      return Err(Error::AlreadyExists);
    }

    state.in_use.insert(fact.id);
    state.facts.push(fact.clone());
    tracing::trace!(id = fact.id, "fact inserted");
    Ok(fact)
  }

  async fn find_all(&self) -> Result<Vec<Fact>> {
    Ok(self.read("find_all")?.facts.clone())
  }

  async fn find_by_id(&self, id: i64) -> Result<Fact> {
    let state = self.read("find_by_id")?;
    state
      .facts
      .iter()
      .find(|f| f.id == id)
      .cloned()
      .ok_or(Error::NotFound)
  }

  async fn update(&self, fact: Fact) -> Result<Fact> {
    let mut state = self.write("update")?;
    let index = state.position(fact.id).ok_or(Error::NotFound)?;
    state.facts[index] = fact.clone();
    Ok(fact)
  }

  async fn delete_by_id(&self, id: i64) -> Result<()> {
    let mut state = self.write("delete_by_id")?;
    let index = state.position(id).ok_or(Error::NotFound)?;
    // `Vec::remove` keeps the remaining facts in insertion order.
    state.facts.remove(index);
    state.in_use.remove(&id);
    tracing::trace!(id, "fact deleted");
    Ok(())
  }
}
