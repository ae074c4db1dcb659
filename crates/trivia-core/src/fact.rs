//! The [`Fact`] record: one trivia question and its answer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seconds between `0001-01-01T00:00:00Z` and the Unix epoch.
const ZERO_TIME_OFFSET_SECS: i64 = -62_135_596_800;

/// The "unset" timestamp, `0001-01-01T00:00:00Z`.
///
/// Facts created without an explicit `createdAt` carry this value; it is a
/// valid timestamp and serialises as such.
pub fn zero_time() -> DateTime<Utc> {
  DateTime::<Utc>::from_timestamp(ZERO_TIME_OFFSET_SECS, 0)
    .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// A trivia question/answer pair.
///
/// An `id` of `0` (or any non-positive value) means "not yet assigned"; the
/// repository allocates one on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
  pub id:         i64,
  pub question:   String,
  pub answer:     String,
  pub created_at: DateTime<Utc>,
}

impl Fact {
  /// A fact with no ID and the zero timestamp.
  pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
    Self {
      id:         0,
      question:   question.into(),
      answer:     answer.into(),
      created_at: zero_time(),
    }
  }

  /// Builder-style setter for a caller-chosen ID.
  pub fn with_id(mut self, id: i64) -> Self {
    self.id = id;
    self
  }

  /// Whether the repository should allocate an ID for this fact.
  pub fn needs_id(&self) -> bool { self.id <= 0 }
}
