//! In-process backend for the trivia fact store.
//!
//! State lives for the lifetime of the process only; nothing is persisted.

mod store;

pub use store::InMemoryRepository;
