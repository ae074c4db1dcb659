//! Application service for the trivia fact list.
//!
//! [`FactList`] is the business-rule layer between the HTTP transport and a
//! [`FactRepository`](trivia_core::FactRepository). [`Logging`] wraps any
//! [`FactService`] without changing its behaviour.

pub mod error;
pub mod logging;
pub mod service;

pub use error::ServiceError;
pub use logging::Logging;
pub use service::{FactList, FactService, FactServiceExt, Upsert};
