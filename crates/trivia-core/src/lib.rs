//! Core types and trait definitions for the trivia fact service.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! Every other crate in the workspace depends on it.

pub mod error;
pub mod fact;
pub mod repository;

pub use error::{Error, Result};
pub use fact::{Fact, zero_time};
pub use repository::FactRepository;
