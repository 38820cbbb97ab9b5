//! Repository implementations for data persistence.
//!
//! This module provides file-backed implementations of the repository
//! traits used by the HTTP layer.

mod user_repository;

pub use user_repository::*;
