//! Infrastructure layer for Chirp
//!
//! This crate provides implementations for:
//! - A JSON document store that replaces its file atomically
//! - The user repository backing the signup endpoint
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chirp_infrastructure::{JsonFileUserRepository, UserRepository};
//!
//! # async fn run() -> chirp_infrastructure::Result<()> {
//! let repo = JsonFileUserRepository::new("users.json");
//! let users = repo.list().await?;
//! println!("{} users signed up", users.len());
//! # Ok(())
//! # }
//! ```

pub mod repositories;
pub mod storage;

use std::path::PathBuf;

// Re-export commonly used types
pub use repositories::{JsonFileUserRepository, UserRepository};
pub use storage::JsonArrayFile;

// Re-export result and error types
pub type Result<T> = std::result::Result<T, Error>;

/// Infrastructure-level errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem errors
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The document on disk is not what the store expects
    #[error("Corrupt document {}: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
