//! Common utilities and shared functionality for the Chirp API.
//!
//! This crate provides foundational utilities used across the workspace:
//! - Configuration management
//! - Telemetry (structured logging)
//! - Password hashing

pub mod config;
pub mod crypto;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AppConfig, ServerConfig, StorageConfig, TelemetryConfig};
pub use crypto::{hash_password, verify_password};
pub use telemetry::init_tracing;

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
