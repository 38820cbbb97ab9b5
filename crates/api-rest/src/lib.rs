//! Chirp REST API
//!
//! Axum application serving the people endpoints at `/` and the Twitter
//! endpoints under `/twitter`, with validated extractors, a JSON-file user
//! store and generated OpenAPI documentation.
//!
//! ## Architecture
//!
//! - **app**: Router assembly and middleware stack
//! - **routes**: HTTP route handlers organized by application
//! - **middleware**: Request id and request logging
//! - **extractors**: Validating JSON, query, path and form extractors
//! - **responses**: Status-carrying response wrappers
//! - **error**: HTTP error handling and conversion
//! - **openapi**: Generated API documentation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chirp_api_rest::create_app;
//! use chirp_common::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::load()?;
//!     let address = config.server_address();
//!     let app = create_app(config).await?;
//!
//!     let listener = tokio::net::TcpListener::bind(address).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use app::{build_router, create_app};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
