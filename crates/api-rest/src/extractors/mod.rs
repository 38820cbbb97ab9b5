//! Custom Axum extractors.
//!
//! Each extractor deserializes its input with the matching Axum extractor,
//! runs the `validator` constraints, and turns any failure into an
//! [`ApiError`](crate::error::ApiError).

pub mod validated_form;
pub mod validated_json;
pub mod validated_path;
pub mod validated_query;

pub use validated_form::ValidatedForm;
pub use validated_json::ValidatedJson;
pub use validated_path::ValidatedPath;
pub use validated_query::ValidatedQuery;
