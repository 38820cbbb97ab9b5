//! Request ID middleware.

use axum::{
    body::Body,
    http::{HeaderValue, Request, Response},
    middleware::Next,
};
use uuid::Uuid;

/// Header carrying the request ID in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Middleware function to add request ID
pub async fn request_id_middleware(mut req: Request<Body>, next: Next) -> Response<Body> {
    // Reuse the caller's ID when it is a valid header value
    let header = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .filter(|v| v.to_str().map(|s| !s.is_empty()).unwrap_or(false))
        .cloned();

    let value = match header {
        Some(value) => value,
        None => match HeaderValue::from_str(&Uuid::new_v4().to_string()) {
            Ok(value) => value,
            Err(_) => return next.run(req).await,
        },
    };

    let request_id = RequestId(value.to_str().unwrap_or_default().to_string());
    req.extensions_mut().insert(request_id);

    let mut response = next.run(req).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, value);

    response
}
