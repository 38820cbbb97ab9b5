//! Application builder.
//!
//! Assembles routes, middleware and state into an Axum router.

use crate::{
    middleware::{logging_middleware, request_id_middleware},
    openapi,
    routes::{health, people, twitter},
    state::AppState,
};
use axum::{extract::DefaultBodyLimit, http::HeaderValue, middleware, Router};
use chirp_common::{AppConfig, ServerConfig};
use chirp_infrastructure::JsonFileUserRepository;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Create the main application router backed by the JSON-file user store
pub async fn create_app(config: AppConfig) -> anyhow::Result<Router> {
    config.validate()?;

    let users = JsonFileUserRepository::new(&config.storage.users_file);
    info!(path = %users.path().display(), "Using JSON user store");

    let state = AppState::new(config, Arc::new(users));

    Ok(build_router(state))
}

/// Build the router for an already assembled state
pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);

    let mut app = Router::new()
        .merge(health::routes())
        .merge(people::routes())
        .nest(twitter::MOUNT_POINT, twitter::routes())
        .with_state(state);

    if config.server.enable_swagger {
        app = app.merge(openapi::swagger_ui());
    }

    app.layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(build_cors_layer(&config.server))
                .layer(TimeoutLayer::new(config.request_timeout()))
                .layer(middleware::from_fn(request_id_middleware))
                .layer(middleware::from_fn(logging_middleware)),
        )
}

/// Build CORS layer from configuration
fn build_cors_layer(server: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if server.cors_allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}
