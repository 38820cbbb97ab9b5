//! Shared helpers for the router tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chirp_api_rest::{build_router, AppState};
use chirp_common::AppConfig;
use chirp_infrastructure::JsonFileUserRepository;
use chirp_testing::InMemoryUserRepository;
use http_body_util::BodyExt;
use serde_json::Value;
use std::{path::Path, sync::Arc};
use tower::ServiceExt; // for oneshot

/// Router backed by an in-memory user repository
pub fn memory_app() -> (Router, InMemoryUserRepository) {
    let users = InMemoryUserRepository::new();
    let state = AppState::new(AppConfig::default(), Arc::new(users.clone()));
    (build_router(state), users)
}

/// Router backed by a JSON user file at `path`
pub fn file_app(path: &Path) -> Router {
    let mut config = AppConfig::default();
    config.storage.users_file = path.to_path_buf();
    let users = JsonFileUserRepository::new(path);
    build_router(AppState::new(config, Arc::new(users)))
}

/// Send a request and decode the JSON body (`Value::Null` when empty)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Field paths listed in a validation error body
pub fn failed_fields(body: &Value) -> Vec<String> {
    body["details"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
