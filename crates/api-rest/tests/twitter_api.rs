//! Router tests for the Twitter application.

mod common;

use axum::http::{Method, StatusCode};
use chirp_common::verify_password;
use chirp_domain::{TweetId, UserId};
use chirp_testing::{create_test_user_register, TweetBuilder, UserRegisterBuilder};
use common::*;
use serde_json::{json, Value};
use std::sync::Arc;

fn register_json() -> Value {
    serde_json::to_value(UserRegisterBuilder::new().build()).unwrap()
}

fn read_store(path: &std::path::Path) -> Vec<Value> {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_home() {
    let (app, _) = memory_app();

    let (status, body) = send(&app, get("/twitter")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Twitter API": "Working!"}));
}

#[tokio::test]
async fn test_signup_returns_user_without_password() {
    let (app, users) = memory_app();
    let register = register_json();

    let (status, body) = send(&app, json(Method::POST, "/twitter/signup", &register)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user_id"], register["user_id"]);
    assert_eq!(body["email"], register["email"]);
    assert_eq!(body["birth_date"], "1998-07-21");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
    assert_eq!(users.user_count(), 1);
}

#[tokio::test]
async fn test_signup_appends_hashed_record_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let app = file_app(&path);
    let register = UserRegisterBuilder::new()
        .with_password("correct-horse-battery")
        .build();

    let (status, _) = send(
        &app,
        json(
            Method::POST,
            "/twitter/signup",
            &serde_json::to_value(&register).unwrap(),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let records = read_store(&path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["email"], register.email.as_str());
    assert!(records[0].get("password").is_none());

    let hash = records[0]["password_hash"].as_str().unwrap();
    assert!(verify_password("correct-horse-battery", hash).unwrap());
    assert!(!verify_password("wrong-password", hash).unwrap());
}

#[tokio::test]
async fn test_signup_keeps_previous_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let app = file_app(&path);

    for _ in 0..3 {
        let register = serde_json::to_value(create_test_user_register()).unwrap();
        let (status, _) = send(&app, json(Method::POST, "/twitter/signup", &register)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    assert_eq!(read_store(&path).len(), 3);

    let (status, body) = send(&app, get("/twitter/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert!(body[0].get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_validation_leaves_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let app = file_app(&path);

    let invalid = [
        serde_json::to_value(UserRegisterBuilder::new().with_email("nope").build()).unwrap(),
        serde_json::to_value(UserRegisterBuilder::new().with_password("short").build()).unwrap(),
        serde_json::to_value(UserRegisterBuilder::new().with_first_name("").build()).unwrap(),
    ];

    for register in &invalid {
        let (status, body) = send(&app, json(Method::POST, "/twitter/signup", register)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    let mut bad_id = register_json();
    bad_id["user_id"] = json!("not-a-uuid");
    let (status, _) = send(&app, json(Method::POST, "/twitter/signup", &bad_id)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let mut bad_date = register_json();
    bad_date["birth_date"] = json!("21/07/1998");
    let (status, _) = send(&app, json(Method::POST, "/twitter/signup", &bad_date)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert!(!path.exists());
}

#[tokio::test]
async fn test_signup_without_birth_date() {
    let (app, _) = memory_app();
    let register =
        serde_json::to_value(UserRegisterBuilder::new().without_birth_date().build()).unwrap();

    let (status, body) = send(&app, json(Method::POST, "/twitter/signup", &register)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["birth_date"], Value::Null);
}

#[tokio::test]
async fn test_signup_with_corrupt_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();
    let app = file_app(&path);

    let (status, body) = send(&app, json(Method::POST, "/twitter/signup", &register_json())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "STORAGE_ERROR");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        r#"{"not": "an array"}"#
    );
}

#[tokio::test]
async fn test_signup_with_failing_repository() {
    let users = chirp_testing::InMemoryUserRepository::failing();
    let state = chirp_api_rest::AppState::new(chirp_common::AppConfig::default(), Arc::new(users));
    let app = chirp_api_rest::build_router(state);

    let (status, body) = send(&app, json(Method::POST, "/twitter/signup", &register_json())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "STORAGE_ERROR");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_signups_lose_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let app = file_app(&path);

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..16 {
        let app = app.clone();
        tasks.spawn(async move {
            let register = serde_json::to_value(create_test_user_register()).unwrap();
            send(&app, json(Method::POST, "/twitter/signup", &register))
                .await
                .0
        });
    }
    while let Some(status) = tasks.join_next().await {
        assert_eq!(status.unwrap(), StatusCode::CREATED);
    }

    assert_eq!(read_store(&path).len(), 16);
}

#[tokio::test]
async fn test_list_users_empty() {
    let dir = tempfile::tempdir().unwrap();
    let app = file_app(&dir.path().join("users.json"));

    let (status, body) = send(&app, get("/twitter/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_user_stubs_answer_not_implemented() {
    let (app, _) = memory_app();
    let id = UserId::new();
    let user = serde_json::to_value(UserRegisterBuilder::new().build_user()).unwrap();
    let login = json!({
        "user_id": id,
        "email": "facundo@example.com",
        "password": "correct-horse",
    });

    let requests = [
        json(Method::POST, "/twitter/login", &login),
        get(&format!("/twitter/users/{id}")),
        empty(Method::DELETE, &format!("/twitter/users/{id}/delete")),
        json(Method::PUT, &format!("/twitter/users/{id}/update"), &user),
    ];

    for request in requests {
        let uri = request.uri().to_string();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED, "{uri}");
        assert_eq!(body["error"], "NOT_IMPLEMENTED");
    }
}

#[tokio::test]
async fn test_user_stubs_validate_input() {
    let (app, _) = memory_app();
    let id = UserId::new();
    let login = json!({
        "user_id": id,
        "email": "facundo@example.com",
        "password": "short",
    });
    let mut user = serde_json::to_value(UserRegisterBuilder::new().build_user()).unwrap();
    user["email"] = json!("nope");

    let requests = [
        json(Method::POST, "/twitter/login", &login),
        get("/twitter/users/not-a-uuid"),
        empty(Method::DELETE, "/twitter/users/42/delete"),
        json(Method::PUT, &format!("/twitter/users/{id}/update"), &user),
    ];

    for request in requests {
        let uri = request.uri().to_string();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
    }
}

#[tokio::test]
async fn test_tweet_stubs_answer_not_implemented() {
    let (app, _) = memory_app();
    let id = TweetId::new();
    let tweet = serde_json::to_value(TweetBuilder::new().build()).unwrap();

    let requests = [
        json(Method::POST, "/twitter/post", &tweet),
        get(&format!("/twitter/tweets/{id}")),
        empty(Method::DELETE, &format!("/twitter/tweets/{id}/delete")),
        json(Method::PUT, &format!("/twitter/tweets/{id}/update"), &tweet),
    ];

    for request in requests {
        let uri = request.uri().to_string();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED, "{uri}");
        assert_eq!(body["error"], "NOT_IMPLEMENTED");
    }
}

#[tokio::test]
async fn test_tweet_content_limits() {
    let (app, _) = memory_app();

    let at_limit =
        serde_json::to_value(TweetBuilder::new().with_content("x".repeat(256)).build()).unwrap();
    let (status, _) = send(&app, json(Method::POST, "/twitter/post", &at_limit)).await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);

    let too_long =
        serde_json::to_value(TweetBuilder::new().with_content("x".repeat(257)).build()).unwrap();
    let (status, body) = send(&app, json(Method::POST, "/twitter/post", &too_long)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(failed_fields(&body), vec!["content"]);

    let empty_content =
        serde_json::to_value(TweetBuilder::new().with_content("").build()).unwrap();
    let (status, _) = send(&app, json(Method::POST, "/twitter/post", &empty_content)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_tweet_author_is_validated() {
    let (app, _) = memory_app();
    let mut tweet = serde_json::to_value(TweetBuilder::new().build()).unwrap();
    tweet["by"]["email"] = json!("nope");

    let (status, body) = send(&app, json(Method::POST, "/twitter/post", &tweet)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(failed_fields(&body), vec!["by.email"]);
}

#[tokio::test]
async fn test_tweet_created_at_is_optional() {
    let (app, _) = memory_app();
    let mut tweet = serde_json::to_value(TweetBuilder::new().build()).unwrap();
    tweet.as_object_mut().unwrap().remove("created_at");

    let (status, _) = send(&app, json(Method::POST, "/twitter/post", &tweet)).await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let (app, _) = memory_app();
    let id = UserId::new();

    let (status, _) = send(&app, get(&format!("/twitter/users/{id}/delete"))).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
