//! User endpoints of the Twitter application.

use crate::{
    error::{ApiError, ApiResult, ErrorResponse},
    extractors::{ValidatedJson, ValidatedPath},
    responses::Created,
    state::AppState,
};
use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Json, Router,
};
use chirp_common::hash_password;
use chirp_domain::{
    identifiers::UserId,
    user::{StoredUser, User, UserLogin, UserRegister},
};
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;
use validator::Validate;

/// User id taken from the path
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct UserIdPath {
    /// User UUID
    #[param(value_type = String, format = Uuid)]
    pub user_id: UserId,
}

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/users", get(list_users))
        .route("/users/:user_id", get(show_user))
        .route("/users/:user_id/delete", delete(delete_user))
        .route("/users/:user_id/update", put(update_user))
}

/// Register a user
///
/// Appends the user to the user store. The password is stored as an
/// Argon2 hash and never returned.
#[utoipa::path(
    post,
    path = "/twitter/signup",
    tag = "Users",
    request_body = UserRegister,
    responses(
        (status = 201, description = "User registered", body = User),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "User store failure", body = ErrorResponse),
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(register): ValidatedJson<UserRegister>,
) -> ApiResult<Created<User>> {
    let (user, password) = register.into_parts();

    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::Internal(format!("Hashing task failed: {e}")))?
        .map_err(|e| ApiError::Internal(format!("{e:#}")))?;

    state
        .users
        .append(&StoredUser::new(user.clone(), password_hash))
        .await?;

    info!(user_id = %user.user_id, "User signed up");

    Ok(Created(user))
}

/// List registered users
#[utoipa::path(
    get,
    path = "/twitter/users",
    tag = "Users",
    responses(
        (status = 200, description = "Registered users", body = [User]),
        (status = 500, description = "User store failure", body = ErrorResponse),
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(Json(users.into_iter().map(User::from).collect()))
}

/// Log in a user
#[utoipa::path(
    post,
    path = "/twitter/login",
    operation_id = "twitter_login",
    tag = "Users",
    request_body = UserLogin,
    responses(
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn login(ValidatedJson(_login): ValidatedJson<UserLogin>) -> ApiResult<Json<User>> {
    Err(ApiError::NotImplemented("Login"))
}

/// Show a user
#[utoipa::path(
    get,
    path = "/twitter/users/{user_id}",
    tag = "Users",
    params(UserIdPath),
    responses(
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn show_user(ValidatedPath(_path): ValidatedPath<UserIdPath>) -> ApiResult<Json<User>> {
    Err(ApiError::NotImplemented("Show a user"))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/twitter/users/{user_id}/delete",
    tag = "Users",
    params(UserIdPath),
    responses(
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn delete_user(
    ValidatedPath(_path): ValidatedPath<UserIdPath>,
) -> ApiResult<Json<User>> {
    Err(ApiError::NotImplemented("Delete a user"))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/twitter/users/{user_id}/update",
    tag = "Users",
    params(UserIdPath),
    request_body = User,
    responses(
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn update_user(
    ValidatedPath(_path): ValidatedPath<UserIdPath>,
    ValidatedJson(_user): ValidatedJson<User>,
) -> ApiResult<Json<User>> {
    Err(ApiError::NotImplemented("Update a user"))
}
