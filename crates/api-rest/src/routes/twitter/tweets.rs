//! Tweet endpoints of the Twitter application. None have behavior yet.

use crate::{
    error::{ApiError, ApiResult, ErrorResponse},
    extractors::{ValidatedJson, ValidatedPath},
    state::AppState,
};
use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use chirp_domain::{identifiers::TweetId, tweet::Tweet};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// Tweet id taken from the path
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct TweetIdPath {
    /// Tweet UUID
    #[param(value_type = String, format = Uuid)]
    pub tweet_id: TweetId,
}

/// Tweet routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/post", post(post_tweet))
        .route("/tweets/:tweet_id", get(show_tweet))
        .route("/tweets/:tweet_id/delete", delete(delete_tweet))
        .route("/tweets/:tweet_id/update", put(update_tweet))
}

/// Post a tweet
#[utoipa::path(
    post,
    path = "/twitter/post",
    tag = "Tweets",
    request_body = Tweet,
    responses(
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn post_tweet(ValidatedJson(_tweet): ValidatedJson<Tweet>) -> ApiResult<Json<Tweet>> {
    Err(ApiError::NotImplemented("Post a tweet"))
}

/// Show a tweet
#[utoipa::path(
    get,
    path = "/twitter/tweets/{tweet_id}",
    tag = "Tweets",
    params(TweetIdPath),
    responses(
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn show_tweet(
    ValidatedPath(_path): ValidatedPath<TweetIdPath>,
) -> ApiResult<Json<Tweet>> {
    Err(ApiError::NotImplemented("Show a tweet"))
}

/// Delete a tweet
#[utoipa::path(
    delete,
    path = "/twitter/tweets/{tweet_id}/delete",
    tag = "Tweets",
    params(TweetIdPath),
    responses(
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn delete_tweet(
    ValidatedPath(_path): ValidatedPath<TweetIdPath>,
) -> ApiResult<Json<Tweet>> {
    Err(ApiError::NotImplemented("Delete a tweet"))
}

/// Update a tweet
#[utoipa::path(
    put,
    path = "/twitter/tweets/{tweet_id}/update",
    tag = "Tweets",
    params(TweetIdPath),
    request_body = Tweet,
    responses(
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 501, description = "Not implemented", body = ErrorResponse),
    )
)]
pub async fn update_tweet(
    ValidatedPath(_path): ValidatedPath<TweetIdPath>,
    ValidatedJson(_tweet): ValidatedJson<Tweet>,
) -> ApiResult<Json<Tweet>> {
    Err(ApiError::NotImplemented("Update a tweet"))
}
