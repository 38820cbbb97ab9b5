//! Twitter application endpoints, nested under [`MOUNT_POINT`].
//!
//! Only signup and the user listing have behavior. The other endpoints
//! validate their input and answer 501 Not Implemented.

pub mod tweets;
pub mod users;

use crate::state::AppState;
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Path the Twitter application is nested under
pub const MOUNT_POINT: &str = "/twitter";

/// Liveness message of the Twitter application
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TwitterStatus {
    /// Always `"Working!"`
    #[serde(rename = "Twitter API")]
    #[schema(example = "Working!")]
    pub status: String,
}

/// Twitter routes, relative to [`MOUNT_POINT`]
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .merge(users::routes())
        .merge(tweets::routes())
}

/// Home
#[utoipa::path(
    get,
    path = "/twitter",
    operation_id = "twitter_home",
    tag = "Home",
    responses(
        (status = 200, description = "Twitter API is up", body = TwitterStatus)
    )
)]
pub async fn home() -> Json<TwitterStatus> {
    Json(TwitterStatus {
        status: "Working!".to_string(),
    })
}
