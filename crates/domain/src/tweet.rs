//! Tweet records of the Twitter application.

use crate::{identifiers::TweetId, user::User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A tweet and its author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Tweet {
    /// Client-chosen tweet id
    pub tweet_id: TweetId,

    /// Tweet text, 1 to 256 characters
    #[validate(length(min = 1, max = 256))]
    #[schema(min_length = 1, max_length = 256, example = "Hello from Chirp!")]
    pub content: String,

    /// Defaults to the time the tweet was received
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last edit time, if any
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Author
    #[validate(nested)]
    pub by: User,
}
