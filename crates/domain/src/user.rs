//! Account records of the Twitter application.

use crate::identifiers::UserId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Credentials sent to the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserLogin {
    /// Client-chosen account id
    pub user_id: UserId,

    /// Account email address
    #[validate(email)]
    #[schema(example = "facundo@example.com")]
    pub email: String,

    /// Plaintext password, 8 to 64 characters
    #[validate(length(min = 8, max = 64))]
    #[schema(min_length = 8, max_length = 64, format = Password)]
    pub password: String,
}

/// Public view of a user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct User {
    /// Client-chosen account id
    pub user_id: UserId,

    /// Account email address
    #[validate(email)]
    #[schema(example = "facundo@example.com")]
    pub email: String,

    /// Given name, 1 to 50 characters
    #[validate(length(min = 1, max = 50))]
    #[schema(min_length = 1, max_length = 50, example = "Facundo")]
    pub first_name: String,

    /// Family name, 1 to 50 characters
    #[validate(length(min = 1, max = 50))]
    #[schema(min_length = 1, max_length = 50, example = "García Martoni")]
    pub last_name: String,

    /// Birth date as `YYYY-MM-DD`
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "1998-07-21")]
    pub birth_date: Option<NaiveDate>,
}

/// Signup payload: a user plus the password they chose
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserRegister {
    /// Client-chosen account id
    pub user_id: UserId,

    /// Account email address
    #[validate(email)]
    #[schema(example = "facundo@example.com")]
    pub email: String,

    /// Given name, 1 to 50 characters
    #[validate(length(min = 1, max = 50))]
    #[schema(min_length = 1, max_length = 50, example = "Facundo")]
    pub first_name: String,

    /// Family name, 1 to 50 characters
    #[validate(length(min = 1, max = 50))]
    #[schema(min_length = 1, max_length = 50, example = "García Martoni")]
    pub last_name: String,

    /// Birth date as `YYYY-MM-DD`
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "1998-07-21")]
    pub birth_date: Option<NaiveDate>,

    /// Plaintext password, 8 to 64 characters
    #[validate(length(min = 8, max = 64))]
    #[schema(min_length = 8, max_length = 64, format = Password)]
    pub password: String,
}

impl UserRegister {
    /// Split the payload into the public user and the plaintext password
    pub fn into_parts(self) -> (User, String) {
        let user = User {
            user_id: self.user_id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
        };
        (user, self.password)
    }
}

/// User record as persisted by the user store.
///
/// Holds a password hash, never the plaintext password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    /// Public account fields
    #[serde(flatten)]
    pub user: User,
    /// Argon2 PHC string
    pub password_hash: String,
}

impl StoredUser {
    /// Pair a user with its password hash
    pub fn new(user: User, password_hash: impl Into<String>) -> Self {
        Self {
            user,
            password_hash: password_hash.into(),
        }
    }
}

impl From<StoredUser> for User {
    fn from(stored: StoredUser) -> Self {
        stored.user
    }
}
