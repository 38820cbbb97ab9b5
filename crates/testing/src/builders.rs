//! Fluent builder pattern for constructing test data.
//!
//! Builders start from a valid record with fixed values so a test only
//! spells out the field it is about.

use chirp_domain::{
    identifiers::{TweetId, UserId},
    person::{HairColor, Person},
    tweet::Tweet,
    user::{User, UserRegister},
};
use chrono::{NaiveDate, Utc};

/// Builder for creating Person test instances
#[derive(Clone)]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self {
            person: Person {
                first_name: "Facundo".to_string(),
                last_name: "García Martoni".to_string(),
                age: 25,
                hair_color: Some(HairColor::Black),
                is_married: Some(false),
                password: "correct-horse".to_string(),
            },
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.person.first_name = first_name.into();
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.person.last_name = last_name.into();
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.person.age = age;
        self
    }

    pub fn with_hair_color(mut self, hair_color: Option<HairColor>) -> Self {
        self.person.hair_color = hair_color;
        self
    }

    pub fn married(mut self, is_married: bool) -> Self {
        self.person.is_married = Some(is_married);
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.person.password = password.into();
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating signup payloads
#[derive(Clone)]
pub struct UserRegisterBuilder {
    register: UserRegister,
}

impl UserRegisterBuilder {
    pub fn new() -> Self {
        Self {
            register: UserRegister {
                user_id: UserId::new(),
                email: "facundo@example.com".to_string(),
                first_name: "Facundo".to_string(),
                last_name: "García".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1998, 7, 21),
                password: "correct-horse".to_string(),
            },
        }
    }

    pub fn with_id(mut self, user_id: UserId) -> Self {
        self.register.user_id = user_id;
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.register.email = email.into();
        self
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.register.first_name = first_name.into();
        self
    }

    pub fn without_birth_date(mut self) -> Self {
        self.register.birth_date = None;
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.register.password = password.into();
        self
    }

    pub fn build(self) -> UserRegister {
        self.register
    }

    /// The public user this payload signs up
    pub fn build_user(self) -> User {
        self.register.into_parts().0
    }
}

impl Default for UserRegisterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating Tweet test instances
#[derive(Clone)]
pub struct TweetBuilder {
    tweet: Tweet,
}

impl TweetBuilder {
    pub fn new() -> Self {
        Self {
            tweet: Tweet {
                tweet_id: TweetId::new(),
                content: "Hello from Chirp!".to_string(),
                created_at: Utc::now(),
                updated_at: None,
                by: UserRegisterBuilder::new().build_user(),
            },
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.tweet.content = content.into();
        self
    }

    pub fn by(mut self, author: User) -> Self {
        self.tweet.by = author;
        self
    }

    pub fn build(self) -> Tweet {
        self.tweet
    }
}

impl Default for TweetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
