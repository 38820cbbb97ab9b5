//! Test fixtures for generating domain entities with realistic data.

use chirp_domain::{
    identifiers::{TweetId, UserId},
    person::{HairColor, Location, Person},
    tweet::Tweet,
    user::{StoredUser, UserRegister},
};
use chrono::{NaiveDate, Utc};
use fake::{
    faker::{
        address::en::{CityName, CountryName, StateName},
        internet::en::{Password, SafeEmail},
        lorem::en::Sentence,
        name::en::{FirstName, LastName},
    },
    Fake,
};

const HAIR_COLORS: [HairColor; 5] = [
    HairColor::White,
    HairColor::Brown,
    HairColor::Black,
    HairColor::Blonde,
    HairColor::Red,
];

/// Create a valid person with generated values
pub fn create_test_person() -> Person {
    Person {
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        age: (1..=115).fake(),
        hair_color: Some(HAIR_COLORS[(0..HAIR_COLORS.len()).fake::<usize>()]),
        is_married: Some((0..2).fake::<u8>() == 1),
        password: Password(8..32).fake(),
    }
}

/// Create a location with generated values
pub fn create_test_location() -> Location {
    Location {
        city: CityName().fake(),
        state: StateName().fake(),
        country: CountryName().fake(),
    }
}

/// Create a valid signup payload with generated values
pub fn create_test_user_register() -> UserRegister {
    UserRegister {
        user_id: UserId::new(),
        email: SafeEmail().fake(),
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        birth_date: NaiveDate::from_ymd_opt((1950..2010).fake(), (1..=12).fake(), (1..=28).fake()),
        password: Password(8..64).fake(),
    }
}

/// Create a stored user with a placeholder hash
pub fn create_test_stored_user() -> StoredUser {
    let (user, _) = create_test_user_register().into_parts();
    StoredUser::new(user, "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA")
}

/// Create a valid tweet with generated values
pub fn create_test_tweet() -> Tweet {
    let (author, _) = create_test_user_register().into_parts();
    Tweet {
        tweet_id: TweetId::new(),
        content: Sentence(3..12).fake(),
        created_at: Utc::now(),
        updated_at: None,
        by: author,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_fixtures_are_valid() {
        for _ in 0..20 {
            assert!(create_test_person().validate().is_ok());
            assert!(create_test_user_register().validate().is_ok());
            assert!(create_test_tweet().validate().is_ok());
        }
    }
}
