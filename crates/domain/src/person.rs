//! Person records of the people application.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Person IDs that the detail endpoint knows about.
pub const REGISTERED_PERSON_IDS: [i64; 5] = [1, 2, 3, 4, 5];

/// Whether `person_id` is one of the [`REGISTERED_PERSON_IDS`].
pub fn is_registered(person_id: i64) -> bool {
    REGISTERED_PERSON_IDS.contains(&person_id)
}

/// Hair colors a person may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    /// White or gray hair
    White,
    /// Brown hair
    Brown,
    /// Black hair
    Black,
    /// Blonde hair
    Blonde,
    /// Red hair
    Red,
}

impl HairColor {
    /// Wire name of the color
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Brown => "brown",
            Self::Black => "black",
            Self::Blonde => "blonde",
            Self::Red => "red",
        }
    }
}

/// Where a person lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Location {
    /// City name
    #[schema(example = "Bogotá")]
    pub city: String,
    /// State or province
    #[schema(example = "Cundinamarca")]
    pub state: String,
    /// Country name
    #[schema(example = "Colombia")]
    pub country: String,
}

/// Person as received from clients, including the password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Person {
    /// Given name, 1 to 50 characters
    #[validate(length(min = 1, max = 50))]
    #[schema(min_length = 1, max_length = 50, example = "Facundo")]
    pub first_name: String,

    /// Family name, 1 to 50 characters
    #[validate(length(min = 1, max = 50))]
    #[schema(min_length = 1, max_length = 50, example = "García Martoni")]
    pub last_name: String,

    /// Age in years, greater than 0 and at most 115
    #[validate(range(exclusive_min = 0, max = 115))]
    #[schema(exclusive_minimum = 0, maximum = 115, example = 25)]
    pub age: i32,

    /// Hair color, if declared
    #[serde(default)]
    #[schema(example = "black")]
    pub hair_color: Option<HairColor>,

    /// Marital status, if declared
    #[serde(default)]
    #[schema(example = false)]
    pub is_married: Option<bool>,

    /// Plaintext password, at least 8 characters
    #[validate(length(min = 8))]
    #[schema(min_length = 8, format = Password)]
    pub password: String,
}

/// Person as returned to clients. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonOut {
    /// Given name, 1 to 50 characters
    #[schema(example = "Facundo")]
    pub first_name: String,
    /// Family name, 1 to 50 characters
    #[schema(example = "García Martoni")]
    pub last_name: String,
    /// Age in years, greater than 0 and at most 115
    #[schema(example = 25)]
    pub age: i32,
    /// Hair color, if declared
    pub hair_color: Option<HairColor>,
    /// Marital status, if declared
    pub is_married: Option<bool>,
}

impl From<Person> for PersonOut {
    fn from(person: Person) -> Self {
        Self {
            first_name: person.first_name,
            last_name: person.last_name,
            age: person.age,
            hair_color: person.hair_color,
            is_married: person.is_married,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn person() -> Person {
        Person {
            first_name: "Facundo".to_string(),
            last_name: "García Martoni".to_string(),
            age: 25,
            hair_color: Some(HairColor::Black),
            is_married: Some(false),
            password: "12345678".to_string(),
        }
    }

    #[test]
    fn test_valid_person() {
        assert!(person().validate().is_ok());
    }

    #[test]
    fn test_age_bounds() {
        let mut p = person();
        p.age = 0;
        assert!(p.validate().is_err());
        p.age = 1;
        assert!(p.validate().is_ok());
        p.age = 115;
        assert!(p.validate().is_ok());
        p.age = 116;
        let errors = p.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("age"));
    }

    #[test]
    fn test_name_length_counts_characters() {
        let mut p = person();
        // 50 two-byte characters are still 50 characters
        p.last_name = "í".repeat(50);
        assert!(p.validate().is_ok());
        p.first_name = String::new();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut p = person();
        p.password = "1234567".to_string();
        let errors = p.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_hair_color_wire_format() {
        let json = serde_json::to_string(&HairColor::Blonde).unwrap();
        assert_eq!(json, "\"blonde\"");
        assert_eq!(HairColor::Blonde.as_str(), "blonde");
        assert!(serde_json::from_str::<HairColor>("\"green\"").is_err());
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let p: Person = serde_json::from_str(
            r#"{"first_name":"Ana","last_name":"Díaz","age":30,"password":"abcdefgh"}"#,
        )
        .unwrap();
        assert_eq!(p.hair_color, None);
        assert_eq!(p.is_married, None);
    }

    #[test]
    fn test_person_out_drops_password() {
        let out = PersonOut::from(person());
        let json = serde_json::to_value(&out).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["first_name"], "Facundo");
    }

    #[test]
    fn test_registered_ids() {
        assert!(is_registered(1));
        assert!(is_registered(5));
        assert!(!is_registered(6));
        assert!(!is_registered(0));
    }

    proptest! {
        #[test]
        fn prop_age_valid_iff_in_range(age in -1000i32..1000) {
            let mut p = person();
            p.age = age;
            prop_assert_eq!(p.validate().is_ok(), age > 0 && age <= 115);
        }
    }
}
