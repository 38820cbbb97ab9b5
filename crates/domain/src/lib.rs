//! Chirp Domain Types
//!
//! This crate provides the validated records exchanged by the Chirp HTTP API.
//! Every record derives `serde` for the wire format, `validator` for field
//! constraints and `utoipa` for its OpenAPI schema.
//!
//! ## Architecture
//!
//! The domain layer is organized into the following modules:
//!
//! - **identifiers**: Strongly-typed UUID-based identifiers for users and tweets
//! - **person**: Person, location and hair color records of the people application
//! - **user**: Account records of the Twitter application
//! - **tweet**: Tweet records of the Twitter application
//!
//! ## Usage
//!
//! ```rust
//! use chirp_domain::person::{HairColor, Person, PersonOut};
//! use validator::Validate;
//!
//! let person = Person {
//!     first_name: "Facundo".to_string(),
//!     last_name: "García Martoni".to_string(),
//!     age: 25,
//!     hair_color: Some(HairColor::Black),
//!     is_married: Some(false),
//!     password: "super-secret".to_string(),
//! };
//! assert!(person.validate().is_ok());
//!
//! let public = PersonOut::from(person);
//! assert_eq!(public.first_name, "Facundo");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod identifiers;
pub mod person;
pub mod tweet;
pub mod user;

// Re-export commonly used types
pub use identifiers::*;
pub use person::{HairColor, Location, Person, PersonOut};
pub use tweet::Tweet;
pub use user::{StoredUser, User, UserLogin, UserRegister};
