//! Testing utilities for Chirp
//!
//! This crate provides:
//! - Test fixtures with realistic generated data
//! - Builder patterns for hand-tuned payloads
//! - In-memory mock implementations of repositories
//!
//! # Examples
//!
//! ```
//! use chirp_testing::{builders::*, fixtures::*};
//!
//! let person = create_test_person();
//! assert!(person.age > 0);
//!
//! let minor = PersonBuilder::new().with_age(12).build();
//! assert_eq!(minor.age, 12);
//! ```

pub mod builders;
pub mod fixtures;
pub mod mocks;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;
pub use mocks::*;

// Re-export testing dependencies for convenience
pub use fake;
