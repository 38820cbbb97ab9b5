//! HTTP route handlers.
//!
//! The people application is served at the root and the Twitter
//! application under [`twitter::MOUNT_POINT`].

pub mod health;
pub mod people;
pub mod twitter;
