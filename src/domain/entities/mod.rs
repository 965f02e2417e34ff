//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation input
//! lives in a separate struct:
//!
//! - [`User`] - A stored user record
//! - [`NewUser`] - Fields for inserting or overwriting a user

pub mod user;

pub use user::{NewUser, User};
