//! Data Transfer Objects for API requests and responses.
//!
//! DTOs use Serde for JSON serialization.

pub mod health;
pub mod user;
