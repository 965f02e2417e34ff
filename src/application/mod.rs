//! Application layer services implementing business logic.
//!
//! Services coordinate repository and cache calls and provide a clean API
//! for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User CRUD over the store and the lookaside cache

pub mod services;
