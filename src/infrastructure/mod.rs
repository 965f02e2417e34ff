//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the domain contracts:
//!
//! - [`cache`] - Lookaside cache for user reads (Redis and no-op implementations)
//! - [`persistence`] - PostgreSQL repository for the `users` table

pub mod cache;
pub mod persistence;
