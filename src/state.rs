//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::infrastructure::cache::CacheService;

/// Explicit dependencies of the HTTP handlers.
///
/// Built once at startup and cloned per request; every field is an `Arc`,
/// so clones share the same store pool and cache connection.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Creates the state from a user service and the cache it writes to.
    pub fn new(user_service: Arc<UserService>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            user_service,
            cache,
        }
    }
}
