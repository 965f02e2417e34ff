//! User CRUD service with a lookaside cache.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::cache::keys::user_key;

/// Service sequencing the user store and the lookaside cache.
///
/// The store is authoritative. The cache is consulted only by identifier and
/// populated on a miss or after a write; nothing keeps it in sync with the
/// store, so a cached entry may be stale indefinitely. Cache failures never
/// fail a request: they are logged and the operation carries on.
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
    cache: Arc<dyn CacheService>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<dyn UserRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            user_repository,
            cache,
        }
    }

    /// Returns every user in the store.
    ///
    /// The cache is never enumerated here, so each user appears exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.user_repository.list().await
    }

    /// Fetches a user, preferring the cached copy.
    ///
    /// On a hit the store is not consulted. On a miss the row is loaded from
    /// the store and written to the cache with no expiry. A cached value that
    /// does not decode is treated as a miss.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user(&self, id: i32) -> Result<User, AppError> {
        let key = user_key(id);

        match self.cache.get(&key).await {
            Ok(Some(cached)) => match serde_json::from_str::<User>(&cached) {
                Ok(user) => {
                    debug!(id, "Serving user from cache");
                    return Ok(user);
                }
                Err(e) => warn!(id, error = %e, "Discarding undecodable cache entry"),
            },
            Ok(None) => {}
            Err(e) => warn!(id, error = %e, "Cache read failed, falling back to store"),
        }

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("user not found", json!({ "id": id })))?;

        self.cache_user(&user).await;
        Ok(user)
    }

    /// Inserts a user and caches the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = self.user_repository.create(new_user).await?;
        self.cache_user(&user).await;
        Ok(user)
    }

    /// Overwrites the user with `id` and caches the supplied fields.
    ///
    /// The update is unconditional: when no row matches, nothing is written
    /// to the store but the cache entry is still set, and the supplied record
    /// is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_user(&self, id: i32, changes: NewUser) -> Result<User, AppError> {
        let affected = self.user_repository.update(id, changes.clone()).await?;
        if affected == 0 {
            debug!(id, "Update matched no rows");
        }

        let user = User::from_new(id, changes);
        self.cache_user(&user).await;
        Ok(user)
    }

    /// Deletes the user with `id` and evicts its cache entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if no row has this id (reported as
    /// 400, not 404).
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i32) -> Result<(), AppError> {
        if !self.user_repository.delete(id).await? {
            return Err(AppError::bad_request(
                format!("user with id: {} not found", id),
                json!({ "id": id }),
            ));
        }

        if let Err(e) = self.cache.delete(&user_key(id)).await {
            warn!(id, error = %e, "Failed to evict cache entry after delete");
        }

        Ok(())
    }

    /// Reports whether the store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.user_repository.health_check().await
    }

    /// Writes `user` to the cache, logging instead of failing.
    async fn cache_user(&self, user: &User) {
        let value = match serde_json::to_string(user) {
            Ok(value) => value,
            Err(e) => {
                warn!(id = user.id, error = %e, "Failed to encode user for cache");
                return;
            }
        };

        if let Err(e) = self.cache.set(&user_key(user.id), &value).await {
            warn!(id = user.id, error = %e, "Failed to cache user");
        }
    }
}
