//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Key-value lookaside cache holding serialized records.
///
/// The cache is purely an optimization: entries carry no expiry and no
/// version, and the caller decides when to populate or invalidate them.
/// Implementations must be thread-safe and should degrade gracefully (a
/// backend failure behaves like a miss or a no-op).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the serialized value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on cache hit
    /// - `Ok(None)` on cache miss
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key` with no expiration.
    async fn set(&self, key: &str, value: &str) -> CacheResult<()>;

    /// Removes the entry stored under `key`, if any.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Enumerates every key starting with `prefix`.
    ///
    /// Best-effort: keys written or removed during the scan may or may not
    /// be reported.
    async fn scan_prefix(&self, prefix: &str) -> CacheResult<Vec<String>>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
