//! Cache key layout for user entries.

/// Prefix shared by every user cache key.
pub const USER_KEY_PREFIX: &str = "user_";

/// Returns the cache key for the user with `id` (`user_<id>`).
pub fn user_key(id: i32) -> String {
    format!("{}{}", USER_KEY_PREFIX, id)
}
