//! User entity representing a stored user record.

use serde::{Deserialize, Serialize};

/// A user row as held by the store.
///
/// The serialized form (`firstName`/`lastName` in camelCase) is shared by the
/// HTTP responses and the cache entries, so a cached value can be decoded
/// straight back into a `User`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i32, first_name: String, last_name: String, age: i32) -> Self {
        Self {
            id,
            first_name,
            last_name,
            age,
        }
    }

    /// Builds the record a write with `fields` produces for `id`.
    pub fn from_new(id: i32, fields: NewUser) -> Self {
        Self::new(id, fields.first_name, fields.last_name, fields.age)
    }
}

/// Input data for creating or overwriting a user.
///
/// Carries no identifier: the store assigns it on insert, and updates take it
/// from the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}
