//! DTOs for the user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewUser, User};

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// ```json
/// { "firstName": "Ada", "lastName": "Lovelace", "age": 36 }
/// ```
///
/// Field values are not constrained. Missing fields take their zero value
/// (empty string, `0`); only malformed JSON or a wrongly typed field is
/// rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserDto {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl From<CreateUserDto> for NewUser {
    fn from(dto: CreateUserDto) -> Self {
        NewUser {
            first_name: dto.first_name,
            last_name: dto.last_name,
            age: dto.age,
        }
    }
}

/// JSON representation of a user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            age: user.age,
        }
    }
}
