//! Handlers for the user CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::user::{CreateUserDto, UserResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::json_body::json_body;
use crate::utils::user_id::parse_user_id;

/// Path of the resource for the user with `id`, used in `Location` headers.
fn user_location(id: i32) -> String {
    format!("/users/{}", id)
}

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users`
///
/// Reads the store only; the cache is never enumerated.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the store query fails.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetches one user.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Cache Strategy
///
/// - **Cache hit**: respond immediately, the store is not consulted
/// - **Cache miss**: query the store, then cache the row with no expiry
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not a positive integer.
/// Returns 404 Not Found if no user has this id.
/// Returns 500 Internal Server Error on store failure.
pub async fn get_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_user_id(&id)?;

    let user = state.user_service.get_user(id).await?;

    Ok(Json(user.into()))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// { "firstName": "Ada", "lastName": "Lovelace", "age": 36 }
/// ```
///
/// Responds 201 Created with the stored user and a `Location: /users/{id}`
/// header. The new record is written to the cache.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed.
/// Returns 500 Internal Server Error if the insert fails.
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let dto = json_body(payload)?;

    let user = state.user_service.create_user(dto.into()).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, user_location(user.id))],
        Json(UserResponse::from(user)),
    ))
}

/// Overwrites a user.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// # Behavior
///
/// - The update is unconditional: a missing id is not an error.
/// - The cache entry is overwritten with the supplied fields either way.
/// - Responds 201 Created with the supplied record (not re-read from the
///   store) and a `Location` header.
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is invalid or the body is malformed.
/// Returns 500 Internal Server Error if the update fails.
pub async fn update_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_user_id(&id)?;
    let dto = json_body(payload)?;

    let user = state.user_service.update_user(id, dto.into()).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, user_location(id))],
        Json(UserResponse::from(user)),
    ))
}

/// Deletes a user and evicts its cache entry.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// Responds 200 OK with the plain-text body `deleted`.
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is invalid or no user has this id.
/// Returns 500 Internal Server Error if the delete fails.
pub async fn delete_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_user_id(&id)?;

    state.user_service.delete_user(id).await?;

    Ok((StatusCode::OK, "deleted"))
}
