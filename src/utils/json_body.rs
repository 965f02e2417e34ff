//! Request body extraction with uniform error reporting.

use crate::AppError;
use axum::{Json, extract::rejection::JsonRejection};
use serde_json::json;

/// Unwraps a JSON body extraction.
///
/// Every rejection (bad syntax, wrong field types, missing content type) is
/// reported as `400 invalid data`, rather than the mix of 400/415/422 axum
/// produces by default.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the body cannot be parsed.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected request body");
        AppError::bad_request("invalid data", json!({ "reason": rejection.body_text() }))
    })?;

    Ok(body)
}
