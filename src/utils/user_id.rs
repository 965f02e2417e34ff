//! User identifier parsing from request paths.

use crate::AppError;
use serde_json::json;

/// Parses a user id taken from the request path.
///
/// Only positive integers that fit an `i32` are accepted; the check runs
/// before any cache or store access.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the value is empty, non-numeric,
/// out of range, zero or negative.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_user_id("42").unwrap(), 42);
/// assert!(parse_user_id("abc").is_err());
/// ```
pub fn parse_user_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::bad_request("invalid id in the param", json!({ "id": raw })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        assert_eq!(parse_user_id("1").unwrap(), 1);
        assert_eq!(parse_user_id("2147483647").unwrap(), i32::MAX);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!(
            parse_user_id("abc"),
            Err(AppError::Validation { .. })
        ));
        assert!(parse_user_id("").is_err());
        assert!(parse_user_id("1.5").is_err());
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert!(parse_user_id("0").is_err());
        assert!(parse_user_id("-1").is_err());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(parse_user_id("2147483648").is_err());
    }
}
