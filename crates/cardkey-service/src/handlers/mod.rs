//! API handlers.

pub mod cards;
pub mod health;
pub mod tokens;

use crate::error::ApiError;

/// Trim `value` and require at least `min` characters.
fn require_min_len<'a>(field: &str, value: &'a str, min: usize) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.chars().count() < min {
        return Err(ApiError::Unprocessable(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(trimmed)
}
