//! Input validation helpers
//!
//! Centralized field limits and validation functions for the catalog and
//! order handlers. SurrealDB does not enforce text lengths, so everything
//! is checked at the API boundary.

use crate::utils::AppError;

// ── Field limits ────────────────────────────────────────────────────

/// Product names must be at least this long
pub const MIN_PRODUCT_NAME_LEN: usize = 3;

/// Product descriptions are capped at 500 chars
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty.")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len}).",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len}).",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a product name (trimmed, minimum length).
pub fn validate_product_name(name: &str) -> Result<(), AppError> {
    if name.trim().len() < MIN_PRODUCT_NAME_LEN {
        return Err(AppError::validation(format!(
            "Product name must be at least {MIN_PRODUCT_NAME_LEN} characters long."
        )));
    }
    Ok(())
}

/// Validate a non-negative monetary amount.
pub fn validate_non_negative(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::validation(format!("{field} must be a number.")));
    }
    if value < 0.0 {
        return Err(AppError::validation(format!("{field} cannot be negative.")));
    }
    Ok(())
}

/// Validate a non-negative stock quantity.
pub fn validate_stock(stock: i64) -> Result<(), AppError> {
    if stock < 0 {
        return Err(AppError::validation("Stock cannot be negative."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_required_text() {
        assert!(validate_required_text("   ", "email", MAX_EMAIL_LEN).is_err());
        assert!(validate_required_text("a@b.com", "email", MAX_EMAIL_LEN).is_ok());
    }

    #[test]
    fn rejects_short_product_name() {
        assert!(validate_product_name("ab").is_err());
        assert!(validate_product_name("  ab  ").is_err());
        assert!(validate_product_name("abc").is_ok());
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        assert!(validate_non_negative(-0.01, "price").is_err());
        assert!(validate_non_negative(f64::NAN, "price").is_err());
        assert!(validate_non_negative(0.0, "price").is_ok());
    }

    #[test]
    fn rejects_long_description() {
        let long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(validate_optional_text(&Some(long), "description", MAX_DESCRIPTION_LEN).is_err());
    }
}
