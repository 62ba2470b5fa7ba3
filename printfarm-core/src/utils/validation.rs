//! Input validation helpers
//!
//! Numeric checks shared by the quote calculator and order financials.
//! Every failure is reported; nothing is clamped or defaulted.

use shared::error::{AppError, AppResult, ErrorCode};

/// Largest accepted monetary amount or quantity (1,000,000,000)
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Entity names: customer, role, material, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
pub fn require_finite(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::with_message(
            ErrorCode::NonFiniteValue,
            format!("{field} must be a finite number, got {value}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a value is finite, non-negative and below [`MAX_AMOUNT`]
pub fn require_non_negative(value: f64, field: &str) -> AppResult<()> {
    require_finite(value, field)?;
    if value < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::NegativeValue,
            format!("{field} must be non-negative, got {value}"),
        )
        .with_detail("field", field)
        .with_detail("value", value));
    }
    if value > MAX_AMOUNT {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} exceeds maximum allowed ({MAX_AMOUNT}), got {value}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}
