//! Decimal helpers
//!
//! Inputs arrive as f64 and leave as f64; everything in between is
//! `Decimal` with checked arithmetic.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};

use crate::utils::validation::require_finite;

/// Money amounts: 2 decimal places
pub const MONEY_DP: u32 = 2;

/// Hourly rates: 4 decimal places
pub const RATE_DP: u32 = 4;

/// Convert f64 to Decimal for calculation
///
/// Non-finite or unrepresentable values are rejected.
pub fn to_decimal(value: f64, field: &str) -> AppResult<Decimal> {
    require_finite(value, field)?;
    Decimal::from_f64(value).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} cannot be represented as a decimal: {value}"),
        )
        .with_detail("field", field)
    })
}

/// Round half away from zero and convert back for output
pub fn to_f64(value: Decimal, dp: u32) -> AppResult<f64> {
    value
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .ok_or_else(|| AppError::internal(format!("Decimal {value} does not fit in f64")))
}

/// Percentage as a multiplier: 10 → 1.10
pub fn percent_factor(percent: Decimal) -> AppResult<Decimal> {
    let fraction = percent
        .checked_div(Decimal::ONE_HUNDRED)
        .ok_or_else(|| overflow("percentage"))?;
    Decimal::ONE
        .checked_add(fraction)
        .ok_or_else(|| overflow("percentage"))
}

/// Arithmetic overflow while computing `what`
pub fn overflow(what: &str) -> AppError {
    AppError::with_message(
        ErrorCode::ValueOutOfRange,
        format!("Arithmetic overflow computing {what}"),
    )
    .with_detail("field", what)
}
