//! Utility module
//!
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - numeric and text input checks

pub mod logger;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorKind};
