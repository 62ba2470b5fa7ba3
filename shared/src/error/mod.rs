//! Unified error system for the print-farm core
//!
//! This module provides a small structured error system:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by code range
//! - [`ErrorKind`]: What the caller is expected to do about an error
//! - [`AppError`]: Error type with code, message and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General / validation errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Configuration errors
//! - 4xxx: Order errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorKind};
//!
//! let err = AppError::new(ErrorCode::ZeroCapacity);
//! assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
//!
//! let err = AppError::validation("rent must be non-negative")
//!     .with_detail("field", "rent");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! ```

mod category;
mod codes;
mod types;

pub use category::{ErrorCategory, ErrorKind};
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
