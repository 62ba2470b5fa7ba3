//! Shared types for the print-farm core
//!
//! Data model records (users, roles, orders, cost settings, configuration
//! snapshot) and the unified error types used by `printfarm-core`.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorKind};
pub use serde::{Deserialize, Serialize};
