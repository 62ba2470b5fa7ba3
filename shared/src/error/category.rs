//! Error category and kind classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Configuration errors
/// - 4xxx: Order errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Configuration errors (3xxx)
    Configuration,
    /// Order errors (4xxx)
    Order,
    /// System errors (5xxx-9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Configuration,
            4000..5000 => Self::Order,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Configuration => "configuration",
            Self::Order => "order",
            Self::System => "system",
        }
    }
}

/// What the embedding application has to do about an error
///
/// Several codes share a kind: a deposit larger than the price and a
/// negative print time are both [`ErrorKind::Validation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No user context
    Unauthenticated,
    /// Authenticated but lacking the required capability
    Unauthorized,
    /// Degenerate or malformed configuration
    InvalidConfiguration,
    /// Negative, non-finite or out-of-range input
    Validation,
    /// Order lifecycle rule violation
    InvalidTransition,
    /// Mutation attempted on a system role beyond allowed limits
    ProtectedRoleViolation,
    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// Get the kind for this error code
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::ValidationFailed
            | ErrorCode::NotFound
            | ErrorCode::AlreadyExists
            | ErrorCode::RequiredField
            | ErrorCode::ValueOutOfRange
            | ErrorCode::NegativeValue
            | ErrorCode::NonFiniteValue
            | ErrorCode::DepositExceedsPrice
            | ErrorCode::PermissionCacheMismatch
            | ErrorCode::InsufficientStock
            | ErrorCode::InvalidOrderItem => ErrorKind::Validation,

            ErrorCode::NotAuthenticated => ErrorKind::Unauthenticated,

            ErrorCode::PermissionDenied
            | ErrorCode::AdminRequired
            | ErrorCode::PermissionCeiling => ErrorKind::Unauthorized,

            ErrorCode::RoleIsSystem | ErrorCode::SystemRoleReduced => {
                ErrorKind::ProtectedRoleViolation
            }

            ErrorCode::InvalidConfiguration
            | ErrorCode::ZeroCapacity
            | ErrorCode::StatusPriorityMissing
            | ErrorCode::StatusPriorityDuplicate
            | ErrorCode::SnapshotUnreadable => ErrorKind::InvalidConfiguration,

            ErrorCode::InvalidTransition
            | ErrorCode::OrderAlreadyDelivered
            | ErrorCode::BackwardTransitionDenied => ErrorKind::InvalidTransition,

            ErrorCode::Success | ErrorCode::Unknown | ErrorCode::InternalError => {
                ErrorKind::Internal
            }
        }
    }
}
