//! Unified error codes for the print-farm core
//!
//! Error codes are organized by category:
//! - 0xxx: General and validation errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Configuration errors
//! - 4xxx: Order errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the embedding
/// application can forward them to any frontend unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,
    /// Negative value where only non-negative values are allowed
    NegativeValue = 9,
    /// NaN or infinite value
    NonFiniteValue = 10,
    /// Deposit larger than the order price
    DepositExceedsPrice = 11,
    /// Cached user permissions disagree with the assigned role
    PermissionCacheMismatch = 12,
    /// Stock adjustment would leave a negative quantity
    InsufficientStock = 13,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2003,
    /// Cannot grant a capability the actor does not hold
    PermissionCeiling = 2004,
    /// System role cannot be deleted
    RoleIsSystem = 2006,
    /// System role cannot lose baseline capabilities
    SystemRoleReduced = 2007,

    // ==================== 3xxx: Configuration ====================
    /// Generic invalid configuration
    InvalidConfiguration = 3001,
    /// Production capacity (hours x printers) is zero
    ZeroCapacity = 3002,
    /// Status priority list misses a status
    StatusPriorityMissing = 3003,
    /// Status priority list repeats a status
    StatusPriorityDuplicate = 3004,
    /// Configuration snapshot could not be read or parsed
    SnapshotUnreadable = 3005,

    // ==================== 4xxx: Order ====================
    /// Transition not allowed by the lifecycle
    InvalidTransition = 4001,
    /// Order has already been delivered
    OrderAlreadyDelivered = 4002,
    /// Backward transition without supervising capability
    BackwardTransitionDenied = 4003,
    /// Order item is invalid
    InvalidOrderItem = 4004,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",
            ErrorCode::NegativeValue => "Value must be non-negative",
            ErrorCode::NonFiniteValue => "Value must be a finite number",
            ErrorCode::DepositExceedsPrice => "Deposit cannot exceed the order price",
            ErrorCode::PermissionCacheMismatch => {
                "Stored user permissions do not match the assigned role"
            }
            ErrorCode::InsufficientStock => "Not enough stock for this adjustment",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",
            ErrorCode::PermissionCeiling => "Cannot grant a permission you do not hold",
            ErrorCode::RoleIsSystem => "System roles cannot be deleted",
            ErrorCode::SystemRoleReduced => "System roles cannot lose baseline permissions",

            // Configuration
            ErrorCode::InvalidConfiguration => "Invalid configuration",
            ErrorCode::ZeroCapacity => "Production capacity is zero",
            ErrorCode::StatusPriorityMissing => "Status priority list is missing a status",
            ErrorCode::StatusPriorityDuplicate => "Status priority list contains duplicates",
            ErrorCode::SnapshotUnreadable => "Configuration snapshot could not be loaded",

            // Order
            ErrorCode::InvalidTransition => "Invalid order status transition",
            ErrorCode::OrderAlreadyDelivered => "Order has already been delivered",
            ErrorCode::BackwardTransitionDenied => {
                "Moving an order backwards requires supervisor permissions"
            }
            ErrorCode::InvalidOrderItem => "Invalid order item",

            // System
            ErrorCode::InternalError => "Internal error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            9 => Ok(ErrorCode::NegativeValue),
            10 => Ok(ErrorCode::NonFiniteValue),
            11 => Ok(ErrorCode::DepositExceedsPrice),
            12 => Ok(ErrorCode::PermissionCacheMismatch),
            13 => Ok(ErrorCode::InsufficientStock),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2003 => Ok(ErrorCode::AdminRequired),
            2004 => Ok(ErrorCode::PermissionCeiling),
            2006 => Ok(ErrorCode::RoleIsSystem),
            2007 => Ok(ErrorCode::SystemRoleReduced),

            // Configuration
            3001 => Ok(ErrorCode::InvalidConfiguration),
            3002 => Ok(ErrorCode::ZeroCapacity),
            3003 => Ok(ErrorCode::StatusPriorityMissing),
            3004 => Ok(ErrorCode::StatusPriorityDuplicate),
            3005 => Ok(ErrorCode::SnapshotUnreadable),

            // Order
            4001 => Ok(ErrorCode::InvalidTransition),
            4002 => Ok(ErrorCode::OrderAlreadyDelivered),
            4003 => Ok(ErrorCode::BackwardTransitionDenied),
            4004 => Ok(ErrorCode::InvalidOrderItem),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
