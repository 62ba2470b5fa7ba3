//! Print-farm business logic core
//!
//! # Overview
//!
//! Pure, synchronous business rules for a 3D-printing shop. Persistence,
//! authentication and UI live outside; every operation takes its inputs by
//! value or reference and returns a new value or an [`AppError`].
//!
//! - **Access** (`auth`): dynamic roles with legacy fallback, gates, role admin
//! - **Pricing** (`pricing`): machine-hour and material quotes
//! - **Orders** (`orders`): status lifecycle, money rules, priority ranking
//! - **Inventory** (`inventory`): stock adjustments, low-stock alerts, export
//!
//! # Module layout
//!
//! ```text
//! printfarm-core/src/
//! ├── core/          # env config, snapshot loading, startup errors
//! ├── auth/          # CurrentUser, gates, roles
//! ├── inventory/     # stock adjustments, item edits, export
//! ├── pricing/       # quote calculator, cost settings
//! ├── orders/        # lifecycle, financials, priority, workflow
//! └── utils/         # logger, validation
//! ```

pub mod auth;
pub mod core;
pub mod inventory;
pub mod orders;
pub mod pricing;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, RoleRegistry, RoleSource, evaluate_permission};
pub use crate::core::{Config, load_snapshot, setup_environment};
pub use orders::{OrderWorkflow, apply_transition, rank_order};
pub use pricing::{PriceBreakdown, QuoteJob, compute_quote};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorKind};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
