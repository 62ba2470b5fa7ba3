//! Authorization
//!
//! - [`CurrentUser`]: a stored user resolved against the role registry
//! - gates: [`require_auth`], [`require_permission`], [`require_admin`]
//! - role administration with system-role protection and permission ceiling

mod current_user;
mod gate;
pub mod permissions;
mod registry;
pub mod roles;

pub use current_user::{CurrentUser, RoleSource, evaluate_permission};
pub use gate::{
    AccessGate, check_gate, require_admin, require_auth, require_permission, visible_orders,
};
pub use permissions::{default_roles, legacy_permissions};
pub use registry::RoleRegistry;
pub use roles::{
    assign_role, create_role, delete_role, sync_user_permissions, update_role,
    verify_permission_cache,
};
