//! Access gates
//!
//! Synchronous counterparts of request middleware: each gate either lets
//! the caller through or returns the error the outer surface should report.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Capability, Order, User};

use super::current_user::CurrentUser;
use super::permissions::ADMIN_ONLY_CAPABILITIES;
use super::registry::RoleRegistry;
use crate::security_log;

/// Area-level access requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessGate {
    /// Any signed-in user
    Authenticated,
    /// Administrator-equivalent users only
    AdminOnly,
}

/// Authentication gate - require a signed-in user
///
/// # Errors
///
/// No user → `NotAuthenticated`
pub fn require_auth(user: Option<&User>, registry: &RoleRegistry) -> AppResult<CurrentUser> {
    match user {
        Some(user) => Ok(CurrentUser::resolve(user, registry)),
        None => {
            security_log!("WARN", "auth_missing", gate = "authenticated");
            Err(AppError::not_authenticated())
        }
    }
}

/// Permission gate - require a single capability
///
/// # Errors
///
/// Missing capability → `PermissionDenied`
pub fn require_permission(user: &CurrentUser, cap: Capability) -> AppResult<()> {
    if !user.has_permission(cap) {
        security_log!(
            "WARN",
            "permission_denied",
            user_id = user.id.clone(),
            username = user.username.clone(),
            required_permission = cap.key()
        );
        return Err(
            AppError::permission_denied(format!("Permission denied: {}", cap))
                .with_detail("permission", cap.key()),
        );
    }
    Ok(())
}

/// Admin gate - require an administrator-equivalent user
///
/// Needs an admin-only capability and either the legacy ADMIN role or the
/// administrator system role.
///
/// # Errors
///
/// Otherwise → `AdminRequired`
pub fn require_admin(user: &CurrentUser) -> AppResult<()> {
    if !user.is_admin_equivalent() {
        security_log!(
            "WARN",
            "admin_required",
            user_id = user.id.clone(),
            username = user.username.clone(),
            holds_admin_capability = user.has_any_permission(ADMIN_ONLY_CAPABILITIES)
        );
        return Err(AppError::new(ErrorCode::AdminRequired));
    }
    Ok(())
}

/// Check an area gate for a possibly signed-out user
pub fn check_gate(
    user: Option<&User>,
    registry: &RoleRegistry,
    gate: AccessGate,
) -> AppResult<CurrentUser> {
    let current = require_auth(user, registry)?;
    if gate == AccessGate::AdminOnly {
        require_admin(&current)?;
    }
    Ok(current)
}

/// Orders the user may see
///
/// Everything with `viewAllOrders`, otherwise only orders they sold.
pub fn visible_orders<'a>(user: &CurrentUser, orders: &'a [Order]) -> Vec<&'a Order> {
    if user.has_permission(Capability::ViewAllOrders) {
        return orders.iter().collect();
    }
    orders.iter().filter(|o| o.seller_id == user.id).collect()
}
