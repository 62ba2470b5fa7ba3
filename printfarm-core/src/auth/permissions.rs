//! Permission Definitions
//!
//! Static capability sets for the legacy fixed roles, and the built-in
//! roles seeded into a fresh role registry.
//!
//! ## Legacy table
//! - ADMIN: every capability
//! - SELLER: orders and calculator
//! - COLLABORATOR: read all orders, adjust stock
//! - anything else: nothing (fail closed)

use shared::models::{ADMIN_ROLE_ID, AppRole, Capability, LegacyRole, Permissions};

/// Seller capabilities (create/edit orders, quote jobs)
pub const SELLER_CAPABILITIES: &[Capability] = &[
    Capability::CanCreateOrders,
    Capability::CanEditOrders,
    Capability::UseCalculator,
];

/// Collaborator capabilities (read-mostly, quick stock changes)
pub const COLLABORATOR_CAPABILITIES: &[Capability] =
    &[Capability::ViewAllOrders, Capability::CanAdjustStock];

/// Capabilities that only an administrator-equivalent user can exercise
pub const ADMIN_ONLY_CAPABILITIES: &[Capability] = &[Capability::CanManageUsers];

/// Built-in role ids
pub const SELLER_ROLE_ID: &str = "seller";
pub const COLLABORATOR_ROLE_ID: &str = "collaborator";

/// Get the permissions for a legacy role
///
/// Returns `None` for [`LegacyRole::Unknown`]: the caller must deny.
pub fn legacy_permissions(role: LegacyRole) -> Option<Permissions> {
    match role {
        LegacyRole::Admin => Some(Permissions::all()),
        LegacyRole::Seller => Some(Permissions::from_capabilities(SELLER_CAPABILITIES)),
        LegacyRole::Collaborator => {
            Some(Permissions::from_capabilities(COLLABORATOR_CAPABILITIES))
        }
        LegacyRole::Unknown => None,
    }
}

/// Roles every registry starts with
///
/// Only the administrator role is a system role; the other two mirror the
/// legacy table so migrated users keep their capabilities.
pub fn default_roles() -> Vec<AppRole> {
    vec![
        AppRole {
            id: ADMIN_ROLE_ID.to_string(),
            name: "Administrador".to_string(),
            description: "Acceso total al sistema".to_string(),
            is_system: true,
            permissions: Permissions::all(),
        },
        AppRole {
            id: SELLER_ROLE_ID.to_string(),
            name: "Vendedor".to_string(),
            description: "Pedidos y calculadora".to_string(),
            is_system: false,
            permissions: Permissions::from_capabilities(SELLER_CAPABILITIES),
        },
        AppRole {
            id: COLLABORATOR_ROLE_ID.to_string(),
            name: "Colaborador".to_string(),
            description: "Consulta de pedidos y ajuste de stock".to_string(),
            is_system: false,
            permissions: Permissions::from_capabilities(COLLABORATOR_CAPABILITIES),
        },
    ]
}

/// Capabilities a system role must always keep
///
/// The administrator role keeps everything. Other system roles keep their
/// built-in definition when one exists, otherwise whatever they hold now.
pub fn system_baseline(role: &AppRole) -> Permissions {
    if role.is_admin_role() {
        return Permissions::all();
    }
    default_roles()
        .into_iter()
        .find(|r| r.is_system && r.id == role.id)
        .map(|r| r.permissions)
        .unwrap_or(role.permissions)
}
