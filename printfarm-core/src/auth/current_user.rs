//! Resolved caller context
//!
//! A [`User`] record is resolved once against the role registry into a
//! [`CurrentUser`], which every gate and lifecycle operation consumes.

use shared::models::{Capability, LegacyRole, Permissions, User};

use super::permissions::{ADMIN_ONLY_CAPABILITIES, legacy_permissions};
use super::registry::RoleRegistry;

/// Where a user's effective permissions came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleSource {
    /// `roleId` resolved to a registry role
    Dynamic { role_id: String, is_admin_role: bool },
    /// Fallback to the static legacy table
    Legacy(LegacyRole),
    /// Nothing resolved; every capability is denied
    Unresolved,
}

/// Current user context
///
/// ```ignore
/// let user = CurrentUser::resolve(&stored_user, &registry);
/// if user.has_permission(Capability::UseCalculator) {
///     // quote
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub display_name: String,
    /// Legacy role as stored on the record
    pub role: LegacyRole,
    pub source: RoleSource,
    /// Effective permissions
    pub permissions: Permissions,
}

impl CurrentUser {
    /// Resolve a stored user against a registry snapshot
    ///
    /// 1. `roleId` present and known: that role's permissions
    /// 2. otherwise the legacy table for `role`
    /// 3. otherwise nothing
    pub fn resolve(user: &User, registry: &RoleRegistry) -> Self {
        let (source, permissions) = match user.role_id.as_deref().and_then(|id| registry.get(id)) {
            Some(role) => (
                RoleSource::Dynamic {
                    role_id: role.id.clone(),
                    is_admin_role: role.is_admin_role(),
                },
                role.permissions,
            ),
            None => match legacy_permissions(user.role) {
                Some(perms) => (RoleSource::Legacy(user.role), perms),
                None => (RoleSource::Unresolved, Permissions::none()),
            },
        };

        if let (Some(role_id), RoleSource::Legacy(_)) = (&user.role_id, &source) {
            tracing::debug!(
                user_id = %user.id,
                role_id = %role_id,
                "Role id not in registry, using legacy role table"
            );
        }

        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            display_name: user.name.clone(),
            role: user.role,
            source,
            permissions,
        }
    }

    /// Admin check: legacy ADMIN or the administrator system role
    pub fn is_admin(&self) -> bool {
        match &self.source {
            RoleSource::Dynamic { is_admin_role, .. } => {
                *is_admin_role || self.role == LegacyRole::Admin
            }
            RoleSource::Legacy(role) => *role == LegacyRole::Admin,
            RoleSource::Unresolved => false,
        }
    }

    pub fn has_permission(&self, cap: Capability) -> bool {
        self.permissions.get(cap)
    }

    /// True when any of the given capabilities is granted
    pub fn has_any_permission(&self, caps: &[Capability]) -> bool {
        caps.iter().any(|c| self.has_permission(*c))
    }

    /// True when every given capability is granted
    pub fn has_all_permissions(&self, caps: &[Capability]) -> bool {
        caps.iter().all(|c| self.has_permission(*c))
    }

    /// Admin-equivalent: admin role and an admin-only capability
    pub fn is_admin_equivalent(&self) -> bool {
        self.is_admin() && self.has_any_permission(ADMIN_ONLY_CAPABILITIES)
    }

    /// Allowed to correct other people's work (backward transitions)
    pub fn can_supervise(&self) -> bool {
        self.has_permission(Capability::CanManageFinancials) || self.is_admin_equivalent()
    }
}

/// Evaluate a single capability for a stored user
///
/// Total and deterministic for a given registry snapshot.
pub fn evaluate_permission(user: &User, registry: &RoleRegistry, cap: Capability) -> bool {
    CurrentUser::resolve(user, registry).has_permission(cap)
}
