//! Role registry administration
//!
//! Returns new role/user values; persisting them is the caller's job.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{AppRole, Capability, Permissions, RoleCreate, RoleUpdate, User};

use super::current_user::CurrentUser;
use super::gate::require_permission;
use super::permissions::system_baseline;
use super::registry::RoleRegistry;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// Reject capabilities the actor does not hold themselves
fn validate_permission_ceiling(actor: &CurrentUser, granted: &[Capability]) -> AppResult<()> {
    for cap in granted {
        if !actor.has_permission(*cap) {
            return Err(AppError::with_message(
                ErrorCode::PermissionCeiling,
                format!("Cannot grant permission '{}': you do not have it yourself", cap),
            )
            .with_detail("permission", cap.key()));
        }
    }
    Ok(())
}

/// Create a role
///
/// New roles are never system roles.
pub fn create_role(
    actor: &CurrentUser,
    registry: &RoleRegistry,
    payload: RoleCreate,
) -> AppResult<AppRole> {
    require_permission(actor, Capability::CanManageUsers)?;
    validate_required_text(&payload.id, "id", MAX_NAME_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;

    if registry.contains(&payload.id) {
        return Err(AppError::already_exists(format!("Role {}", payload.id)));
    }

    validate_permission_ceiling(actor, &payload.permissions.granted())?;

    tracing::info!(
        user_id = %actor.id,
        username = %actor.username,
        role_id = %payload.id,
        "Creating role"
    );

    Ok(AppRole {
        id: payload.id,
        name: payload.name,
        description: payload.description,
        is_system: false,
        permissions: payload.permissions,
    })
}

/// Update a role
///
/// System roles may be renamed but never lose a baseline capability.
pub fn update_role(
    actor: &CurrentUser,
    existing: &AppRole,
    payload: RoleUpdate,
) -> AppResult<AppRole> {
    require_permission(actor, Capability::CanManageUsers)?;

    let mut role = existing.clone();

    if let Some(name) = payload.name {
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        role.name = name;
    }
    if let Some(description) = payload.description {
        role.description = description;
    }

    if let Some(permissions) = payload.permissions {
        if existing.is_system {
            let removed = system_baseline(existing).missing_from(&permissions);
            if !removed.is_empty() {
                let keys: Vec<&str> = removed.iter().map(|c| c.key()).collect();
                return Err(
                    AppError::protected_role(ErrorCode::SystemRoleReduced, &existing.id)
                        .with_detail("removed", keys),
                );
            }
        }

        // Only newly granted flags count against the ceiling
        let added = permissions.missing_from(&existing.permissions);
        validate_permission_ceiling(actor, &added)?;

        role.permissions = permissions;
    }

    tracing::info!(
        user_id = %actor.id,
        username = %actor.username,
        role_id = %existing.id,
        "Updating role"
    );

    Ok(role)
}

/// Delete a role
pub fn delete_role(actor: &CurrentUser, existing: &AppRole) -> AppResult<()> {
    require_permission(actor, Capability::CanManageUsers)?;

    if existing.is_system {
        return Err(AppError::protected_role(ErrorCode::RoleIsSystem, &existing.id));
    }

    tracing::info!(
        user_id = %actor.id,
        username = %actor.username,
        role_id = %existing.id,
        "Deleting role"
    );
    Ok(())
}

/// Link a user to a role and refresh their cached permissions
pub fn assign_role(actor: &CurrentUser, user: &User, role: &AppRole) -> AppResult<User> {
    require_permission(actor, Capability::CanManageUsers)?;
    validate_permission_ceiling(actor, &role.permissions.granted())?;

    tracing::info!(
        user_id = %actor.id,
        target_user = %user.id,
        role_id = %role.id,
        "Assigning role"
    );

    Ok(User {
        role_id: Some(role.id.clone()),
        permissions: role.permissions,
        ..user.clone()
    })
}

fn expected_permissions(user: &User, registry: &RoleRegistry) -> Permissions {
    CurrentUser::resolve(user, registry).permissions
}

/// Rewrite the denormalized permission cache from the registry
pub fn sync_user_permissions(user: &User, registry: &RoleRegistry) -> User {
    User {
        permissions: expected_permissions(user, registry),
        ..user.clone()
    }
}

/// Check that the cached permissions match the assigned role
///
/// Only users linked to a role (`roleId` set) are checked; legacy-only
/// records carry whatever the store last wrote.
///
/// # Errors
///
/// Any drifted flag → `PermissionCacheMismatch` listing the flags
pub fn verify_permission_cache(user: &User, registry: &RoleRegistry) -> AppResult<()> {
    if user.role_id.is_none() {
        return Ok(());
    }
    let expected = expected_permissions(user, registry);
    if user.permissions == expected {
        return Ok(());
    }

    let drifted: Vec<&str> = Capability::ALL
        .iter()
        .filter(|c| user.permissions.get(**c) != expected.get(**c))
        .map(|c| c.key())
        .collect();

    tracing::warn!(user_id = %user.id, drifted = ?drifted, "Permission cache out of sync");

    Err(AppError::new(ErrorCode::PermissionCacheMismatch)
        .with_detail("user_id", user.id.clone())
        .with_detail("drifted", drifted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::error::ErrorKind;
    use shared::models::LegacyRole;

    fn stored(id: &str, role: LegacyRole, role_id: Option<&str>) -> User {
        User {
            id: id.to_string(),
            username: id.to_string(),
            role,
            role_id: role_id.map(str::to_string),
            name: id.to_string(),
            permissions: Permissions::none(),
            created_at: Utc::now(),
            image: None,
            phone: None,
        }
    }

    fn admin(registry: &RoleRegistry) -> CurrentUser {
        CurrentUser::resolve(&stored("root", LegacyRole::Admin, None), registry)
    }

    fn role_create(id: &str, caps: &[Capability]) -> RoleCreate {
        RoleCreate {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            permissions: Permissions::from_capabilities(caps),
        }
    }

    #[test]
    fn test_create_role() {
        let registry = RoleRegistry::with_defaults();
        let role = create_role(
            &admin(&registry),
            &registry,
            role_create("taller", &[Capability::CanAdjustStock]),
        )
        .unwrap();
        assert!(!role.is_system);
        assert!(role.permissions.can_adjust_stock);

        let err = create_role(&admin(&registry), &registry, role_create("seller", &[]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyExists);
    }

    #[test]
    fn test_create_role_ceiling() {
        // Dynamic role with user management but no financials
        let manager = AppRole {
            id: "manager".to_string(),
            name: "Manager".to_string(),
            description: String::new(),
            is_system: false,
            permissions: Permissions::from_capabilities(&[
                Capability::CanManageUsers,
                Capability::CanEditOrders,
            ]),
        };
        let mut roles = crate::auth::default_roles();
        roles.push(manager);
        let registry = RoleRegistry::from_roles(roles);
        let actor =
            CurrentUser::resolve(&stored("m", LegacyRole::Seller, Some("manager")), &registry);

        assert!(
            create_role(&actor, &registry, role_create("a", &[Capability::CanEditOrders])).is_ok()
        );
        let err = create_role(
            &actor,
            &registry,
            role_create("b", &[Capability::CanManageFinancials]),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::PermissionCeiling);
    }

    #[test]
    fn test_create_role_requires_manage_users() {
        let registry = RoleRegistry::with_defaults();
        let seller = CurrentUser::resolve(&stored("s", LegacyRole::Seller, None), &registry);
        let err = create_role(&seller, &registry, role_create("x", &[])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_system_role_cannot_be_deleted_or_reduced() {
        let registry = RoleRegistry::with_defaults();
        let actor = admin(&registry);
        let admin_role = registry.get("admin").unwrap().clone();

        let err = delete_role(&actor, &admin_role).unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleIsSystem);
        assert_eq!(err.kind(), ErrorKind::ProtectedRoleViolation);

        let mut reduced = Permissions::all();
        reduced.can_manage_users = false;
        let err = update_role(
            &actor,
            &admin_role,
            RoleUpdate {
                permissions: Some(reduced),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::SystemRoleReduced);

        // Renaming is fine
        let renamed = update_role(
            &actor,
            &admin_role,
            RoleUpdate {
                name: Some("Dueño".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(renamed.name, "Dueño");
        assert!(renamed.is_system);
    }

    #[test]
    fn test_update_grants_new_capability() {
        // Admin holds every flag, so any addition passes the ceiling
        let registry = RoleRegistry::with_defaults();
        let actor = admin(&registry);
        let collaborator = registry.get("collaborator").unwrap();
        let mut perms = collaborator.permissions;
        perms.can_export_data = true;
        let updated = update_role(
            &actor,
            collaborator,
            RoleUpdate {
                permissions: Some(perms),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(updated.permissions.can_export_data);
        assert!(!updated.is_system);
    }

    #[test]
    fn test_delete_custom_role() {
        let registry = RoleRegistry::with_defaults();
        let seller_role = registry.get("seller").unwrap();
        assert!(delete_role(&admin(&registry), seller_role).is_ok());
    }

    #[test]
    fn test_assign_and_sync() {
        let registry = RoleRegistry::with_defaults();
        let user = stored("u", LegacyRole::Seller, None);
        let role = registry.get("collaborator").unwrap();

        let updated = assign_role(&admin(&registry), &user, role).unwrap();
        assert_eq!(updated.role_id.as_deref(), Some("collaborator"));
        assert_eq!(updated.permissions, role.permissions);
        assert!(verify_permission_cache(&updated, &registry).is_ok());

        // Stale cache is detected and repaired
        let stale = User {
            role_id: Some("seller".to_string()),
            ..user.clone()
        };
        assert_eq!(
            verify_permission_cache(&stale, &registry).unwrap_err().code,
            ErrorCode::PermissionCacheMismatch
        );
        let synced = sync_user_permissions(&stale, &registry);
        assert!(verify_permission_cache(&synced, &registry).is_ok());

        // Legacy-only users are not checked
        assert!(verify_permission_cache(&user, &registry).is_ok());
        let synced = sync_user_permissions(&user, &registry);
        assert_eq!(
            Some(synced.permissions),
            crate::auth::legacy_permissions(LegacyRole::Seller)
        );
    }
}
