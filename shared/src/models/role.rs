//! Role Model

use super::permissions::Permissions;
use serde::{Deserialize, Serialize};

/// Id of the built-in administrator role
pub const ADMIN_ROLE_ID: &str = "admin";

/// Legacy fixed role, kept for records that predate dynamic roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegacyRole {
    Admin,
    Seller,
    Collaborator,
    /// Any value the store holds that is not one of the above
    #[serde(other)]
    Unknown,
}

/// Role entity (dynamic RBAC role)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRole {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// System roles cannot be deleted or reduced below their baseline
    #[serde(default)]
    pub is_system: bool,
    pub permissions: Permissions,
}

impl AppRole {
    /// The built-in administrator role
    pub fn is_admin_role(&self) -> bool {
        self.is_system && self.id == ADMIN_ROLE_ID
    }
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCreate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub permissions: Permissions,
}

/// Update role payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Permissions>,
}
