//! User Model

use super::permissions::Permissions;
use super::role::LegacyRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record (credentials live elsewhere)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    /// Legacy role string, kept for older records
    pub role: LegacyRole,
    /// Link to a dynamic role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    pub name: String,
    /// Denormalized copy of the resolved role's permissions
    pub permissions: Permissions,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
