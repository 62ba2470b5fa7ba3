//! Role registry snapshot
//!
//! Read-only id -> role mapping handed in by the embedding application.

use std::collections::HashMap;

use shared::models::AppRole;

use super::permissions::default_roles;

/// Role registry
#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    roles: HashMap<String, AppRole>,
}

impl RoleRegistry {
    /// Build from stored roles; a later role with the same id replaces an earlier one
    pub fn from_roles(roles: impl IntoIterator<Item = AppRole>) -> Self {
        Self {
            roles: roles.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }

    /// Registry holding only the built-in roles
    pub fn with_defaults() -> Self {
        Self::from_roles(default_roles())
    }

    pub fn get(&self, id: &str) -> Option<&AppRole> {
        self.roles.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.roles.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Roles sorted by id
    pub fn roles(&self) -> Vec<&AppRole> {
        let mut roles: Vec<&AppRole> = self.roles.values().collect();
        roles.sort_by(|a, b| a.id.cmp(&b.id));
        roles
    }
}
