//! Application configuration snapshot
//!
//! Owned by the external config store. The core receives it by reference
//! and never mutates or caches it.

use super::cost::{CostSettings, Material};
use super::order::OrderStatus;
use serde::{Deserialize, Serialize};

/// Public business contact data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub address: String,
    pub phone: String,
    pub instagram: String,
    pub web: String,
    pub email: String,
}

/// Configuration snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub job_types: Vec<String>,
    #[serde(default)]
    pub materials: Vec<Material>,
    pub costs: CostSettings,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub background_url: String,
    /// Order of importance for sorting; must list every status once
    pub status_priorities: Vec<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_info: Option<BusinessInfo>,
}

impl AppConfig {
    /// Look up a catalog material by id
    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }
}
