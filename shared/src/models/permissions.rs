//! Permission Model
//!
//! Capabilities are a fixed record of boolean flags. Every flag is always
//! present: deserializing a record that misses one fails instead of
//! defaulting it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single named capability flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    // === Orders ===
    CanCreateOrders,
    CanEditOrders,
    /// All orders vs. only the user's own
    ViewAllOrders,
    CanDeleteOrders,

    // === Inventory ===
    CanManageInventory,
    CanAdjustStock,

    // === Finance & tools ===
    UseCalculator,
    /// Mark orders paid, edit prices by hand
    CanManageFinancials,
    /// Fixed/base cost parameters
    EditCostParams,

    // === Admin ===
    CanManageUsers,
    CanExportData,
}

impl Capability {
    /// Every capability, in declaration order
    pub const ALL: [Capability; 11] = [
        Capability::CanCreateOrders,
        Capability::CanEditOrders,
        Capability::ViewAllOrders,
        Capability::CanDeleteOrders,
        Capability::CanManageInventory,
        Capability::CanAdjustStock,
        Capability::UseCalculator,
        Capability::CanManageFinancials,
        Capability::EditCostParams,
        Capability::CanManageUsers,
        Capability::CanExportData,
    ];

    /// Flag name as it appears in stored records
    pub const fn key(&self) -> &'static str {
        match self {
            Capability::CanCreateOrders => "canCreateOrders",
            Capability::CanEditOrders => "canEditOrders",
            Capability::ViewAllOrders => "viewAllOrders",
            Capability::CanDeleteOrders => "canDeleteOrders",
            Capability::CanManageInventory => "canManageInventory",
            Capability::CanAdjustStock => "canAdjustStock",
            Capability::UseCalculator => "useCalculator",
            Capability::CanManageFinancials => "canManageFinancials",
            Capability::EditCostParams => "editCostParams",
            Capability::CanManageUsers => "canManageUsers",
            Capability::CanExportData => "canExportData",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Capability record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub can_create_orders: bool,
    pub can_edit_orders: bool,
    pub view_all_orders: bool,
    pub can_delete_orders: bool,
    pub can_manage_inventory: bool,
    pub can_adjust_stock: bool,
    pub use_calculator: bool,
    pub can_manage_financials: bool,
    pub edit_cost_params: bool,
    pub can_manage_users: bool,
    pub can_export_data: bool,
}

impl Permissions {
    /// Every flag false
    pub const fn none() -> Self {
        Self {
            can_create_orders: false,
            can_edit_orders: false,
            view_all_orders: false,
            can_delete_orders: false,
            can_manage_inventory: false,
            can_adjust_stock: false,
            use_calculator: false,
            can_manage_financials: false,
            edit_cost_params: false,
            can_manage_users: false,
            can_export_data: false,
        }
    }

    /// Every flag true
    pub const fn all() -> Self {
        Self {
            can_create_orders: true,
            can_edit_orders: true,
            view_all_orders: true,
            can_delete_orders: true,
            can_manage_inventory: true,
            can_adjust_stock: true,
            use_calculator: true,
            can_manage_financials: true,
            edit_cost_params: true,
            can_manage_users: true,
            can_export_data: true,
        }
    }

    /// Build a record with exactly the listed capabilities set
    pub fn from_capabilities(caps: &[Capability]) -> Self {
        let mut perms = Self::none();
        for cap in caps {
            perms.set(*cap, true);
        }
        perms
    }

    pub const fn get(&self, cap: Capability) -> bool {
        match cap {
            Capability::CanCreateOrders => self.can_create_orders,
            Capability::CanEditOrders => self.can_edit_orders,
            Capability::ViewAllOrders => self.view_all_orders,
            Capability::CanDeleteOrders => self.can_delete_orders,
            Capability::CanManageInventory => self.can_manage_inventory,
            Capability::CanAdjustStock => self.can_adjust_stock,
            Capability::UseCalculator => self.use_calculator,
            Capability::CanManageFinancials => self.can_manage_financials,
            Capability::EditCostParams => self.edit_cost_params,
            Capability::CanManageUsers => self.can_manage_users,
            Capability::CanExportData => self.can_export_data,
        }
    }

    pub fn set(&mut self, cap: Capability, value: bool) {
        let flag = match cap {
            Capability::CanCreateOrders => &mut self.can_create_orders,
            Capability::CanEditOrders => &mut self.can_edit_orders,
            Capability::ViewAllOrders => &mut self.view_all_orders,
            Capability::CanDeleteOrders => &mut self.can_delete_orders,
            Capability::CanManageInventory => &mut self.can_manage_inventory,
            Capability::CanAdjustStock => &mut self.can_adjust_stock,
            Capability::UseCalculator => &mut self.use_calculator,
            Capability::CanManageFinancials => &mut self.can_manage_financials,
            Capability::EditCostParams => &mut self.edit_cost_params,
            Capability::CanManageUsers => &mut self.can_manage_users,
            Capability::CanExportData => &mut self.can_export_data,
        };
        *flag = value;
    }

    /// Capabilities currently granted
    pub fn granted(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|cap| self.get(*cap))
            .collect()
    }

    /// Capabilities granted by `self` but not by `other`
    pub fn missing_from(&self, other: &Permissions) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|cap| self.get(*cap) && !other.get(*cap))
            .collect()
    }
}
