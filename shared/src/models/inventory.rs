//! Inventory Model

use serde::{Deserialize, Serialize};

/// Inventory category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InventoryCategory {
    /// Spools
    Filament,
    /// Finished printed pieces for sale
    Printed,
    /// Rings, magnets, packaging, ...
    Extra,
    Signage,
}

/// Stock record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub category: InventoryCategory,
    pub name: String,
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<i64>,
    /// Sale price
    pub price: f64,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// "m2", "unid"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    /// Tools and other items that are not used up
    #[serde(default)]
    pub is_non_consumable: bool,
}

/// Update item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemUpdate {
    pub name: Option<String>,
    pub category: Option<InventoryCategory>,
    pub min_stock: Option<i64>,
    pub price: Option<f64>,
    pub cost: Option<f64>,
    pub sku: Option<String>,
    pub brand: Option<String>,
    pub unit: Option<String>,
    pub details: Option<String>,
    pub supplier: Option<String>,
    pub is_non_consumable: Option<bool>,
}
