//! Inventory
//!
//! Stock movements (`canAdjustStock`), catalog edits (`canManageInventory`)
//! and export (`canExportData`). Records are passed in by value.

mod export;
mod stock;

pub use export::export_inventory;
pub use stock::{MAX_STOCK_DELTA, adjust_stock, below_min_stock, low_stock, update_item};
