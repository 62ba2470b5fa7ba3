//! Inventory export

use shared::error::{AppError, AppResult};
use shared::models::{Capability, InventoryItem};

use crate::auth::{CurrentUser, require_permission};

/// Serialize the inventory as a JSON array for backup or spreadsheets
pub fn export_inventory(items: &[InventoryItem], actor: &CurrentUser) -> AppResult<String> {
    require_permission(actor, Capability::CanExportData)?;

    let json = serde_json::to_string_pretty(items)
        .map_err(|e| AppError::internal(format!("Inventory export failed: {e}")))?;

    tracing::info!(items = items.len(), user_id = %actor.id, "Inventory exported");
    Ok(json)
}
