//! Stock adjustments and item edits

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Capability, InventoryItem, InventoryItemUpdate};

use crate::auth::{CurrentUser, require_permission};
use crate::utils::validation::{MAX_NAME_LEN, require_non_negative, validate_required_text};

/// Largest single stock movement
pub const MAX_STOCK_DELTA: i64 = 1_000_000;

/// Add or remove units
///
/// # Errors
///
/// - no `canAdjustStock` → `PermissionDenied`
/// - result below zero → `InsufficientStock`
pub fn adjust_stock(
    item: &InventoryItem,
    delta: i64,
    actor: &CurrentUser,
) -> AppResult<InventoryItem> {
    require_permission(actor, Capability::CanAdjustStock)?;

    if delta.unsigned_abs() > MAX_STOCK_DELTA.unsigned_abs() {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("Stock change exceeds maximum allowed ({MAX_STOCK_DELTA}), got {delta}"),
        )
        .with_detail("field", "delta"));
    }

    let stock = item
        .stock
        .checked_add(delta)
        .filter(|s| *s >= 0)
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::InsufficientStock,
                format!(
                    "Cannot remove {} of {}: only {} in stock",
                    -delta, item.name, item.stock
                ),
            )
            .with_detail("item_id", item.id.clone())
            .with_detail("stock", item.stock)
            .with_detail("delta", delta)
        })?;

    tracing::info!(
        item_id = %item.id,
        from = item.stock,
        to = stock,
        user_id = %actor.id,
        "Stock adjusted"
    );

    Ok(InventoryItem {
        stock,
        ..item.clone()
    })
}

/// Edit catalog fields; stock only moves through [`adjust_stock`]
pub fn update_item(
    item: &InventoryItem,
    payload: InventoryItemUpdate,
    actor: &CurrentUser,
) -> AppResult<InventoryItem> {
    require_permission(actor, Capability::CanManageInventory)?;

    let mut updated = item.clone();
    if let Some(name) = payload.name {
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        updated.name = name;
    }
    if let Some(category) = payload.category {
        updated.category = category;
    }
    if let Some(min_stock) = payload.min_stock {
        if min_stock < 0 {
            return Err(AppError::with_message(
                ErrorCode::NegativeValue,
                format!("minStock must be non-negative, got {min_stock}"),
            )
            .with_detail("field", "minStock"));
        }
        updated.min_stock = Some(min_stock);
    }
    if let Some(price) = payload.price {
        require_non_negative(price, "price")?;
        updated.price = price;
    }
    if let Some(cost) = payload.cost {
        require_non_negative(cost, "cost")?;
        updated.cost = cost;
    }
    if payload.sku.is_some() {
        updated.sku = payload.sku;
    }
    if payload.brand.is_some() {
        updated.brand = payload.brand;
    }
    if payload.unit.is_some() {
        updated.unit = payload.unit;
    }
    if payload.details.is_some() {
        updated.details = payload.details;
    }
    if payload.supplier.is_some() {
        updated.supplier = payload.supplier;
    }
    if let Some(flag) = payload.is_non_consumable {
        updated.is_non_consumable = flag;
    }

    tracing::info!(item_id = %item.id, user_id = %actor.id, "Inventory item updated");
    Ok(updated)
}

/// At or below the configured minimum; items without one never are
pub fn below_min_stock(item: &InventoryItem) -> bool {
    item.min_stock.is_some_and(|min| item.stock <= min)
}

/// Items that need restocking, lowest stock first
pub fn low_stock(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    let mut low: Vec<&InventoryItem> = items.iter().filter(|i| below_min_stock(i)).collect();
    low.sort_by_key(|i| i.stock);
    low
}
