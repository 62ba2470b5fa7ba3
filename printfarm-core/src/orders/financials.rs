//! Order money: price, deposit and payment flag

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Capability, Order, OrderFinancials, OrderItem};

use crate::auth::{CurrentUser, require_permission};
use crate::pricing::money::{overflow, to_decimal};
use crate::utils::validation::{MAX_NAME_LEN, require_non_negative, validate_required_text};

/// Largest quantity per line item
pub const MAX_ITEM_QUANTITY: i64 = 9999;

/// Validate price and deposit
///
/// Independent of the order status.
pub fn validate_financials(financials: &OrderFinancials) -> AppResult<()> {
    require_non_negative(financials.price, "price")?;
    require_non_negative(financials.deposit, "deposit")?;

    let price = to_decimal(financials.price, "price")?;
    let deposit = to_decimal(financials.deposit, "deposit")?;
    if deposit > price {
        return Err(AppError::with_message(
            ErrorCode::DepositExceedsPrice,
            format!(
                "Deposit {} exceeds price {}",
                financials.deposit, financials.price
            ),
        )
        .with_detail("price", financials.price)
        .with_detail("deposit", financials.deposit));
    }
    Ok(())
}

/// Validate inventory line items
pub fn validate_items(items: &[OrderItem]) -> AppResult<()> {
    for item in items {
        validate_required_text(&item.name, "item name", MAX_NAME_LEN)?;
        if item.quantity <= 0 || item.quantity > MAX_ITEM_QUANTITY {
            return Err(AppError::with_message(
                ErrorCode::InvalidOrderItem,
                format!(
                    "Item {} quantity must be between 1 and {MAX_ITEM_QUANTITY}, got {}",
                    item.sku, item.quantity
                ),
            )
            .with_detail("item_id", item.id.clone()));
        }
        if let Some(price) = item.price {
            require_non_negative(price, "item price")?;
        }
    }
    Ok(())
}

/// Amount still owed, never negative
pub fn balance_due(financials: &OrderFinancials) -> AppResult<Decimal> {
    if financials.is_paid {
        return Ok(Decimal::ZERO);
    }
    let price = to_decimal(financials.price, "price")?;
    let deposit = to_decimal(financials.deposit, "deposit")?;
    let due = price
        .checked_sub(deposit)
        .ok_or_else(|| overflow("balanceDue"))?;
    Ok(due.max(Decimal::ZERO))
}

/// Mark an order paid or unpaid
pub fn set_paid(order: &Order, is_paid: bool, actor: &CurrentUser) -> AppResult<Order> {
    require_permission(actor, Capability::CanManageFinancials)?;

    tracing::info!(
        order_id = %order.id,
        is_paid,
        user_id = %actor.id,
        "Order payment flag changed"
    );

    let mut updated = order.clone();
    updated.financials.is_paid = is_paid;
    Ok(updated)
}

/// Replace price, deposit and payment flag
pub fn update_financials(
    order: &Order,
    financials: OrderFinancials,
    actor: &CurrentUser,
) -> AppResult<Order> {
    require_permission(actor, Capability::CanManageFinancials)?;
    validate_financials(&financials)?;

    tracing::info!(
        order_id = %order.id,
        price = financials.price,
        deposit = financials.deposit,
        user_id = %actor.id,
        "Order financials updated"
    );

    Ok(Order {
        financials,
        ..order.clone()
    })
}
