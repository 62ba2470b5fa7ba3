//! Order workflow bound to a configuration snapshot
//!
//! Glue over the lifecycle, money and priority rules so callers don't have
//! to pass `statusPriorities` and today's date to every call.

use chrono::{DateTime, NaiveDate, Utc};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{AppConfig, Capability, Order, OrderDraft, OrderFinancials, OrderStatus};

use super::financials::{self, validate_financials, validate_items};
use super::lifecycle::apply_transition;
use super::priority::{reprioritize, sort_by_priority};
use crate::auth::{CurrentUser, require_permission, visible_orders};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// Next order number: highest existing + 1, starting at 1
///
/// # Errors
///
/// Numbering exhausted (`u64::MAX` already used) → `ValueOutOfRange`
pub fn next_order_number(existing: &[u64]) -> AppResult<u64> {
    let highest = existing.iter().copied().max().unwrap_or(0);
    highest.checked_add(1).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("Order numbering exhausted after #{highest}"),
        )
        .with_detail("field", "orderNumber")
    })
}

/// Order operations for one configuration snapshot and one calendar day
#[derive(Debug, Clone, Copy)]
pub struct OrderWorkflow<'a> {
    config: &'a AppConfig,
    today: NaiveDate,
}

impl<'a> OrderWorkflow<'a> {
    pub fn new(config: &'a AppConfig, today: NaiveDate) -> Self {
        Self { config, today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    fn refresh(&self, order: &Order) -> AppResult<Order> {
        reprioritize(order, &self.config.status_priorities, self.today)
    }

    /// Create a quote-stage order
    pub fn create_order(
        &self,
        actor: &CurrentUser,
        draft: OrderDraft,
        existing_numbers: &[u64],
        now: DateTime<Utc>,
    ) -> AppResult<Order> {
        require_permission(actor, Capability::CanCreateOrders)?;
        validate_required_text(&draft.customer_name, "customerName", MAX_NAME_LEN)?;
        validate_required_text(&draft.job_type, "type", MAX_NAME_LEN)?;
        if !self.config.job_types.is_empty() && !self.config.job_types.contains(&draft.job_type)
        {
            return Err(
                AppError::validation(format!("Unknown job type: {}", draft.job_type))
                    .with_detail("type", draft.job_type),
            );
        }
        validate_financials(&draft.financials)?;
        validate_items(&draft.items)?;

        let order = Order {
            id: uuid::Uuid::new_v4().to_string(),
            order_number: next_order_number(existing_numbers)?,
            created_at: now,
            deadline: draft.deadline,
            seller_id: actor.id.clone(),
            seller_name: actor.display_name.clone(),
            customer_name: draft.customer_name,
            job_type: draft.job_type,
            details: draft.details,
            status: OrderStatus::Presupuesto,
            priority: 0,
            items: draft.items,
            financials: draft.financials,
        };
        let order = self.refresh(&order)?;

        tracing::info!(
            order_id = %order.id,
            order_number = order.order_number,
            seller_id = %order.seller_id,
            "Order created"
        );
        Ok(order)
    }

    /// Apply a status change and refresh the stored priority
    pub fn transition(
        &self,
        order: &Order,
        new_status: OrderStatus,
        actor: &CurrentUser,
    ) -> AppResult<Order> {
        let moved = apply_transition(order, new_status, actor)?;
        self.refresh(&moved)
    }

    pub fn set_paid(&self, order: &Order, is_paid: bool, actor: &CurrentUser) -> AppResult<Order> {
        financials::set_paid(order, is_paid, actor)
    }

    pub fn update_financials(
        &self,
        order: &Order,
        financials: OrderFinancials,
        actor: &CurrentUser,
    ) -> AppResult<Order> {
        financials::update_financials(order, financials, actor)
    }

    /// Deletion is the caller's; this only checks it is allowed
    pub fn ensure_can_delete(&self, order: &Order, actor: &CurrentUser) -> AppResult<()> {
        require_permission(actor, Capability::CanDeleteOrders)?;
        tracing::info!(order_id = %order.id, user_id = %actor.id, "Order deletion allowed");
        Ok(())
    }

    /// All orders, most urgent first
    pub fn sorted<'o>(&self, orders: &'o [Order]) -> AppResult<Vec<&'o Order>> {
        sort_by_priority(orders, &self.config.status_priorities, self.today)
    }

    /// Orders the actor may see, most urgent first
    pub fn board<'o>(&self, actor: &CurrentUser, orders: &'o [Order]) -> AppResult<Vec<&'o Order>> {
        sort_by_priority(
            visible_orders(actor, orders),
            &self.config.status_priorities,
            self.today,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_order_number() {
        assert_eq!(next_order_number(&[]).unwrap(), 1);
        assert_eq!(next_order_number(&[3, 7, 5]).unwrap(), 8);
    }

    #[test]
    fn test_next_order_number_exhausted() {
        let err = next_order_number(&[12, u64::MAX]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(next_order_number(&[u64::MAX - 1]).unwrap(), u64::MAX);
    }
}
