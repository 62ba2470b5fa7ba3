//! Order status transitions
//!
//! Forward moves need `canEditOrders`. Backward moves additionally need a
//! supervisor (`canManageFinancials` or admin) and are otherwise an invalid
//! transition, whatever else the actor holds. A delivered order is closed.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Capability, Order, OrderStatus};

use crate::auth::{CurrentUser, require_permission};
use crate::security_log;

/// Direction of a status change in the declared workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDirection {
    Forward,
    Backward,
    Unchanged,
}

impl TransitionDirection {
    pub fn between(from: OrderStatus, to: OrderStatus) -> Self {
        match to.index().cmp(&from.index()) {
            std::cmp::Ordering::Greater => Self::Forward,
            std::cmp::Ordering::Less => Self::Backward,
            std::cmp::Ordering::Equal => Self::Unchanged,
        }
    }
}

/// Move an order to a new status
///
/// Checks, in order:
/// 1. delivered orders reject everything → `OrderAlreadyDelivered`
/// 2. same status → unchanged copy, no permission needed
/// 3. backward without both `canEditOrders` and supervisor rights
///    → `BackwardTransitionDenied`
/// 4. forward without `canEditOrders` → `PermissionDenied`
///
/// The returned order still carries the old priority; see
/// [`super::reprioritize`].
pub fn apply_transition(
    order: &Order,
    new_status: OrderStatus,
    actor: &CurrentUser,
) -> AppResult<Order> {
    if order.status.is_terminal() {
        return Err(AppError::with_message(
            ErrorCode::OrderAlreadyDelivered,
            format!("Order #{} is already delivered", order.order_number),
        )
        .with_detail("order_id", order.id.clone())
        .with_detail("target", new_status.as_str()));
    }

    let direction = TransitionDirection::between(order.status, new_status);
    if direction == TransitionDirection::Unchanged {
        return Ok(order.clone());
    }

    if direction == TransitionDirection::Backward {
        if !(actor.has_permission(Capability::CanEditOrders) && actor.can_supervise()) {
            security_log!(
                "WARN",
                "backward_transition_denied",
                user_id = actor.id.clone(),
                order_id = order.id.clone(),
                from = order.status.as_str(),
                to = new_status.as_str()
            );
            return Err(AppError::with_message(
                ErrorCode::BackwardTransitionDenied,
                format!(
                    "Cannot move order #{} back from {} to {}",
                    order.order_number, order.status, new_status
                ),
            )
            .with_detail("order_id", order.id.clone()));
        }
    } else {
        require_permission(actor, Capability::CanEditOrders)?;
    }

    tracing::info!(
        order_id = %order.id,
        order_number = order.order_number,
        from = %order.status,
        to = %new_status,
        user_id = %actor.id,
        "Order status changed"
    );

    Ok(Order {
        status: new_status,
        ..order.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::RoleRegistry;
    use chrono::Utc;
    use shared::error::ErrorKind;
    use shared::models::{LegacyRole, OrderFinancials, Permissions, User};

    fn actor(role: LegacyRole) -> CurrentUser {
        let user = User {
            id: "u".to_string(),
            username: "u".to_string(),
            role,
            role_id: None,
            name: "U".to_string(),
            permissions: Permissions::none(),
            created_at: Utc::now(),
            image: None,
            phone: None,
        };
        CurrentUser::resolve(&user, &RoleRegistry::with_defaults())
    }

    fn order(status: OrderStatus) -> Order {
        Order {
            id: "o-1".to_string(),
            order_number: 1,
            created_at: Utc::now(),
            deadline: None,
            seller_id: "u".to_string(),
            seller_name: "U".to_string(),
            customer_name: "Cliente".to_string(),
            job_type: "Llavero".to_string(),
            details: String::new(),
            status,
            priority: 0,
            items: vec![],
            financials: OrderFinancials::default(),
        }
    }

    #[test]
    fn test_forward_transition() {
        let o = order(OrderStatus::Presupuesto);
        let moved = apply_transition(&o, OrderStatus::EnProduccion, &actor(LegacyRole::Seller))
            .unwrap();
        assert_eq!(moved.status, OrderStatus::EnProduccion);
        assert_eq!(o.status, OrderStatus::Presupuesto);
    }

    #[test]
    fn test_backward_needs_supervisor() {
        let o = order(OrderStatus::Disenado);
        let err = apply_transition(&o, OrderStatus::FaltaDisenar, &actor(LegacyRole::Seller))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BackwardTransitionDenied);
        assert_eq!(err.kind(), ErrorKind::InvalidTransition);

        let moved =
            apply_transition(&o, OrderStatus::FaltaDisenar, &actor(LegacyRole::Admin)).unwrap();
        assert_eq!(moved.status, OrderStatus::FaltaDisenar);
    }

    #[test]
    fn test_delivered_is_terminal() {
        let o = order(OrderStatus::Entregado);
        for target in OrderStatus::ALL {
            let err = apply_transition(&o, target, &actor(LegacyRole::Admin)).unwrap_err();
            assert_eq!(err.code, ErrorCode::OrderAlreadyDelivered);
        }
    }

    #[test]
    fn test_same_status_is_noop() {
        let o = order(OrderStatus::Disenado);
        let same = apply_transition(&o, OrderStatus::Disenado, &actor(LegacyRole::Unknown)).unwrap();
        assert_eq!(same, o);
    }

    #[test]
    fn test_backward_without_edit_permission_is_invalid_transition() {
        let o = order(OrderStatus::EnProduccion);
        let err = apply_transition(&o, OrderStatus::Disenado, &actor(LegacyRole::Collaborator))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BackwardTransitionDenied);
        assert_eq!(err.kind(), ErrorKind::InvalidTransition);
    }

    #[test]
    fn test_missing_edit_permission() {
        let o = order(OrderStatus::Presupuesto);
        let err = apply_transition(&o, OrderStatus::FaltaDisenar, &actor(LegacyRole::Collaborator))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_direction() {
        use TransitionDirection::*;
        assert_eq!(
            TransitionDirection::between(OrderStatus::Presupuesto, OrderStatus::Entregado),
            Forward
        );
        assert_eq!(
            TransitionDirection::between(OrderStatus::EnProduccion, OrderStatus::Disenado),
            Backward
        );
        assert_eq!(
            TransitionDirection::between(OrderStatus::Disenado, OrderStatus::Disenado),
            Unchanged
        );
    }
}
