//! Status-priority ranking
//!
//! `statusPriorities` lists every status once, most important first. The
//! score combines that rank with deadline urgency:
//!
//! ```text
//! score = (6 - rank) * 1000 + urgency
//! urgency = 0                                  (no deadline)
//!         = 366 - clamp(days_left, 0, 365)     (otherwise)
//! ```
//!
//! Status rank always dominates; the deadline only breaks ties.

use std::cmp::Reverse;

use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderStatus};

use crate::auth::{CurrentUser, require_admin};

const RANK_WEIGHT: i64 = 1000;
const MAX_DAYS_AHEAD: i64 = 365;

/// Check that the sequence is a permutation of every status
pub fn validate_status_priorities(priorities: &[OrderStatus]) -> AppResult<()> {
    let mut seen = [false; OrderStatus::ALL.len()];
    for status in priorities {
        let slot = &mut seen[status.index()];
        if *slot {
            return Err(AppError::with_message(
                ErrorCode::StatusPriorityDuplicate,
                format!("Status {} appears more than once in statusPriorities", status),
            )
            .with_detail("status", status.as_str()));
        }
        *slot = true;
    }

    let missing: Vec<&str> = OrderStatus::ALL
        .iter()
        .filter(|s| !seen[s.index()])
        .map(|s| s.as_str())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::StatusPriorityMissing,
            format!("statusPriorities is missing {}", missing.join(", ")),
        )
        .with_detail("missing", missing));
    }
    Ok(())
}

/// Position of the order's status in the configured sequence
pub fn rank_order(order: &Order, priorities: &[OrderStatus]) -> AppResult<usize> {
    validate_status_priorities(priorities)?;
    priorities
        .iter()
        .position(|s| *s == order.status)
        .ok_or_else(|| AppError::invalid_configuration("Status not found in statusPriorities"))
}

fn deadline_urgency(deadline: Option<NaiveDate>, today: NaiveDate) -> i64 {
    match deadline {
        None => 0,
        Some(deadline) => {
            let days_left = (deadline - today).num_days().clamp(0, MAX_DAYS_AHEAD);
            MAX_DAYS_AHEAD + 1 - days_left
        }
    }
}

/// Urgency score; higher sorts first
pub fn priority_score(
    order: &Order,
    priorities: &[OrderStatus],
    today: NaiveDate,
) -> AppResult<i64> {
    let rank = rank_order(order, priorities)? as i64;
    let status_weight = (OrderStatus::ALL.len() as i64 - rank) * RANK_WEIGHT;
    Ok(status_weight + deadline_urgency(order.deadline, today))
}

/// Copy of the order with its stored priority recomputed
pub fn reprioritize(
    order: &Order,
    priorities: &[OrderStatus],
    today: NaiveDate,
) -> AppResult<Order> {
    Ok(Order {
        priority: priority_score(order, priorities, today)?,
        ..order.clone()
    })
}

/// Most urgent first; ties by ascending order number
pub fn sort_by_priority<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    priorities: &[OrderStatus],
    today: NaiveDate,
) -> AppResult<Vec<&'a Order>> {
    validate_status_priorities(priorities)?;
    let mut scored = orders
        .into_iter()
        .map(|o| priority_score(o, priorities, today).map(|score| (score, o)))
        .collect::<AppResult<Vec<_>>>()?;
    scored.sort_by_key(|(score, o)| (Reverse(*score), o.order_number));
    Ok(scored.into_iter().map(|(_, o)| o).collect())
}

/// Replace the configured status order (admin only)
pub fn update_status_priorities(
    actor: &CurrentUser,
    priorities: Vec<OrderStatus>,
) -> AppResult<Vec<OrderStatus>> {
    require_admin(actor)?;
    validate_status_priorities(&priorities)?;

    tracing::info!(
        user_id = %actor.id,
        priorities = ?priorities,
        "Status priorities updated"
    );
    Ok(priorities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::error::ErrorKind;
    use shared::models::OrderFinancials;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order(number: u64, status: OrderStatus, deadline: Option<NaiveDate>) -> Order {
        Order {
            id: format!("o-{number}"),
            order_number: number,
            created_at: Utc::now(),
            deadline,
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

    fn production_first() -> Vec<OrderStatus> {
        vec![
            OrderStatus::EnProduccion,
            OrderStatus::Disenado,
            OrderStatus::FaltaDisenar,
            OrderStatus::PendienteEntrega,
            OrderStatus::Presupuesto,
            OrderStatus::Entregado,
        ]
    }

    #[test]
    fn test_rank_order() {
        let p = production_first();
        assert_eq!(
            rank_order(&order(1, OrderStatus::EnProduccion, None), &p).unwrap(),
            0
        );
        assert_eq!(
            rank_order(&order(1, OrderStatus::Entregado, None), &p).unwrap(),
            5
        );
    }

    #[test]
    fn test_rank_order_rejects_bad_sequences() {
        let o = order(1, OrderStatus::Presupuesto, None);

        let mut missing = production_first();
        missing.pop();
        let err = rank_order(&o, &missing).unwrap_err();
        assert_eq!(err.code, ErrorCode::StatusPriorityMissing);
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

        let mut duplicate = production_first();
        duplicate[5] = OrderStatus::Presupuesto;
        let err = rank_order(&o, &duplicate).unwrap_err();
        assert_eq!(err.code, ErrorCode::StatusPriorityDuplicate);

        let err = rank_order(&o, &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn test_priority_score() {
        let p = production_first();
        let today = date(2024, 3, 1);

        assert_eq!(
            priority_score(&order(1, OrderStatus::EnProduccion, None), &p, today).unwrap(),
            6000
        );
        // due today
        assert_eq!(
            priority_score(&order(1, OrderStatus::EnProduccion, Some(today)), &p, today).unwrap(),
            6366
        );
        // overdue counts as due today
        assert_eq!(
            priority_score(
                &order(1, OrderStatus::EnProduccion, Some(date(2024, 2, 1))),
                &p,
                today
            )
            .unwrap(),
            6366
        );
        // ten days out
        assert_eq!(
            priority_score(
                &order(1, OrderStatus::Disenado, Some(date(2024, 3, 11))),
                &p,
                today
            )
            .unwrap(),
            5356
        );
        // far future still beats no deadline
        assert_eq!(
            priority_score(
                &order(1, OrderStatus::Disenado, Some(date(2030, 1, 1))),
                &p,
                today
            )
            .unwrap(),
            5001
        );
    }

    #[test]
    fn test_status_rank_dominates_deadline() {
        let p = production_first();
        let today = date(2024, 3, 1);
        let urgent_quote = order(1, OrderStatus::Presupuesto, Some(today));
        let relaxed_print = order(2, OrderStatus::EnProduccion, None);
        let orders = [urgent_quote, relaxed_print];
        let sorted = sort_by_priority(&orders, &p, today).unwrap();
        assert_eq!(sorted[0].order_number, 2);
    }

    #[test]
    fn test_sort_ties_by_order_number() {
        let p = production_first();
        let today = date(2024, 3, 1);
        let orders = vec![
            order(9, OrderStatus::Disenado, None),
            order(3, OrderStatus::Disenado, None),
            order(5, OrderStatus::Disenado, Some(date(2024, 3, 2))),
        ];
        let numbers: Vec<u64> = sort_by_priority(&orders, &p, today)
            .unwrap()
            .iter()
            .map(|o| o.order_number)
            .collect();
        assert_eq!(numbers, vec![5, 3, 9]);
    }

    #[test]
    fn test_reprioritize() {
        let p = production_first();
        let today = date(2024, 3, 1);
        let o = reprioritize(&order(1, OrderStatus::Presupuesto, None), &p, today).unwrap();
        assert_eq!(o.priority, 2000);
    }
}
