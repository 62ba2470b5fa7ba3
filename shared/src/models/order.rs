//! Order Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order workflow status, in declared workflow order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Quote sent, not confirmed
    #[default]
    Presupuesto,
    /// Waiting for design
    FaltaDisenar,
    /// Design ready
    Disenado,
    /// Printing
    EnProduccion,
    /// Ready, waiting for pickup/delivery
    PendienteEntrega,
    /// Delivered (terminal)
    Entregado,
}

impl OrderStatus {
    /// Every status in declared order
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Presupuesto,
        OrderStatus::FaltaDisenar,
        OrderStatus::Disenado,
        OrderStatus::EnProduccion,
        OrderStatus::PendienteEntrega,
        OrderStatus::Entregado,
    ];

    /// Position in the declared workflow
    pub const fn index(&self) -> usize {
        match self {
            OrderStatus::Presupuesto => 0,
            OrderStatus::FaltaDisenar => 1,
            OrderStatus::Disenado => 2,
            OrderStatus::EnProduccion => 3,
            OrderStatus::PendienteEntrega => 4,
            OrderStatus::Entregado => 5,
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Entregado)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Presupuesto => "PRESUPUESTO",
            OrderStatus::FaltaDisenar => "FALTA_DISENAR",
            OrderStatus::Disenado => "DISENADO",
            OrderStatus::EnProduccion => "EN_PRODUCCION",
            OrderStatus::PendienteEntrega => "PENDIENTE_ENTREGA",
            OrderStatus::Entregado => "ENTREGADO",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line item taken from inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Money side of an order
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFinancials {
    pub price: f64,
    pub deposit: f64,
    pub is_paid: bool,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Unique, monotonically assigned
    pub order_number: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub seller_id: String,
    pub seller_name: String,
    pub customer_name: String,
    /// Job type, one of `AppConfig::job_types`
    #[serde(rename = "type")]
    pub job_type: String,
    #[serde(default)]
    pub details: String,
    pub status: OrderStatus,
    /// Derived from status ranking and deadline
    pub priority: i64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub financials: OrderFinancials,
}

/// Caller-supplied fields for a new order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_name: String,
    #[serde(rename = "type")]
    pub job_type: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub financials: OrderFinancials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_index_follows_declaration() {
        for (i, status) in OrderStatus::ALL.iter().enumerate() {
            assert_eq!(status.index(), i);
        }
        assert!(OrderStatus::Entregado.is_terminal());
        assert!(!OrderStatus::PendienteEntrega.is_terminal());
    }

    #[test]
    fn test_status_wire_names() {
        for status in OrderStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_order_deserialize_from_store_record() {
        let json = r#"{
            "id": "o-1",
            "orderNumber": 17,
            "createdAt": "2024-03-01T10:00:00Z",
            "deadline": "2024-03-10",
            "sellerId": "u-2",
            "sellerName": "Ana",
            "customerName": "Luis",
            "type": "Llavero",
            "details": "x20",
            "status": "EN_PRODUCCION",
            "priority": 0,
            "financials": {"price": 100.0, "deposit": 40.0, "isPaid": false}
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_number, 17);
        assert_eq!(order.status, OrderStatus::EnProduccion);
        assert_eq!(order.job_type, "Llavero");
        assert!(order.items.is_empty());
        assert_eq!(
            order.deadline,
            Some(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
        );
    }
}
