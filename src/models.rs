// models.rs - Order entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Status assigned to every order at creation.
///
/// Status is deliberately a free-form string, not an enum: the update
/// endpoint may move an order to any text value.
pub const STATUS_PENDING: &str = "pending";

/// An order as held by the store and returned on the wire.
///
/// Only `status` is mutable after creation; everything else is fixed
/// by the create operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Store-assigned id, unique for the lifetime of the process
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Alice")]
    pub customer_name: String,
    #[schema(example = json!(["widget", "gadget"]))]
    pub order_items: Vec<String>,
    /// Serialized as a string to preserve precision
    #[schema(value_type = String, example = "19.99")]
    pub total_amount: Decimal,
    #[schema(example = "pending")]
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Build a freshly created order: new v4 id, pending status,
    /// created_at stamped now.
    pub fn new(customer_name: String, order_items: Vec<String>, total_amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name,
            order_items,
            total_amount,
            status: STATUS_PENDING.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn new_order_starts_pending() {
        let order = Order::new(
            "Alice".to_string(),
            vec!["widget".to_string()],
            Decimal::from_str("19.99").unwrap(),
        );
        assert_eq!(order.status, STATUS_PENDING);
        assert_eq!(order.customer_name, "Alice");
        assert_eq!(order.order_items, vec!["widget".to_string()]);
    }

    #[test]
    fn new_orders_get_distinct_ids() {
        let a = Order::new("a".to_string(), vec![], Decimal::ZERO);
        let b = Order::new("b".to_string(), vec![], Decimal::ZERO);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn order_serializes_amount_as_string() {
        let order = Order::new(
            "Alice".to_string(),
            vec![],
            Decimal::from_str("19.99").unwrap(),
        );
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["total_amount"], "19.99");
        assert_eq!(json["status"], "pending");
    }
}
