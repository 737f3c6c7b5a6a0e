//! In-memory order store
//!
//! Owns every [`Order`] for the lifetime of the process. The server
//! handles requests on multiple threads, so the map is a [`DashMap`]
//! keyed by order id and each operation is atomic on its entry. There
//! is no persistence: all orders are lost on restart.

use dashmap::DashMap;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::Order;

/// Errors signaled by store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// No order with the given id exists
    #[error("Order not found")]
    NotFound(Uuid),
}

/// Concurrent map of all live orders, keyed by id.
///
/// List order follows map iteration and is unordered; callers must not
/// rely on insertion order.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: DashMap<Uuid, Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
        }
    }

    /// Create a new order with a fresh id, `"pending"` status and a
    /// creation timestamp, and insert it. Always succeeds.
    pub fn create(
        &self,
        customer_name: String,
        order_items: Vec<String>,
        total_amount: Decimal,
    ) -> Order {
        let order = Order::new(customer_name, order_items, total_amount);
        tracing::info!(order_id = %order.id, "order created");
        self.orders.insert(order.id, order.clone());
        order
    }

    /// All orders currently held, in map-iteration order.
    pub fn list(&self) -> Vec<Order> {
        self.orders.iter().map(|e| e.value().clone()).collect()
    }

    /// Look up a single order by id.
    pub fn get(&self, id: &Uuid) -> Result<Order, StoreError> {
        self.orders
            .get(id)
            .map(|e| e.value().clone())
            .ok_or(StoreError::NotFound(*id))
    }

    /// Overwrite the order's status in place and return the mutated
    /// order. Any status string is accepted; no transition rules.
    pub fn update_status(&self, id: &Uuid, status: String) -> Result<Order, StoreError> {
        let mut entry = self.orders.get_mut(id).ok_or(StoreError::NotFound(*id))?;
        entry.status = status;
        tracing::info!(order_id = %id, status = %entry.status, "order status updated");
        Ok(entry.clone())
    }

    /// Remove the order from the store.
    pub fn delete(&self, id: &Uuid) -> Result<(), StoreError> {
        self.orders
            .remove(id)
            .map(|_| tracing::info!(order_id = %id, "order deleted"))
            .ok_or(StoreError::NotFound(*id))
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
