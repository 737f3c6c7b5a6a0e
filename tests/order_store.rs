use std::str::FromStr;

use rust_decimal::Decimal;
use uuid::Uuid;

use order_gateway::models::STATUS_PENDING;
use order_gateway::store::{OrderStore, StoreError};

/// Helper to create an order with the usual test fixture values
fn create_alice(store: &OrderStore) -> order_gateway::Order {
    store.create(
        "Alice".to_string(),
        vec!["widget".to_string(), "gadget".to_string()],
        Decimal::from_str("19.99").unwrap(),
    )
}

#[test]
fn created_order_is_pending_with_supplied_fields() {
    let store = OrderStore::new();
    let order = create_alice(&store);

    assert_eq!(order.status, STATUS_PENDING);
    assert_eq!(order.customer_name, "Alice");
    assert_eq!(
        order.order_items,
        vec!["widget".to_string(), "gadget".to_string()]
    );
    assert_eq!(order.total_amount, Decimal::from_str("19.99").unwrap());
}

#[test]
fn list_after_single_create_contains_exactly_that_order() {
    let store = OrderStore::new();
    let order = create_alice(&store);

    let listed = store.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], order);
}

#[test]
fn get_returns_the_order_create_returned() {
    let store = OrderStore::new();
    let order = create_alice(&store);

    assert_eq!(store.get(&order.id).unwrap(), order);
}

#[test]
fn full_lifecycle_create_update_delete() {
    let store = OrderStore::new();
    let order = create_alice(&store);

    // Update: status becomes "shipped", nothing else moves
    let updated = store
        .update_status(&order.id, "shipped".to_string())
        .unwrap();
    assert_eq!(updated.status, "shipped");
    assert_eq!(updated.created_at, order.created_at);
    assert_eq!(store.get(&order.id).unwrap().status, "shipped");

    // Delete: subsequent get is NotFound
    store.delete(&order.id).unwrap();
    assert_eq!(store.get(&order.id), Err(StoreError::NotFound(order.id)));
}

#[test]
fn operations_on_unknown_id_fail_not_found() {
    let store = OrderStore::new();
    create_alice(&store);

    let bogus = Uuid::new_v4();
    assert_eq!(store.get(&bogus), Err(StoreError::NotFound(bogus)));
    assert_eq!(
        store.update_status(&bogus, "shipped".to_string()),
        Err(StoreError::NotFound(bogus))
    );
    assert_eq!(store.delete(&bogus), Err(StoreError::NotFound(bogus)));

    // The one real order is untouched
    assert_eq!(store.len(), 1);
}

#[test]
fn store_is_safe_to_share_across_threads() {
    use std::sync::Arc;

    let store = Arc::new(OrderStore::new());
    let mut handles = Vec::new();

    for t in 0..8 {
        let store = Arc::clone(&store);
        handles.push(std::thread::spawn(move || {
            for i in 0..50 {
                let order = store.create(
                    format!("customer-{}-{}", t, i),
                    vec!["item".to_string()],
                    Decimal::from(i),
                );
                store
                    .update_status(&order.id, "confirmed".to_string())
                    .unwrap();
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(store.len(), 8 * 50);
    assert!(store.list().iter().all(|o| o.status == "confirmed"));
}
