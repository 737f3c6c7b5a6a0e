use std::sync::Arc;

use crate::store::OrderStore;

/// Gateway shared state
#[derive(Clone)]
pub struct AppState {
    /// In-memory order store (owns every order)
    pub store: Arc<OrderStore>,
}

impl AppState {
    pub fn new(store: Arc<OrderStore>) -> Self {
        Self { store }
    }
}
