//! Order Gateway - minimal in-memory order management API
//!
//! # Modules
//!
//! - [`models`] - The Order entity
//! - [`store`] - In-memory order store (create/list/get/update/delete)
//! - [`gateway`] - Axum HTTP layer (routing, DTOs, error mapping)
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod store;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use models::Order;
pub use store::{OrderStore, StoreError};
