//! Gateway types module
//!
//! Types crossing the API boundary:
//!
//! - [`CreateOrderRequest`] / [`UpdateOrderRequest`]: request bodies
//! - [`ApiResponse<T>`]: unified response wrapper
//! - [`ApiError`] / [`ApiResult`]: handler error plumbing

pub mod order;
pub mod response;

// Re-export commonly used types at module root
pub use order::{CreateOrderRequest, UpdateOrderRequest};
pub use response::{ApiError, ApiResponse, ApiResult, DeleteResponseData, error_codes, ok};
