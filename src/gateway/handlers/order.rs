//! Order-related handlers (create, list, get, update, delete)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::models::Order;

use super::super::state::AppState;
use super::super::types::{
    ApiResponse, ApiResult, CreateOrderRequest, DeleteResponseData, UpdateOrderRequest, ok,
};

/// Create order endpoint
///
/// POST /orders/
#[utoipa::path(
    post,
    path = "/orders/",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = ApiResponse<Order>),
        (status = 400, description = "Malformed request body")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> ApiResult<Order> {
    tracing::info!(customer = %req.customer_name, "create order request");

    // No business validation: any well-typed input is accepted
    let order = state
        .store
        .create(req.customer_name, req.order_items, req.total_amount);

    ok(order)
}

/// List all orders
///
/// GET /orders/
#[utoipa::path(
    get,
    path = "/orders/",
    responses(
        (status = 200, description = "All orders, unordered", body = ApiResponse<Vec<Order>>)
    ),
    tag = "Orders"
)]
pub async fn get_orders(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Order>> {
    ok(state.store.list())
}

/// Get single order by ID
///
/// GET /orders/{order_id}
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(
        ("order_id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order details", body = ApiResponse<Order>),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<Uuid>,
) -> ApiResult<Order> {
    let order = state.store.get(&order_id)?;
    ok(order)
}

/// Update order status
///
/// PUT /orders/{order_id}
#[utoipa::path(
    put,
    path = "/orders/{order_id}",
    params(
        ("order_id" = Uuid, Path, description = "Order ID")
    ),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order after status change", body = ApiResponse<Order>),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<Uuid>,
    Json(req): Json<UpdateOrderRequest>,
) -> ApiResult<Order> {
    tracing::info!(order_id = %order_id, status = %req.status, "update order request");
    let order = state.store.update_status(&order_id, req.status)?;
    ok(order)
}

/// Delete order
///
/// DELETE /orders/{order_id}
#[utoipa::path(
    delete,
    path = "/orders/{order_id}",
    params(
        ("order_id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Confirmation message", body = ApiResponse<DeleteResponseData>),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<Uuid>,
) -> ApiResult<DeleteResponseData> {
    state.store.delete(&order_id)?;
    ok(DeleteResponseData::deleted())
}
