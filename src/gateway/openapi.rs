//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    ApiResponse, CreateOrderRequest, DeleteResponseData, UpdateOrderRequest,
};
use crate::models::Order;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Gateway API",
        version = "1.0.0",
        description = "Minimal in-memory order management API: create, list, fetch, update and delete orders."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::create_order,
        crate::gateway::handlers::get_orders,
        crate::gateway::handlers::get_order,
        crate::gateway::handlers::update_order,
        crate::gateway::handlers::delete_order,
    ),
    components(
        schemas(
            Order,
            CreateOrderRequest,
            UpdateOrderRequest,
            DeleteResponseData,
            HealthResponse,
            ApiResponse<Order>,
            ApiResponse<Vec<Order>>,
            ApiResponse<DeleteResponseData>,
            ApiResponse<HealthResponse>,
        )
    ),
    tags(
        (name = "Orders", description = "Order lifecycle endpoints"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_doc_lists_all_order_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/orders/"));
        assert!(paths.contains_key("/orders/{order_id}"));
        assert!(paths.contains_key("/health"));
    }
}
