pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::store::OrderStore;
use state::AppState;

/// Build the application router.
///
/// Split out of [`run_server`] so tests can drive the exact router the
/// binary serves.
pub fn build_router(store: Arc<OrderStore>) -> Router {
    let state = Arc::new(AppState::new(store));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/orders/",
            post(handlers::create_order).get(handlers::get_orders),
        )
        .route(
            "/orders/{order_id}",
            get(handlers::get_order)
                .put(handlers::update_order)
                .delete(handlers::delete_order),
        )
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start HTTP Gateway server
pub async fn run_server(host: &str, port: u16, store: Arc<OrderStore>) -> anyhow::Result<()> {
    let app = build_router(store);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind to {}: {}", addr, e))?;

    tracing::info!("🚀 Gateway listening on http://{}", addr);
    tracing::info!("📖 API Docs: http://{}/docs", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
