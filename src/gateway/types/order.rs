//! Order request DTOs
//!
//! Deserialization is the only validation done here: the store accepts
//! any well-typed input, so malformed bodies are rejected by axum's
//! `Json` extractor before a handler runs.

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /orders/`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[schema(example = "Alice")]
    pub customer_name: String,
    #[schema(example = json!(["widget", "gadget"]))]
    pub order_items: Vec<String>,
    /// Accepts a JSON number or a decimal string
    #[schema(value_type = f64, example = 19.99)]
    pub total_amount: Decimal,
}

/// Body of `PUT /orders/{order_id}`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    /// New status text; unconstrained
    #[schema(example = "shipped")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn create_request_accepts_number_amount() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{"customer_name":"Alice","order_items":["widget","gadget"],"total_amount":19.99}"#,
        )
        .unwrap();
        assert_eq!(req.customer_name, "Alice");
        assert_eq!(req.order_items.len(), 2);
        assert_eq!(req.total_amount, Decimal::from_str("19.99").unwrap());
    }

    #[test]
    fn create_request_rejects_missing_fields() {
        let res: Result<CreateOrderRequest, _> =
            serde_json::from_str(r#"{"customer_name":"Alice"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn update_request_takes_any_status_text() {
        let req: UpdateOrderRequest =
            serde_json::from_str(r#"{"status":"on the truck"}"#).unwrap();
        assert_eq!(req.status, "on the truck");
    }
}
