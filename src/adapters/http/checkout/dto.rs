//! Request and response DTOs for checkout endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::cart::CalculatedCart;
use crate::domain::context::ShopContext;
use crate::domain::payment::PaymentMethod;
use crate::domain::validator::{RuleCollection, RuleData};

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/checkout/payment-methods`.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethodsRequest {
    pub cart: CalculatedCart,
    pub context: ShopContext,
}

/// Body of `POST /api/checkout/rule-data`.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDataRequest {
    pub cart: CalculatedCart,
    pub context: ShopContext,
    #[serde(default)]
    pub rules: RuleCollection,
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// A payment method offered to the customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodResponse {
    pub id: i32,
    pub name: String,
    pub label: String,
    pub description: String,
    pub position: i32,
    pub surcharge_percent: f64,
}

impl From<PaymentMethod> for PaymentMethodResponse {
    fn from(method: PaymentMethod) -> Self {
        Self {
            id: method.id.value(),
            name: method.name,
            label: method.label,
            description: method.description,
            position: method.position,
            surcharge_percent: method.surcharge_percent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodsResponse {
    pub payment_methods: Vec<PaymentMethodResponse>,
}

impl From<Vec<PaymentMethod>> for PaymentMethodsResponse {
    fn from(methods: Vec<PaymentMethod>) -> Self {
        Self {
            payment_methods: methods.into_iter().map(PaymentMethodResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDataResponse {
    pub data: Vec<RuleData>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::PaymentMethodId;
    use crate::domain::validator::OrderClearedStateRuleData;

    #[test]
    fn payment_methods_request_deserializes() {
        let json = r#"{
            "cart": {"line_items": [
                {"identifier": "SW1", "type": "product", "number": "SW1",
                 "quantity": 1, "unit_price_cents": 999, "total_price_cents": 999}
            ]},
            "context": {
                "shop": {"id": 1, "locale": "de_DE", "is_default": true},
                "currency": "EUR",
                "customer": {"id": 5, "group_key": "EK"}
            }
        }"#;
        let request: PaymentMethodsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.cart.product_numbers(), vec!["SW1"]);
        assert_eq!(request.context.customer().unwrap().id.value(), 5);
    }

    #[test]
    fn rule_data_request_defaults_to_no_rules() {
        let json = r#"{
            "cart": {},
            "context": {"shop": {"id": 1, "locale": "de_DE"}, "currency": "EUR"}
        }"#;
        let request: RuleDataRequest = serde_json::from_str(json).unwrap();
        assert!(request.rules.is_empty());
        assert!(request.cart.is_empty());
    }

    #[test]
    fn payment_method_response_flattens_id() {
        let method = PaymentMethod::new(PaymentMethodId::new(3).unwrap(), "cash")
            .unwrap()
            .with_label("Cash on delivery");
        let response = PaymentMethodResponse::from(method);
        assert_eq!(response.id, 3);
        assert_eq!(response.label, "Cash on delivery");
    }

    #[test]
    fn rule_data_response_serializes_tagged_entries() {
        let response = RuleDataResponse {
            data: vec![OrderClearedStateRuleData::new([12]).into()],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"][0]["type"], "order_cleared_state");
        assert_eq!(json["data"][0]["states"], serde_json::json!([12]));
    }

    #[test]
    fn error_response_creation() {
        let response = ErrorResponse::new("VALIDATION_FAILED", "Invalid cart");
        assert_eq!(response.error_code, "VALIDATION_FAILED");
        assert_eq!(response.message, "Invalid cart");
    }
}
