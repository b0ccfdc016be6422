//! HTTP handlers for checkout endpoints.
//!
//! These handlers connect Axum routes to the application services.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{PaymentMethodService, RuleDataCollectorRegistry};
use crate::domain::foundation::DomainError;

use super::dto::{
    ErrorResponse, PaymentMethodsRequest, PaymentMethodsResponse, RuleDataRequest,
    RuleDataResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for checkout endpoints.
#[derive(Clone)]
pub struct CheckoutAppState {
    pub payment_method_service: Arc<PaymentMethodService>,
    pub rule_data_collectors: Arc<RuleDataCollectorRegistry>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/checkout/payment-methods - Payment methods available for a cart
pub async fn get_available_payment_methods(
    State(state): State<CheckoutAppState>,
    payload: Result<Json<PaymentMethodsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CheckoutApiError> {
    let Json(request) = payload?;
    let methods = state
        .payment_method_service
        .get_available(&request.cart, &request.context)
        .await?;

    Ok(Json(PaymentMethodsResponse::from(methods)))
}

/// POST /api/checkout/rule-data - Rule data for a cart evaluation
pub async fn collect_rule_data(
    State(state): State<CheckoutAppState>,
    payload: Result<Json<RuleDataRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CheckoutApiError> {
    let Json(request) = payload?;
    let collection = state
        .rule_data_collectors
        .collect(&request.rules, &request.cart, &request.context)
        .await?;

    Ok(Json(RuleDataResponse {
        data: collection.into_sorted_vec(),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for domain errors.
#[derive(Debug)]
pub struct CheckoutApiError(DomainError);

impl From<DomainError> for CheckoutApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

/// Malformed or invalid request bodies are the caller's fault.
impl From<JsonRejection> for CheckoutApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::validation("body", rejection.body_text()))
    }
}

impl IntoResponse for CheckoutApiError {
    fn into_response(self) -> axum::response::Response {
        let code = self.0.code;

        if code.is_client_error() {
            let body = ErrorResponse::new(code.to_string(), self.0.message);
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }

        // Infrastructure details stay in the logs.
        tracing::error!(error = %self.0, "Checkout request failed");
        let body = ErrorResponse::new(code.to_string(), "The checkout could not be completed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
