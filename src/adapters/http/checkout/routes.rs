//! Axum router configuration for checkout endpoints.

use axum::{routing::post, Router};

use super::handlers::{collect_rule_data, get_available_payment_methods, CheckoutAppState};

/// Create the checkout API router.
///
/// # Routes
/// - `POST /payment-methods` - Payment methods available for a cart
/// - `POST /rule-data` - Rule data for a cart evaluation
pub fn checkout_routes() -> Router<CheckoutAppState> {
    Router::new()
        .route("/payment-methods", post(get_available_payment_methods))
        .route("/rule-data", post(collect_rule_data))
}

/// Create the checkout module router, mounted under `/checkout`.
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .nest("/api", checkout_router())
///     .with_state(state);
/// ```
pub fn checkout_router() -> Router<CheckoutAppState> {
    Router::new().nest("/checkout", checkout_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::payment::StubRiskManagementFilter;
    use crate::application::{PaymentMethodService, RuleDataCollectorRegistry};
    use crate::domain::context::TranslationContext;
    use crate::domain::foundation::DomainError;
    use crate::domain::payment::PaymentMethod;
    use crate::ports::PaymentMethodGateway;
    use async_trait::async_trait;

    struct EmptyGateway;

    #[async_trait]
    impl PaymentMethodGateway for EmptyGateway {
        async fn get_all(
            &self,
            _context: &TranslationContext,
        ) -> Result<Vec<PaymentMethod>, DomainError> {
            Ok(vec![])
        }
    }

    fn test_state() -> CheckoutAppState {
        CheckoutAppState {
            payment_method_service: Arc::new(PaymentMethodService::new(
                Arc::new(EmptyGateway),
                Arc::new(StubRiskManagementFilter::new()),
            )),
            rule_data_collectors: Arc::new(RuleDataCollectorRegistry::default()),
        }
    }

    #[test]
    fn checkout_routes_creates_router() {
        let _: Router<()> = checkout_routes().with_state(test_state());
    }

    #[test]
    fn checkout_router_creates_nested_router() {
        let _: Router<()> = checkout_router().with_state(test_state());
    }
}
