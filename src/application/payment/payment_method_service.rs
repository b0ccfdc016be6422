//! PaymentMethodService - Query service for the payment methods a cart may use.

use std::sync::Arc;

use crate::domain::cart::CalculatedCart;
use crate::domain::context::ShopContext;
use crate::domain::foundation::DomainError;
use crate::domain::payment::PaymentMethod;
use crate::ports::{PaymentMethodGateway, RiskManagementPaymentFilter};

/// Determines which payment methods are available at checkout.
///
/// Loads all methods for the shop's locale, keeps the active ones and lets
/// risk management remove the rest. Errors of either collaborator are
/// returned unchanged.
pub struct PaymentMethodService {
    gateway: Arc<dyn PaymentMethodGateway>,
    risk_management_filter: Arc<dyn RiskManagementPaymentFilter>,
}

impl PaymentMethodService {
    pub fn new(
        gateway: Arc<dyn PaymentMethodGateway>,
        risk_management_filter: Arc<dyn RiskManagementPaymentFilter>,
    ) -> Self {
        Self {
            gateway,
            risk_management_filter,
        }
    }

    pub async fn get_available(
        &self,
        cart: &CalculatedCart,
        context: &ShopContext,
    ) -> Result<Vec<PaymentMethod>, DomainError> {
        let payments = self.gateway.get_all(&context.translation_context()).await?;
        let loaded = payments.len();

        let actives: Vec<PaymentMethod> = payments
            .into_iter()
            .filter(PaymentMethod::is_active)
            .collect();

        tracing::debug!(
            shop_id = %context.shop.id,
            loaded,
            active = actives.len(),
            "Loaded payment methods"
        );

        self.risk_management_filter
            .filter(actives, cart, context)
            .await
    }
}
