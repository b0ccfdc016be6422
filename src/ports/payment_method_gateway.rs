//! Payment method gateway port.
//!
//! Loads the payment methods configured for a shop, with labels translated
//! for the shop's locale.

use async_trait::async_trait;

use crate::domain::context::TranslationContext;
use crate::domain::foundation::DomainError;
use crate::domain::payment::PaymentMethod;

/// Read access to configured payment methods.
#[async_trait]
pub trait PaymentMethodGateway: Send + Sync {
    /// Load every payment method, active or not, ordered by position.
    async fn get_all(&self, context: &TranslationContext) -> Result<Vec<PaymentMethod>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentMethodGateway) {}
    }
}
