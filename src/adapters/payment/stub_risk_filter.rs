//! Stub implementation of RiskManagementPaymentFilter for development and testing.
//!
//! Passes every payment method through unless its id was blocked.
//! Replace with the risk management engine for production.
//!
//! # Usage
//!
//! ```ignore
//! use storefront_cart::adapters::payment::StubRiskManagementFilter;
//!
//! let filter = StubRiskManagementFilter::new();
//! // Or never offer invoice (id 4):
//! let filter = StubRiskManagementFilter::blocking([PaymentMethodId::new(4)?]);
//! ```

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::cart::CalculatedCart;
use crate::domain::context::ShopContext;
use crate::domain::foundation::{DomainError, PaymentMethodId};
use crate::domain::payment::PaymentMethod;
use crate::ports::RiskManagementPaymentFilter;

/// Stub risk filter with a fixed block list.
#[derive(Debug, Clone, Default)]
pub struct StubRiskManagementFilter {
    blocked: HashSet<PaymentMethodId>,
}

impl StubRiskManagementFilter {
    /// Create a stub that allows every payment method.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stub that removes the given payment methods.
    pub fn blocking(ids: impl IntoIterator<Item = PaymentMethodId>) -> Self {
        Self {
            blocked: ids.into_iter().collect(),
        }
    }

    /// Block one more payment method.
    pub fn block(&mut self, id: PaymentMethodId) {
        self.blocked.insert(id);
    }
}

#[async_trait]
impl RiskManagementPaymentFilter for StubRiskManagementFilter {
    async fn filter(
        &self,
        methods: Vec<PaymentMethod>,
        _cart: &CalculatedCart,
        _context: &ShopContext,
    ) -> Result<Vec<PaymentMethod>, DomainError> {
        Ok(methods
            .into_iter()
            .filter(|method| !self.blocked.contains(&method.id))
            .collect())
    }
}
