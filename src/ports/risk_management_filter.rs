//! Risk management filter port.
//!
//! Business rules that restrict which payment methods may be used for a
//! cart and customer (e.g. no invoice for first orders above a limit).
//! Rule evaluation lives outside this crate.

use async_trait::async_trait;

use crate::domain::cart::CalculatedCart;
use crate::domain::context::ShopContext;
use crate::domain::foundation::DomainError;
use crate::domain::payment::PaymentMethod;

/// Removes payment methods that risk management disallows.
#[async_trait]
pub trait RiskManagementPaymentFilter: Send + Sync {
    /// Returns the subset of `methods` allowed for `cart` and `context`.
    ///
    /// Implementations must not add methods and should keep the input order.
    async fn filter(
        &self,
        methods: Vec<PaymentMethod>,
        cart: &CalculatedCart,
        context: &ShopContext,
    ) -> Result<Vec<PaymentMethod>, DomainError>;
}
