//! Customer order reader port (read side).
//!
//! Queries over a customer's order history.

use async_trait::async_trait;

use crate::domain::foundation::{CustomerId, DomainError};

/// Read-only queries over historical orders.
#[async_trait]
pub trait CustomerOrderReader: Send + Sync {
    /// Distinct cleared (payment) states among all orders of `customer_id`.
    ///
    /// Returns an empty list if the customer has never ordered.
    async fn distinct_cleared_states(&self, customer_id: CustomerId) -> Result<Vec<i32>, DomainError>;
}
