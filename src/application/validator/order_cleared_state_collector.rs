//! Collects the cleared states of the customer's past orders.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::CalculatedCart;
use crate::domain::context::ShopContext;
use crate::domain::foundation::DomainError;
use crate::domain::validator::{
    OrderClearedStateRuleData, RuleCollection, RuleDataCollection, RuleKind,
};
use crate::ports::{CustomerOrderReader, RuleDataCollector};

/// Feeds `OrderClearedState` rules.
///
/// Runs one query, and only when such a rule is present and a customer is
/// logged in.
pub struct OrderClearedStateRuleCollector {
    reader: Arc<dyn CustomerOrderReader>,
}

impl OrderClearedStateRuleCollector {
    pub fn new(reader: Arc<dyn CustomerOrderReader>) -> Self {
        Self { reader }
    }
}

#[async_trait]
impl RuleDataCollector for OrderClearedStateRuleCollector {
    async fn collect(
        &self,
        rules: &RuleCollection,
        _cart: &CalculatedCart,
        context: &ShopContext,
        collection: &mut RuleDataCollection,
    ) -> Result<(), DomainError> {
        if !rules.has(RuleKind::OrderClearedState) {
            return Ok(());
        }
        let Some(customer) = context.customer() else {
            return Ok(());
        };

        let states = self.reader.distinct_cleared_states(customer.id).await?;
        tracing::debug!(customer_id = %customer.id, states = ?states, "Collected order cleared states");

        collection.add(OrderClearedStateRuleData::new(states));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "order_cleared_state"
    }
}
