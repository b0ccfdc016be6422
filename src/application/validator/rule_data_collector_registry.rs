//! RuleDataCollectorRegistry - runs every registered collector for a cart.

use std::sync::Arc;

use crate::domain::cart::CalculatedCart;
use crate::domain::context::ShopContext;
use crate::domain::foundation::DomainError;
use crate::domain::validator::{RuleCollection, RuleDataCollection};
use crate::ports::RuleDataCollector;

/// Ordered set of rule data collectors.
///
/// Collectors run one after another in registration order. The first error
/// aborts the run and is returned as is.
#[derive(Default, Clone)]
pub struct RuleDataCollectorRegistry {
    collectors: Vec<Arc<dyn RuleDataCollector>>,
}

impl RuleDataCollectorRegistry {
    pub fn new(collectors: Vec<Arc<dyn RuleDataCollector>>) -> Self {
        Self { collectors }
    }

    /// Registers another collector at the end.
    pub fn with(mut self, collector: Arc<dyn RuleDataCollector>) -> Self {
        self.collectors.push(collector);
        self
    }

    pub fn len(&self) -> usize {
        self.collectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collectors.is_empty()
    }

    /// Builds the rule data for one cart evaluation.
    pub async fn collect(
        &self,
        rules: &RuleCollection,
        cart: &CalculatedCart,
        context: &ShopContext,
    ) -> Result<RuleDataCollection, DomainError> {
        let mut collection = RuleDataCollection::new();

        for collector in &self.collectors {
            if let Err(err) = collector.collect(rules, cart, context, &mut collection).await {
                tracing::warn!(collector = collector.name(), error = %err, "Rule data collection failed");
                return Err(err);
            }
        }

        tracing::debug!(
            rules = rules.len(),
            entries = collection.count(),
            "Rule data collected"
        );
        Ok(collection)
    }
}
