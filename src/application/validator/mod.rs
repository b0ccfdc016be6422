//! Rule data collection.
//!
//! Collectors gather the facts the rule engine needs for a cart:
//!
//! - `OrderClearedStateRuleCollector` - cleared states of the customer's orders
//! - `ProductOfCategoriesRuleCollector` - categories of the cart's products
//! - `RuleDataCollectorRegistry` - runs all collectors for one evaluation

mod order_cleared_state_collector;
mod product_of_categories_collector;
mod rule_data_collector_registry;

pub use order_cleared_state_collector::OrderClearedStateRuleCollector;
pub use product_of_categories_collector::ProductOfCategoriesRuleCollector;
pub use rule_data_collector_registry::RuleDataCollectorRegistry;
