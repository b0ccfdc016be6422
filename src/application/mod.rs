//! Application layer - services orchestrating domain types and ports.
//!
//! - `payment` - Payment method availability for a cart
//! - `validator` - Rule data collection for cart validation

pub mod payment;
pub mod validator;

pub use payment::PaymentMethodService;
pub use validator::{
    OrderClearedStateRuleCollector, ProductOfCategoriesRuleCollector, RuleDataCollectorRegistry,
};
