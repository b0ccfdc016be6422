//! Validator module - rules and the data collected to evaluate them.

mod rule;
mod rule_data;

pub use rule::{Rule, RuleCollection, RuleKind};
pub use rule_data::{
    OrderClearedStateRuleData, ProductOfCategoriesRuleData, RuleData, RuleDataCollection,
    RuleDataKind,
};
