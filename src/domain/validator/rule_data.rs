//! Data gathered for rule evaluation.
//!
//! A [`RuleDataCollection`] is built once per cart evaluation by the rule data
//! collectors and handed to the rule engine. It holds at most one payload per
//! [`RuleDataKind`].

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CategoryId;

/// Key of a rule data payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleDataKind {
    OrderClearedState,
    ProductOfCategories,
}

/// Distinct cleared states of a customer's past orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderClearedStateRuleData {
    states: BTreeSet<i32>,
}

impl OrderClearedStateRuleData {
    pub fn new(states: impl IntoIterator<Item = i32>) -> Self {
        Self {
            states: states.into_iter().collect(),
        }
    }

    pub fn states(&self) -> &BTreeSet<i32> {
        &self.states
    }

    pub fn has_state(&self, state: i32) -> bool {
        self.states.contains(&state)
    }

    /// True if any of `states` occurs among the customer's orders.
    pub fn has_one_state(&self, states: &[i32]) -> bool {
        states.iter().any(|state| self.states.contains(state))
    }
}

/// Categories (among those referenced by rules) that contain cart products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOfCategoriesRuleData {
    category_ids: BTreeSet<CategoryId>,
}

impl ProductOfCategoriesRuleData {
    pub fn new(category_ids: impl IntoIterator<Item = CategoryId>) -> Self {
        Self {
            category_ids: category_ids.into_iter().collect(),
        }
    }

    pub fn category_ids(&self) -> &BTreeSet<CategoryId> {
        &self.category_ids
    }

    /// True if the cart has a product in any of `category_ids`.
    pub fn has_one_category(&self, category_ids: &[CategoryId]) -> bool {
        category_ids.iter().any(|id| self.category_ids.contains(id))
    }
}

/// A single rule data payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleData {
    OrderClearedState(OrderClearedStateRuleData),
    ProductOfCategories(ProductOfCategoriesRuleData),
}

impl RuleData {
    pub fn kind(&self) -> RuleDataKind {
        match self {
            RuleData::OrderClearedState(_) => RuleDataKind::OrderClearedState,
            RuleData::ProductOfCategories(_) => RuleDataKind::ProductOfCategories,
        }
    }
}

impl From<OrderClearedStateRuleData> for RuleData {
    fn from(data: OrderClearedStateRuleData) -> Self {
        RuleData::OrderClearedState(data)
    }
}

impl From<ProductOfCategoriesRuleData> for RuleData {
    fn from(data: ProductOfCategoriesRuleData) -> Self {
        RuleData::ProductOfCategories(data)
    }
}

/// Rule data keyed by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleDataCollection {
    entries: HashMap<RuleDataKind, RuleData>,
}

impl RuleDataCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a payload, replacing any previous payload of the same kind.
    pub fn add(&mut self, data: impl Into<RuleData>) {
        let data = data.into();
        self.entries.insert(data.kind(), data);
    }

    pub fn get(&self, kind: RuleDataKind) -> Option<&RuleData> {
        self.entries.get(&kind)
    }

    pub fn has(&self, kind: RuleDataKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn order_cleared_state(&self) -> Option<&OrderClearedStateRuleData> {
        match self.get(RuleDataKind::OrderClearedState) {
            Some(RuleData::OrderClearedState(data)) => Some(data),
            _ => None,
        }
    }

    pub fn product_of_categories(&self) -> Option<&ProductOfCategoriesRuleData> {
        match self.get(RuleDataKind::ProductOfCategories) {
            Some(RuleData::ProductOfCategories(data)) => Some(data),
            _ => None,
        }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the collection, returning payloads ordered by kind.
    pub fn into_sorted_vec(self) -> Vec<RuleData> {
        let mut data: Vec<RuleData> = self.entries.into_values().collect();
        data.sort_by_key(RuleData::kind);
        data
    }
}
