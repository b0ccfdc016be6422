//! Cart validation rules.
//!
//! Rules are evaluated by the rule engine; this crate only needs to know which
//! rules are present so collectors can decide which data to gather.
//! Container rules (`And`, `Or`, `Not`) are flattened by [`RuleCollection`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CategoryId;

/// Discriminant of a [`Rule`], used for presence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    OrderClearedState,
    ProductOfCategories,
    And,
    Or,
    Not,
}

/// A cart validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    /// Matches if any past order of the customer has one of the cleared states.
    OrderClearedState { states: Vec<i32> },

    /// Matches if the cart contains a product of one of the categories.
    ProductOfCategories { category_ids: Vec<CategoryId> },

    And { rules: Vec<Rule> },

    Or { rules: Vec<Rule> },

    Not { rule: Box<Rule> },
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::OrderClearedState { .. } => RuleKind::OrderClearedState,
            Rule::ProductOfCategories { .. } => RuleKind::ProductOfCategories,
            Rule::And { .. } => RuleKind::And,
            Rule::Or { .. } => RuleKind::Or,
            Rule::Not { .. } => RuleKind::Not,
        }
    }

    /// Direct children of a container rule; empty for leaf rules.
    pub fn children(&self) -> &[Rule] {
        match self {
            Rule::And { rules } | Rule::Or { rules } => rules.as_slice(),
            Rule::Not { rule } => std::slice::from_ref(rule.as_ref()),
            _ => &[],
        }
    }
}

/// The rules a cart is validated against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Rule>", into = "Vec<Rule>")]
pub struct RuleCollection {
    rules: Vec<Rule>,
    kinds: HashSet<RuleKind>,
}

impl RuleCollection {
    pub fn new(rules: Vec<Rule>) -> Self {
        let kinds = DepthFirst::over(&rules).map(Rule::kind).collect();
        Self { rules, kinds }
    }

    /// Top level rules as given.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns true if a rule of `kind` appears anywhere, including nested rules.
    pub fn has(&self, kind: RuleKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// All rules of `kind`, including nested ones, in depth-first order.
    pub fn of_kind(&self, kind: RuleKind) -> impl Iterator<Item = &Rule> {
        DepthFirst::over(&self.rules).filter(move |rule| rule.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Pre-order walk over a rule forest, borrowing every node.
struct DepthFirst<'a> {
    stack: Vec<&'a Rule>,
}

impl<'a> DepthFirst<'a> {
    fn over(rules: &'a [Rule]) -> Self {
        Self {
            stack: rules.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a Rule;

    fn next(&mut self) -> Option<Self::Item> {
        let rule = self.stack.pop()?;
        self.stack.extend(rule.children().iter().rev());
        Some(rule)
    }
}

impl From<Vec<Rule>> for RuleCollection {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl From<RuleCollection> for Vec<Rule> {
    fn from(collection: RuleCollection) -> Self {
        collection.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(ids: &[i32]) -> Rule {
        Rule::ProductOfCategories {
            category_ids: ids.iter().map(|id| CategoryId::new(*id).unwrap()).collect(),
        }
    }

    #[test]
    fn empty_collection_has_nothing() {
        let rules = RuleCollection::default();
        assert!(rules.is_empty());
        assert!(!rules.has(RuleKind::OrderClearedState));
    }

    #[test]
    fn has_finds_top_level_rule() {
        let rules = RuleCollection::new(vec![Rule::OrderClearedState { states: vec![12] }]);
        assert!(rules.has(RuleKind::OrderClearedState));
        assert!(!rules.has(RuleKind::ProductOfCategories));
    }

    #[test]
    fn has_finds_nested_rules() {
        let rules = RuleCollection::new(vec![Rule::And {
            rules: vec![
                categories(&[3]),
                Rule::Not {
                    rule: Box::new(Rule::OrderClearedState { states: vec![17] }),
                },
            ],
        }]);

        assert_eq!(rules.len(), 1);
        assert!(rules.has(RuleKind::And));
        assert!(rules.has(RuleKind::Not));
        assert!(rules.has(RuleKind::ProductOfCategories));
        assert!(rules.has(RuleKind::OrderClearedState));
    }

    #[test]
    fn of_kind_returns_all_matches() {
        let rules = RuleCollection::new(vec![
            categories(&[1, 2]),
            Rule::Or {
                rules: vec![categories(&[3, 4])],
            },
        ]);
        assert_eq!(rules.of_kind(RuleKind::ProductOfCategories).count(), 2);
    }

    #[test]
    fn of_kind_walks_depth_first() {
        let rules = RuleCollection::new(vec![
            Rule::And {
                rules: vec![
                    categories(&[1]),
                    Rule::Not {
                        rule: Box::new(categories(&[2])),
                    },
                ],
            },
            categories(&[3]),
        ]);
        let order: Vec<&Rule> = rules.of_kind(RuleKind::ProductOfCategories).collect();
        assert_eq!(order, vec![&categories(&[1]), &categories(&[2]), &categories(&[3])]);
    }

    #[test]
    fn rules_deserialize_from_tagged_list() {
        let json = r#"[
            {"type": "order_cleared_state", "states": [12, 17]},
            {"type": "not", "rule": {"type": "product_of_categories", "category_ids": [5]}}
        ]"#;
        let rules: RuleCollection = serde_json::from_str(json).unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules.has(RuleKind::ProductOfCategories));
    }
}
