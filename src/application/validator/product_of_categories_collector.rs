//! Collects which rule categories contain products of the cart.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::CalculatedCart;
use crate::domain::context::ShopContext;
use crate::domain::foundation::{CategoryId, DomainError};
use crate::domain::validator::{
    ProductOfCategoriesRuleData, Rule, RuleCollection, RuleDataCollection, RuleKind,
};
use crate::ports::{ProductCategoryReader, RuleDataCollector};

/// Feeds `ProductOfCategories` rules.
///
/// All such rules are answered with a single query over the union of their
/// categories.
pub struct ProductOfCategoriesRuleCollector {
    reader: Arc<dyn ProductCategoryReader>,
}

impl ProductOfCategoriesRuleCollector {
    pub fn new(reader: Arc<dyn ProductCategoryReader>) -> Self {
        Self { reader }
    }
}

/// Union of the category ids of all `ProductOfCategories` rules, sorted.
fn referenced_categories(rules: &RuleCollection) -> Vec<CategoryId> {
    let mut ids: Vec<CategoryId> = rules
        .of_kind(RuleKind::ProductOfCategories)
        .flat_map(|rule| match rule {
            Rule::ProductOfCategories { category_ids } => category_ids.clone(),
            _ => Vec::new(),
        })
        .collect();
    ids.sort();
    ids.dedup();
    ids
}

#[async_trait]
impl RuleDataCollector for ProductOfCategoriesRuleCollector {
    async fn collect(
        &self,
        rules: &RuleCollection,
        cart: &CalculatedCart,
        _context: &ShopContext,
        collection: &mut RuleDataCollection,
    ) -> Result<(), DomainError> {
        if !rules.has(RuleKind::ProductOfCategories) {
            return Ok(());
        }

        let numbers = cart.product_numbers();
        if numbers.is_empty() {
            return Ok(());
        }
        let category_ids = referenced_categories(rules);

        let matches = self
            .reader
            .products_in_categories(&numbers, &category_ids)
            .await?;

        tracing::debug!(
            products = numbers.len(),
            categories = category_ids.len(),
            matched = matches.len(),
            "Collected product categories"
        );

        collection.add(ProductOfCategoriesRuleData::new(matches.into_keys()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "product_of_categories"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::CalculatedLineItem;
    use crate::domain::context::Shop;
    use crate::domain::foundation::{ErrorCode, ShopId};
    use std::collections::HashMap;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    /// Answers from a fixed category -> numbers table and records the query.
    struct MockCategoryReader {
        table: HashMap<CategoryId, Vec<String>>,
        fail: bool,
        queries: Mutex<Vec<(Vec<String>, Vec<CategoryId>)>>,
    }

    impl MockCategoryReader {
        fn with_table(table: Vec<(i32, Vec<&str>)>) -> Self {
            Self {
                table: table
                    .into_iter()
                    .map(|(id, numbers)| {
                        (
                            category(id),
                            numbers.iter().map(|n| n.to_string()).collect(),
                        )
                    })
                    .collect(),
                fail: false,
                queries: Mutex::new(vec![]),
            }
        }

        fn failing() -> Self {
            Self {
                table: HashMap::new(),
                fail: true,
                queries: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl ProductCategoryReader for MockCategoryReader {
        async fn products_in_categories(
            &self,
            numbers: &[String],
            category_ids: &[CategoryId],
        ) -> Result<HashMap<CategoryId, Vec<String>>, DomainError> {
            self.queries
                .lock()
                .unwrap()
                .push((numbers.to_vec(), category_ids.to_vec()));
            if self.fail {
                return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated query failure"));
            }

            let mut result = HashMap::new();
            for id in category_ids {
                let Some(contained) = self.table.get(id) else {
                    continue;
                };
                let hits: Vec<String> = contained
                    .iter()
                    .filter(|n| numbers.contains(n))
                    .cloned()
                    .collect();
                if !hits.is_empty() {
                    result.insert(*id, hits);
                }
            }
            Ok(result)
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn category(id: i32) -> CategoryId {
        CategoryId::new(id).unwrap()
    }

    fn rule(ids: &[i32]) -> Rule {
        Rule::ProductOfCategories {
            category_ids: ids.iter().map(|id| category(*id)).collect(),
        }
    }

    fn cart(numbers: &[&str]) -> CalculatedCart {
        CalculatedCart::new(
            numbers
                .iter()
                .map(|n| CalculatedLineItem::product(*n, 1, 1000).unwrap())
                .collect(),
        )
    }

    fn context() -> ShopContext {
        ShopContext::anonymous(Shop::new(ShopId::new(1).unwrap(), "de_DE").unwrap(), "EUR")
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn without_rule_does_nothing() {
        let reader = Arc::new(MockCategoryReader::with_table(vec![]));
        let collector = ProductOfCategoriesRuleCollector::new(reader.clone());
        let mut collection = RuleDataCollection::new();

        collector
            .collect(&RuleCollection::default(), &cart(&["SW1"]), &context(), &mut collection)
            .await
            .unwrap();

        assert_eq!(collection.count(), 0);
        assert!(reader.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn with_empty_cart_does_nothing() {
        let reader = Arc::new(MockCategoryReader::with_table(vec![]));
        let collector = ProductOfCategoriesRuleCollector::new(reader.clone());
        let mut collection = RuleDataCollection::new();

        collector
            .collect(
                &RuleCollection::new(vec![rule(&[1])]),
                &CalculatedCart::default(),
                &context(),
                &mut collection,
            )
            .await
            .unwrap();

        assert_eq!(collection.count(), 0);
        assert!(reader.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn with_single_rule() {
        let reader = Arc::new(MockCategoryReader::with_table(vec![
            (1, vec!["SW1", "SW2"]),
            (2, vec!["SW1", "SW2"]),
        ]));
        let collector = ProductOfCategoriesRuleCollector::new(reader);
        let mut collection = RuleDataCollection::new();

        collector
            .collect(
                &RuleCollection::new(vec![rule(&[1])]),
                &cart(&["SW1"]),
                &context(),
                &mut collection,
            )
            .await
            .unwrap();

        assert_eq!(collection.count(), 1);
        let data = collection.product_of_categories().unwrap();
        assert!(data.has_one_category(&[category(1)]));
        assert!(!data.has_one_category(&[category(2)]));
    }

    #[tokio::test]
    async fn with_multiple_rules_queries_once_with_union() {
        let reader = Arc::new(MockCategoryReader::with_table(vec![
            (1, vec!["SW1", "SW2"]),
            (2, vec!["SW1", "SW2"]),
        ]));
        let collector = ProductOfCategoriesRuleCollector::new(reader.clone());
        let mut collection = RuleDataCollection::new();

        collector
            .collect(
                &RuleCollection::new(vec![rule(&[1, 2]), rule(&[3, 4])]),
                &cart(&["SW1", "SW2"]),
                &context(),
                &mut collection,
            )
            .await
            .unwrap();

        assert_eq!(collection.count(), 1);
        let data = collection.product_of_categories().unwrap();
        assert!(data.has_one_category(&[category(1)]));
        assert!(data.has_one_category(&[category(2)]));
        assert!(!data.has_one_category(&[category(3), category(4)]));

        let queries = reader.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].0, vec!["SW1".to_string(), "SW2".to_string()]);
        assert_eq!(
            queries[0].1,
            vec![category(1), category(2), category(3), category(4)]
        );
    }

    #[tokio::test]
    async fn cart_without_matching_products_adds_empty_entry() {
        let reader = Arc::new(MockCategoryReader::with_table(vec![(1, vec!["SW9"])]));
        let collector = ProductOfCategoriesRuleCollector::new(reader);
        let mut collection = RuleDataCollection::new();

        collector
            .collect(
                &RuleCollection::new(vec![rule(&[1])]),
                &cart(&["SW1"]),
                &context(),
                &mut collection,
            )
            .await
            .unwrap();

        assert_eq!(collection.count(), 1);
        assert!(collection.product_of_categories().unwrap().category_ids().is_empty());
    }

    #[tokio::test]
    async fn surfaces_query_errors() {
        let collector = ProductOfCategoriesRuleCollector::new(Arc::new(MockCategoryReader::failing()));
        let mut collection = RuleDataCollection::new();

        let result = collector
            .collect(
                &RuleCollection::new(vec![rule(&[1])]),
                &cart(&["SW1"]),
                &context(),
                &mut collection,
            )
            .await;

        assert!(result.is_err());
        assert!(collection.is_empty());
    }

    #[test]
    fn referenced_categories_are_deduplicated() {
        let rules = RuleCollection::new(vec![
            rule(&[3, 1]),
            Rule::And {
                rules: vec![rule(&[1, 2])],
            },
        ]);
        assert_eq!(
            referenced_categories(&rules),
            vec![category(1), category(2), category(3)]
        );
    }
}
