//! Product category reader port (read side).

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{CategoryId, DomainError};

/// Read-only catalog queries about category membership.
#[async_trait]
pub trait ProductCategoryReader: Send + Sync {
    /// For each of `category_ids` that contains at least one of `numbers`,
    /// the product order numbers it contains.
    ///
    /// Categories without any of the products are absent from the result.
    async fn products_in_categories(
        &self,
        numbers: &[String],
        category_ids: &[CategoryId],
    ) -> Result<HashMap<CategoryId, Vec<String>>, DomainError>;
}
