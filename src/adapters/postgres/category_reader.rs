//! PostgreSQL implementation of ProductCategoryReader.
//!
//! Uses the denormalized `s_articles_categories_ro` table, which lists every
//! (article, category) pair including inherited parent categories.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{CategoryId, DomainError, ErrorCode};
use crate::ports::ProductCategoryReader;

pub struct PostgresProductCategoryReader {
    pool: PgPool,
}

impl PostgresProductCategoryReader {
    /// Creates a new PostgresProductCategoryReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CategoryProductRow {
    category_id: i32,
    ordernumber: String,
}

fn group_by_category(
    rows: Vec<CategoryProductRow>,
) -> Result<HashMap<CategoryId, Vec<String>>, DomainError> {
    let mut grouped: HashMap<CategoryId, Vec<String>> = HashMap::new();
    for row in rows {
        let id = CategoryId::new(row.category_id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid category id: {}", e))
        })?;
        grouped.entry(id).or_default().push(row.ordernumber);
    }
    Ok(grouped)
}

#[async_trait]
impl ProductCategoryReader for PostgresProductCategoryReader {
    async fn products_in_categories(
        &self,
        numbers: &[String],
        category_ids: &[CategoryId],
    ) -> Result<HashMap<CategoryId, Vec<String>>, DomainError> {
        if numbers.is_empty() || category_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let ids: Vec<i32> = category_ids.iter().map(CategoryId::value).collect();

        let rows: Vec<CategoryProductRow> = sqlx::query_as(
            r#"
            SELECT DISTINCT ac."categoryID" AS category_id, d.ordernumber
            FROM s_articles_categories_ro ac
            INNER JOIN s_articles_details d ON d."articleID" = ac."articleID"
            WHERE d.ordernumber = ANY($1)
              AND ac."categoryID" = ANY($2)
            "#,
        )
        .bind(numbers)
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Product category query failed");
            DomainError::database("Failed to load product categories", e)
        })?;

        group_by_category(rows)
    }
}
