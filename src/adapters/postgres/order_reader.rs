//! PostgreSQL implementation of CustomerOrderReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{CustomerId, DomainError};
use crate::ports::CustomerOrderReader;

/// Reads order history from the `s_order` table.
pub struct PostgresCustomerOrderReader {
    pool: PgPool,
}

impl PostgresCustomerOrderReader {
    /// Creates a new PostgresCustomerOrderReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Drops NULL states of orders that were never cleared.
fn known_states(rows: Vec<Option<i32>>) -> Vec<i32> {
    rows.into_iter().flatten().collect()
}

#[async_trait]
impl CustomerOrderReader for PostgresCustomerOrderReader {
    async fn distinct_cleared_states(&self, customer_id: CustomerId) -> Result<Vec<i32>, DomainError> {
        let rows: Vec<Option<i32>> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT cleared
            FROM s_order
            WHERE "userID" = $1
            "#,
        )
        .bind(customer_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::warn!(customer_id = %customer_id, error = %e, "Cleared state query failed");
            DomainError::database("Failed to load order cleared states", e)
        })?;

        Ok(known_states(rows))
    }
}
