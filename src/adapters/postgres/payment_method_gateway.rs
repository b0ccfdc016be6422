//! PostgreSQL implementation of PaymentMethodGateway.
//!
//! Labels and descriptions come from `s_core_paymentmeans_translations` for
//! the shop, then for its fallback shop, then from the untranslated row.
//! The default shop reads untranslated values only.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::context::TranslationContext;
use crate::domain::foundation::{DomainError, ErrorCode, PaymentMethodId, ValidationError};
use crate::domain::payment::PaymentMethod;
use crate::ports::PaymentMethodGateway;

pub struct PostgresPaymentMethodGateway {
    pool: PgPool,
}

impl PostgresPaymentMethodGateway {
    /// Creates a new PostgresPaymentMethodGateway with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PaymentMethodRow {
    id: i32,
    name: String,
    label: String,
    description: Option<String>,
    active: bool,
    position: i32,
    debit_percent: f64,
}

impl TryFrom<PaymentMethodRow> for PaymentMethod {
    type Error = DomainError;

    fn try_from(row: PaymentMethodRow) -> Result<Self, Self::Error> {
        let invalid = |e: ValidationError| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid payment method row: {}", e))
        };
        let id = PaymentMethodId::new(row.id).map_err(invalid)?;
        let method = PaymentMethod::new(id, row.name).map_err(invalid)?;

        Ok(PaymentMethod {
            label: row.label,
            description: row.description.unwrap_or_default(),
            active: row.active,
            position: row.position,
            surcharge_percent: row.debit_percent,
            ..method
        })
    }
}

/// Shop ids to look up translations for; none for the default shop.
fn translation_shops(context: &TranslationContext) -> (Option<i32>, Option<i32>) {
    if context.is_default_shop {
        return (None, None);
    }
    (
        Some(context.shop_id.value()),
        context.fallback_shop_id.map(|id| id.value()),
    )
}

#[async_trait]
impl PaymentMethodGateway for PostgresPaymentMethodGateway {
    async fn get_all(&self, context: &TranslationContext) -> Result<Vec<PaymentMethod>, DomainError> {
        let (shop_id, fallback_id) = translation_shops(context);

        let rows: Vec<PaymentMethodRow> = sqlx::query_as(
            r#"
            SELECT
                p.id,
                p.name,
                COALESCE(t.description, ft.description, p.description) AS label,
                COALESCE(t.additionaldescription, ft.additionaldescription, p.additionaldescription) AS description,
                p.active <> 0 AS active,
                p.position,
                COALESCE(p.debit_percent, 0)::DOUBLE PRECISION AS debit_percent
            FROM s_core_paymentmeans p
            LEFT JOIN s_core_paymentmeans_translations t
                ON t.payment_id = p.id AND t.shop_id = $1
            LEFT JOIN s_core_paymentmeans_translations ft
                ON ft.payment_id = p.id AND ft.shop_id = $2
            ORDER BY p.position ASC, p.id ASC
            "#,
        )
        .bind(shop_id)
        .bind(fallback_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::warn!(shop_id = %context.shop_id, error = %e, "Payment method query failed");
            DomainError::database("Failed to load payment methods", e)
        })?;

        rows.into_iter().map(PaymentMethod::try_from).collect()
    }
}
