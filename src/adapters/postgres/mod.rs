//! PostgreSQL adapters - Database implementations for reader ports.
//!
//! This module provides adapters for the storefront schema:
//! - `PostgresPaymentMethodGateway` - Translated payment methods
//! - `PostgresCustomerOrderReader` - Order history queries
//! - `PostgresProductCategoryReader` - Category membership of products

mod category_reader;
mod order_reader;
mod payment_method_gateway;

pub use category_reader::PostgresProductCategoryReader;
pub use order_reader::PostgresCustomerOrderReader;
pub use payment_method_gateway::PostgresPaymentMethodGateway;
