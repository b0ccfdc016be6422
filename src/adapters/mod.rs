//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Storefront database readers
//! - `payment` - Risk management filter stub
//! - `http` - Axum endpoints for the checkout

pub mod http;
pub mod payment;
pub mod postgres;

pub use payment::StubRiskManagementFilter;
pub use postgres::{
    PostgresCustomerOrderReader, PostgresPaymentMethodGateway, PostgresProductCategoryReader,
};
