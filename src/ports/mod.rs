//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Payment Ports
//!
//! - `PaymentMethodGateway` - Loads configured payment methods
//! - `RiskManagementPaymentFilter` - Excludes methods disallowed by risk rules
//!
//! ## Rule Data Ports
//!
//! - `RuleDataCollector` - Gathers facts for one family of rules
//! - `CustomerOrderReader` - Order history queries
//! - `ProductCategoryReader` - Category membership queries

mod customer_order_reader;
mod payment_method_gateway;
mod product_category_reader;
mod risk_management_filter;
mod rule_data_collector;

pub use customer_order_reader::CustomerOrderReader;
pub use payment_method_gateway::PaymentMethodGateway;
pub use product_category_reader::ProductCategoryReader;
pub use risk_management_filter::RiskManagementPaymentFilter;
pub use rule_data_collector::RuleDataCollector;
