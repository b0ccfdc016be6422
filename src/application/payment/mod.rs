//! Payment queries.

mod payment_method_service;

pub use payment_method_service::PaymentMethodService;
