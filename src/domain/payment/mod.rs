//! Payment module - payment methods offered at checkout.

mod payment_method;

pub use payment_method::PaymentMethod;
