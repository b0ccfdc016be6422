//! HTTP adapter for checkout endpoints.
//!
//! Exposes payment availability and rule data collection via REST API:
//! - `POST /api/checkout/payment-methods` - Payment methods available for a cart
//! - `POST /api/checkout/rule-data` - Rule data for a cart evaluation

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{CheckoutApiError, CheckoutAppState};
pub use routes::{checkout_router, checkout_routes};
