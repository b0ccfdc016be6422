//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `cart` - The calculated cart handed over by the pricing engine
//! - `context` - Shop, customer and translation scope of a request
//! - `payment` - Payment methods
//! - `validator` - Cart rules and the rule data collected for them

pub mod cart;
pub mod context;
pub mod foundation;
pub mod payment;
pub mod validator;
