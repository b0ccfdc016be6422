//! Storefront Cart - payment method availability and rule data for carts
//!
//! This crate decides which payment methods a shopper may use for a
//! calculated cart and gathers the facts cart validation rules are
//! evaluated against.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
