//! Cart module - the priced cart handed over by the pricing engine.

mod calculated_cart;
mod line_item;

pub use calculated_cart::CalculatedCart;
pub use line_item::{CalculatedLineItem, LineItemType};
