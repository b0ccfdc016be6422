//! Request context - shop, customer and translation scope.

mod shop_context;

pub use shop_context::{Customer, Shop, ShopContext, TranslationContext};
