//! Rule data collector port.
//!
//! A collector inspects the rules of a cart evaluation and, when one of its
//! rules is present, gathers the facts needed to evaluate it.
//!
//! # Example
//!
//! ```ignore
//! let mut collection = RuleDataCollection::new();
//! for collector in &collectors {
//!     collector.collect(&rules, &cart, &context, &mut collection).await?;
//! }
//! ```

use async_trait::async_trait;

use crate::domain::cart::CalculatedCart;
use crate::domain::context::ShopContext;
use crate::domain::foundation::DomainError;
use crate::domain::validator::{RuleCollection, RuleDataCollection};

/// Gathers data for one family of rules.
#[async_trait]
pub trait RuleDataCollector: Send + Sync {
    /// Adds data to `collection` if `rules` need it. Must leave the
    /// collection untouched when none of its rules are present.
    async fn collect(
        &self,
        rules: &RuleCollection,
        cart: &CalculatedCart,
        context: &ShopContext,
        collection: &mut RuleDataCollection,
    ) -> Result<(), DomainError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
