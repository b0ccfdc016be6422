//! Calculated cart aggregate.
//!
//! The cart is produced by the pricing engine and is read-only here.

use serde::{Deserialize, Serialize};

use super::CalculatedLineItem;
use crate::domain::foundation::ValidationError;

/// Priced cart of the current checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CartRecord")]
pub struct CalculatedCart {
    line_items: Vec<CalculatedLineItem>,
}

#[derive(Deserialize)]
struct CartRecord {
    #[serde(default)]
    line_items: Vec<CalculatedLineItem>,
}

/// Carts whose totals do not fit in cents are rejected up front.
impl TryFrom<CartRecord> for CalculatedCart {
    type Error = ValidationError;

    fn try_from(record: CartRecord) -> Result<Self, Self::Error> {
        let cart = Self::new(record.line_items);
        cart.total_cents()?;
        cart.goods_total_cents()?;
        Ok(cart)
    }
}

fn checked_total<'a>(
    mut items: impl Iterator<Item = &'a CalculatedLineItem>,
) -> Result<i64, ValidationError> {
    items.try_fold(0i64, |sum, item| {
        sum.checked_add(item.total_price_cents).ok_or_else(|| {
            ValidationError::out_of_range(
                "total_price_cents",
                i64::MIN,
                i64::MAX,
                item.total_price_cents,
            )
        })
    })
}

impl CalculatedCart {
    /// Creates a cart from already priced line items.
    pub fn new(line_items: Vec<CalculatedLineItem>) -> Self {
        Self { line_items }
    }

    /// All positions in cart order.
    pub fn line_items(&self) -> &[CalculatedLineItem] {
        &self.line_items
    }

    /// Returns true if the cart has no positions.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Distinct product order numbers, in first-seen order.
    pub fn product_numbers(&self) -> Vec<String> {
        let mut numbers: Vec<String> = Vec::new();
        for number in self.line_items.iter().filter_map(|item| item.product_number()) {
            if !numbers.iter().any(|n| n == number) {
                numbers.push(number.to_string());
            }
        }
        numbers
    }

    /// Sum of all product positions in cents.
    pub fn goods_total_cents(&self) -> Result<i64, ValidationError> {
        checked_total(self.line_items.iter().filter(|item| item.is_product()))
    }

    /// Sum of all positions in cents, including vouchers and surcharges.
    pub fn total_cents(&self) -> Result<i64, ValidationError> {
        checked_total(self.line_items.iter())
    }
}
