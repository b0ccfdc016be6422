//! Priced line items of a calculated cart.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Kind of cart position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemType {
    /// A catalog product, identified by its order number.
    Product,
    /// A voucher or discount position.
    Voucher,
    /// A surcharge position (e.g. payment surcharge).
    Surcharge,
}

/// A single priced position of a calculated cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LineItemRecord")]
pub struct CalculatedLineItem {
    /// Unique key of the position within the cart.
    pub identifier: String,

    /// Kind of position.
    #[serde(rename = "type")]
    pub item_type: LineItemType,

    /// Product order number. Only set for products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Ordered quantity.
    pub quantity: u32,

    /// Unit price in cents.
    pub unit_price_cents: i64,

    /// Total price in cents (unit price times quantity, after item-level rules).
    pub total_price_cents: i64,
}

/// Wire shape of a line item before its invariants are checked.
#[derive(Deserialize)]
struct LineItemRecord {
    identifier: String,
    #[serde(rename = "type")]
    item_type: LineItemType,
    #[serde(default)]
    number: Option<String>,
    quantity: u32,
    unit_price_cents: i64,
    total_price_cents: i64,
}

impl TryFrom<LineItemRecord> for CalculatedLineItem {
    type Error = ValidationError;

    fn try_from(record: LineItemRecord) -> Result<Self, Self::Error> {
        if record.identifier.trim().is_empty() {
            return Err(ValidationError::empty_field("identifier"));
        }
        check_quantity(record.quantity)?;
        if record.item_type == LineItemType::Product {
            check_number(record.number.as_deref().unwrap_or_default())?;
        }

        Ok(Self {
            identifier: record.identifier,
            item_type: record.item_type,
            number: record.number,
            quantity: record.quantity,
            unit_price_cents: record.unit_price_cents,
            total_price_cents: record.total_price_cents,
        })
    }
}

fn check_number(number: &str) -> Result<(), ValidationError> {
    if number.trim().is_empty() {
        return Err(ValidationError::empty_field("number"));
    }
    Ok(())
}

fn check_quantity(quantity: u32) -> Result<(), ValidationError> {
    if quantity == 0 {
        return Err(ValidationError::out_of_range("quantity", 1, u32::MAX as i64, 0));
    }
    Ok(())
}

impl CalculatedLineItem {
    /// Creates a product position priced at `unit_price_cents` per unit.
    pub fn product(
        number: impl Into<String>,
        quantity: u32,
        unit_price_cents: i64,
    ) -> Result<Self, ValidationError> {
        let number = number.into();
        check_number(&number)?;
        check_quantity(quantity)?;
        let total_price_cents = unit_price_cents
            .checked_mul(i64::from(quantity))
            .ok_or_else(|| {
                ValidationError::out_of_range(
                    "unit_price_cents",
                    i64::MIN / i64::from(quantity),
                    i64::MAX / i64::from(quantity),
                    unit_price_cents,
                )
            })?;

        Ok(Self {
            identifier: number.clone(),
            item_type: LineItemType::Product,
            number: Some(number),
            quantity,
            unit_price_cents,
            total_price_cents,
        })
    }

    /// Creates a voucher position with a (usually negative) fixed amount.
    pub fn voucher(identifier: impl Into<String>, amount_cents: i64) -> Self {
        Self {
            identifier: identifier.into(),
            item_type: LineItemType::Voucher,
            number: None,
            quantity: 1,
            unit_price_cents: amount_cents,
            total_price_cents: amount_cents,
        }
    }

    /// Returns true if this position is a catalog product.
    pub fn is_product(&self) -> bool {
        self.item_type == LineItemType::Product
    }

    /// Product order number, if this position references a product.
    pub fn product_number(&self) -> Option<&str> {
        if !self.is_product() {
            return None;
        }
        self.number.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_total_is_unit_times_quantity() {
        let item = CalculatedLineItem::product("SW10001", 3, 1999).unwrap();
        assert_eq!(item.total_price_cents, 5997);
        assert_eq!(item.product_number(), Some("SW10001"));
    }

    #[test]
    fn product_requires_number() {
        assert!(CalculatedLineItem::product("  ", 1, 100).is_err());
    }

    #[test]
    fn product_requires_positive_quantity() {
        assert!(CalculatedLineItem::product("SW1", 0, 100).is_err());
    }

    #[test]
    fn product_total_overflow_is_rejected() {
        let err = CalculatedLineItem::product("SW1", 3, i64::MAX / 2).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn voucher_has_no_product_number() {
        let item = CalculatedLineItem::voucher("SUMMER", -500);
        assert!(!item.is_product());
        assert_eq!(item.product_number(), None);
    }

    #[test]
    fn line_item_deserializes_with_type_tag() {
        let json = r#"{
            "identifier": "SW1",
            "type": "product",
            "number": "SW1",
            "quantity": 2,
            "unit_price_cents": 100,
            "total_price_cents": 200
        }"#;
        let item: CalculatedLineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, LineItemType::Product);
        assert_eq!(item.product_number(), Some("SW1"));
    }

    fn parse(value: serde_json::Value) -> Result<CalculatedLineItem, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn deserializing_rejects_blank_product_number() {
        let result = parse(serde_json::json!({
            "identifier": "li-1",
            "type": "product",
            "number": "  ",
            "quantity": 1,
            "unit_price_cents": 100,
            "total_price_cents": 100
        }));
        assert!(result.unwrap_err().to_string().contains("number"));
    }

    #[test]
    fn deserializing_rejects_product_without_number() {
        let result = parse(serde_json::json!({
            "identifier": "li-1",
            "type": "product",
            "quantity": 1,
            "unit_price_cents": 100,
            "total_price_cents": 100
        }));
        assert!(result.is_err());
    }

    #[test]
    fn deserializing_rejects_zero_quantity() {
        let result = parse(serde_json::json!({
            "identifier": "SUMMER",
            "type": "voucher",
            "quantity": 0,
            "unit_price_cents": -500,
            "total_price_cents": -500
        }));
        assert!(result.unwrap_err().to_string().contains("quantity"));
    }

    #[test]
    fn deserializing_accepts_voucher_without_number() {
        let item = parse(serde_json::json!({
            "identifier": "SUMMER",
            "type": "voucher",
            "quantity": 1,
            "unit_price_cents": -500,
            "total_price_cents": -500
        }))
        .unwrap();
        assert_eq!(item, CalculatedLineItem::voucher("SUMMER", -500));
    }
}
