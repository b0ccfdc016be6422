//! Payment method definitions.
//!
//! Payment methods are configured by the shop administration; the checkout
//! only reads them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PaymentMethodId, ValidationError};

/// A payment method as configured for the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PaymentMethodRecord")]
pub struct PaymentMethod {
    pub id: PaymentMethodId,

    /// Technical name, e.g. `prepayment`.
    pub name: String,

    /// Label shown to the customer, translated for the shop.
    pub label: String,

    #[serde(default)]
    pub description: String,

    /// Whether the method is enabled in the administration.
    pub active: bool,

    /// Sort order, lowest first.
    #[serde(default)]
    pub position: i32,

    /// Percentage surcharge applied to the cart total.
    #[serde(default)]
    pub surcharge_percent: f64,
}

#[derive(Deserialize)]
struct PaymentMethodRecord {
    id: PaymentMethodId,
    name: String,
    label: String,
    #[serde(default)]
    description: String,
    active: bool,
    #[serde(default)]
    position: i32,
    #[serde(default)]
    surcharge_percent: f64,
}

impl TryFrom<PaymentMethodRecord> for PaymentMethod {
    type Error = ValidationError;

    fn try_from(record: PaymentMethodRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            description: record.description,
            active: record.active,
            position: record.position,
            surcharge_percent: record.surcharge_percent,
            ..PaymentMethod::new(record.id, record.name)?.with_label(record.label)
        })
    }
}

impl PaymentMethod {
    /// Creates an active payment method with the label set to the name.
    pub fn new(id: PaymentMethodId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            label: name.clone(),
            name,
            description: String::new(),
            active: true,
            position: 0,
            surcharge_percent: 0.0,
        })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
