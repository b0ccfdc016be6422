//! Shop and customer context of a storefront request.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CustomerId, ShopId, ValidationError};

/// Shop the request is served by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ShopRecord")]
pub struct Shop {
    pub id: ShopId,

    /// Locale code, e.g. `de_DE`.
    pub locale: String,

    /// True for the main shop whose texts need no translation.
    #[serde(default)]
    pub is_default: bool,

    /// Shop whose translations are used when this shop has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_id: Option<ShopId>,
}

#[derive(Deserialize)]
struct ShopRecord {
    id: ShopId,
    locale: String,
    #[serde(default)]
    is_default: bool,
    #[serde(default)]
    fallback_id: Option<ShopId>,
}

impl TryFrom<ShopRecord> for Shop {
    type Error = ValidationError;

    fn try_from(record: ShopRecord) -> Result<Self, Self::Error> {
        let mut shop = Shop::new(record.id, record.locale)?;
        shop.is_default = record.is_default;
        shop.fallback_id = record.fallback_id;
        Ok(shop)
    }
}

impl Shop {
    /// Creates a shop, validating the locale.
    pub fn new(id: ShopId, locale: impl Into<String>) -> Result<Self, ValidationError> {
        let locale = locale.into();
        if locale.trim().is_empty() {
            return Err(ValidationError::empty_field("locale"));
        }
        Ok(Self {
            id,
            locale,
            is_default: false,
            fallback_id: None,
        })
    }

    /// Marks the shop as the default shop.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Sets the translation fallback shop.
    pub fn with_fallback(mut self, fallback_id: ShopId) -> Self {
        self.fallback_id = Some(fallback_id);
        self
    }
}

/// Authenticated customer of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,

    /// Customer group key, e.g. `EK`.
    pub group_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Customer {
    pub fn new(id: CustomerId, group_key: impl Into<String>) -> Self {
        Self {
            id,
            group_key: group_key.into(),
            email: None,
        }
    }
}

/// Translation scope derived from the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationContext {
    pub shop_id: ShopId,
    pub is_default_shop: bool,
    pub fallback_shop_id: Option<ShopId>,
}

/// Everything the checkout knows about the current shop and customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopContext {
    pub shop: Shop,

    /// ISO currency code.
    pub currency: String,

    /// Logged-in customer, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

impl ShopContext {
    /// Creates a context for an anonymous visitor.
    pub fn anonymous(shop: Shop, currency: impl Into<String>) -> Self {
        Self {
            shop,
            currency: currency.into(),
            customer: None,
        }
    }

    /// Attaches an authenticated customer.
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    /// The authenticated customer, if any.
    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    pub fn translation_context(&self) -> TranslationContext {
        TranslationContext {
            shop_id: self.shop.id,
            is_default_shop: self.shop.is_default,
            fallback_shop_id: self.shop.fallback_id,
        }
    }
}
