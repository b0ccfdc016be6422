//! Strongly-typed identifier value objects.
//!
//! Storefront records are keyed by positive integer ids assigned by the
//! database. Each identifier is a distinct newtype so a customer id can never
//! be passed where a category id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Generates a positive integer identifier newtype.
macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Creates a new id, returning error unless positive.
            pub fn new(id: i32) -> Result<Self, ValidationError> {
                if id <= 0 {
                    return Err(ValidationError::out_of_range(
                        $field,
                        1,
                        i32::MAX as i64,
                        id as i64,
                    ));
                }
                Ok(Self(id))
            }

            /// Returns the raw database value.
            pub fn value(&self) -> i32 {
                self.0
            }
        }

        impl TryFrom<i32> for $name {
            type Error = ValidationError;

            fn try_from(id: i32) -> Result<Self, Self::Error> {
                Self::new(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> i32 {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = s
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| ValidationError::invalid_format($field, e.to_string()))?;
                Self::new(id)
            }
        }
    };
}

integer_id!(
    /// Identifier of a registered customer account.
    CustomerId,
    "customer_id"
);

integer_id!(
    /// Identifier of a configured payment method.
    PaymentMethodId,
    "payment_method_id"
);

integer_id!(
    /// Identifier of a catalog category.
    CategoryId,
    "category_id"
);

integer_id!(
    /// Identifier of a shop (sub-shop or language shop).
    ShopId,
    "shop_id"
);
