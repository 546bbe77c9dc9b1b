use serde::{Deserialize, Serialize};

use skintilla_core::{DomainError, DomainResult, Entity, Money};

/// Product identifier (a short, stable slug such as `"eye-cream"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Immutable catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Money,
    /// Recommended application order (1 = first).
    pub step: u32,
    pub description: String,
    pub image_ref: String,
}

impl Product {
    /// Highest accepted unit price; keeps routine sums far from `u64` overflow.
    pub const MAX_PRICE: Money = Money::from_dollars(1_000_000);

    /// Check the per-record catalog rules.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(DomainError::validation("product id cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: name cannot be empty",
                self.id
            )));
        }
        if self.price.is_zero() {
            return Err(DomainError::validation(format!(
                "product {}: price must be positive",
                self.id
            )));
        }
        if self.price > Self::MAX_PRICE {
            return Err(DomainError::validation(format!(
                "product {}: price exceeds {}",
                self.id,
                Self::MAX_PRICE
            )));
        }
        if self.step == 0 {
            return Err(DomainError::validation(format!(
                "product {}: step must be positive",
                self.id
            )));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::product;
    use super::*;

    #[test]
    fn valid_product_passes() {
        assert!(product("toner", 42, 1).validate().is_ok());
    }

    #[test]
    fn rejects_zero_price() {
        let err = product("freebie", 0, 1).validate().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("price")),
            _ => panic!("Expected Validation error for zero price"),
        }
    }

    #[test]
    fn rejects_price_above_ceiling() {
        let mut p = product("gold-mask", 1, 1);
        p.price = Money::from_cents(u64::MAX / 50);
        let err = p.validate().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("exceeds")),
            _ => panic!("Expected Validation error for oversized price"),
        }

        p.price = Product::MAX_PRICE;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_zero_step() {
        let err = product("serum", 68, 0).validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_blank_id_and_name() {
        assert!(product("  ", 10, 1).validate().is_err());

        let mut p = product("mask", 10, 1);
        p.name = " ".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn product_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ProductId::new("eye-cream")).unwrap();
        assert_eq!(json, "\"eye-cream\"");
    }
}
