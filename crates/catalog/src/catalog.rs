//! Catalog provider: the validated set of products a routine can draw from.

use std::collections::HashSet;

use skintilla_core::{DomainError, DomainResult, Entity, Money};

use crate::product::{Product, ProductId};

/// Read-only, validated product list.
///
/// Invariants (checked once, at construction):
/// - ids are unique
/// - prices are positive
/// - steps are positive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id().clone()) {
                return Err(DomainError::validation(format!(
                    "duplicate product id in catalog: {}",
                    product.id
                )));
            }
        }
        tracing::debug!(products = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    /// The storefront's built-in routine catalog.
    pub fn skintilla() -> Self {
        let products = vec![
            builtin(
                "toner",
                "Botanical Toner",
                "Toner",
                42,
                1,
                "Prep & balance skin pH",
                "https://images.unsplash.com/photo-1611930022073-b7a4ba5fcccd?w=120&h=120&fit=crop",
            ),
            builtin(
                "serum",
                "Radiance Serum",
                "Serum",
                68,
                2,
                "Target concerns & brighten",
                "https://images.unsplash.com/photo-1620916566398-39f1143ab7be?w=120&h=120&fit=crop",
            ),
            builtin(
                "eye-cream",
                "Eye Revival Cream",
                "Eye Care",
                58,
                3,
                "Firm & brighten eye area",
                "https://images.unsplash.com/photo-1608248543803-ba4f8c70ae0b?w=120&h=120&fit=crop",
            ),
            builtin(
                "moisturizer",
                "Velvet Moisturizer",
                "Moisturizer",
                54,
                4,
                "Lock in hydration & nourish",
                "https://images.unsplash.com/photo-1556228578-0d85b1a4d571?w=120&h=120&fit=crop",
            ),
        ];
        // Built-in data satisfies every catalog rule; constructed directly.
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Look up a product, failing closed when the id is not in this catalog.
    pub fn require(&self, id: &ProductId) -> DomainResult<&Product> {
        self.get(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id} is not in the catalog")))
    }

    /// Case-insensitive lookup by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn builtin(
    id: &str,
    name: &str,
    category: &str,
    price_dollars: u64,
    step: u32,
    description: &str,
    image_ref: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        price: Money::from_dollars(price_dollars),
        step,
        description: description.to_string(),
        image_ref: image_ref.to_string(),
    }
}
