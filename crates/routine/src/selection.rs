//! One routine's selection: an insertion-ordered, duplicate-free product set.

use skintilla_catalog::{Product, ProductId};

use crate::pricing::PricingSummary;

/// Selected products for a single time slot.
///
/// Invariant: a product id appears at most once. Insertion order is kept so
/// removal is stable; display order is always a fresh sort by `step`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutineSelection {
    products: Vec<Product>,
}

impl RoutineSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `product` unless a product with the same id is already selected.
    ///
    /// Returns `true` when the selection changed.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.products.push(product);
        true
    }

    /// Remove by id. Absent ids are a no-op and return `None`.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let pos = self.products.iter().position(|p| &p.id == id)?;
        Some(self.products.remove(pos))
    }

    /// Empty the selection, returning how many products were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.products.len();
        self.products.clear();
        removed
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.iter().any(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn insertion_order(&self) -> &[Product] {
        &self.products
    }

    /// Products in recommended application order (ascending `step`, stable).
    pub fn ordered_by_step(&self) -> Vec<Product> {
        let mut sorted = self.products.clone();
        sorted.sort_by_key(|p| p.step);
        sorted
    }

    pub fn pricing(&self) -> PricingSummary {
        PricingSummary::price(&self.products)
    }
}
