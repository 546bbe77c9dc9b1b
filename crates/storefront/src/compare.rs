//! Product comparison: pick two or three products and line them up.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use skintilla_core::{DomainError, DomainResult, Money};

/// A product as shown in the comparison drawer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableProduct {
    pub name: String,
    pub category: String,
    pub price: Money,
    /// Free-form size label, e.g. `"30ml / 1 fl oz"`.
    pub size: String,
    pub image: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub benefits: Vec<String>,
    pub skin_types: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
}

impl ComparableProduct {
    /// Millilitres from the first number in the size label.
    ///
    /// A label without a number (or with `0`) counts as 1 ml.
    pub fn size_ml(&self) -> u64 {
        let digits: String = self
            .size
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse::<u64>().ok().filter(|ml| *ml > 0).unwrap_or(1)
    }

    /// Orders by price per ml without floating point.
    fn cmp_price_per_ml(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.price.cents()) * u128::from(other.size_ml());
        let rhs = u128::from(other.price.cents()) * u128::from(self.size_ml());
        lhs.cmp(&rhs)
    }
}

/// The storefront's comparable product line.
pub fn lineup() -> Vec<ComparableProduct> {
    vec![
        comparable(
            "Radiance Serum",
            "Face Serum",
            68,
            "30ml / 1 fl oz",
            "https://images.unsplash.com/photo-1608248543803-ba4f8c70ae0b?w=600&h=800&fit=crop&q=80",
            "Vitamin C & rosehip oil blend for luminous, even-toned skin",
            &["Vitamin C", "Rosehip Oil", "Hyaluronic Acid", "Niacinamide", "Squalane", "Vitamin E"],
            &["Brightens complexion", "Evens skin tone", "Antioxidant shield", "Lightweight formula"],
            &["Normal", "Combination", "Oily", "Dull"],
            4.8,
            142,
        ),
        comparable(
            "Velvet Moisturizer",
            "Face Cream",
            54,
            "50ml / 1.7 fl oz",
            "https://images.unsplash.com/photo-1556228578-8c89e6adf883?w=600&h=800&fit=crop&q=80",
            "Rich shea butter & hyaluronic acid for deep, lasting hydration",
            &["Shea Butter", "Hyaluronic Acid", "Jojoba Oil", "Ceramides", "Aloe Vera", "Green Tea"],
            &["72-hour hydration", "Barrier repair", "Silky-smooth finish", "Non-comedogenic"],
            &["Dry", "Normal", "Sensitive", "Mature"],
            4.9,
            198,
        ),
        comparable(
            "Botanical Toner",
            "Face Toner",
            42,
            "120ml / 4 fl oz",
            "https://images.unsplash.com/photo-1598440947619-2c35fc9aa908?w=600&h=800&fit=crop&q=80",
            "Chamomile & witch hazel to soothe, balance, and refine pores",
            &["Chamomile", "Witch Hazel", "Rose Water", "Glycerin", "Centella Asiatica", "Lavender Oil"],
            &["Pore refinement", "pH balancing", "Soothing formula", "Prep for serums"],
            &["All", "Sensitive", "Combination", "Oily"],
            4.7,
            116,
        ),
        comparable(
            "Eye Revival Cream",
            "Eye Care",
            58,
            "15ml / 0.5 fl oz",
            "https://images.unsplash.com/photo-1571781926291-c477ebfd024b?w=600&h=800&fit=crop&q=80",
            "Peptide-rich formula to brighten dark circles and firm delicate skin",
            &["Peptide Complex", "Caffeine", "Vitamin K", "Retinol", "Cucumber Extract", "Argan Oil"],
            &["Reduces dark circles", "Firms eye area", "Minimizes fine lines", "De-puffs morning eyes"],
            &["All", "Mature", "Tired", "Sensitive"],
            4.6,
            87,
        ),
    ]
}

/// Case-insensitive lookup in [`lineup`].
pub fn find_comparable(name: &str) -> Option<ComparableProduct> {
    lineup()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

#[allow(clippy::too_many_arguments)]
fn comparable(
    name: &str,
    category: &str,
    price_dollars: u64,
    size: &str,
    image: &str,
    description: &str,
    ingredients: &[&str],
    benefits: &[&str],
    skin_types: &[&str],
    rating: f32,
    review_count: u32,
) -> ComparableProduct {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    ComparableProduct {
        name: name.to_string(),
        category: category.to_string(),
        price: Money::from_dollars(price_dollars),
        size: size.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        ingredients: owned(ingredients),
        benefits: owned(benefits),
        skin_types: owned(skin_types),
        rating,
        review_count,
    }
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareToggle {
    Added,
    Removed,
}

/// Products picked for comparison.
///
/// Invariants: names are unique and at most [`CompareSelection::MAX_PRODUCTS`]
/// are selected. Insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompareSelection {
    selected: Vec<ComparableProduct>,
}

impl CompareSelection {
    pub const MAX_PRODUCTS: usize = 3;
    pub const MIN_TO_COMPARE: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `product` if it is selected by name, otherwise add it.
    ///
    /// Adding to a full selection fails with `InvariantViolation` and leaves
    /// the selection unchanged.
    pub fn toggle(&mut self, product: ComparableProduct) -> DomainResult<CompareToggle> {
        if self.remove(&product.name).is_some() {
            return Ok(CompareToggle::Removed);
        }
        if self.selected.len() >= Self::MAX_PRODUCTS {
            tracing::warn!(product = %product.name, "comparison is full");
            return Err(DomainError::invariant(format!(
                "Maximum {} products can be compared at once",
                Self::MAX_PRODUCTS
            )));
        }
        tracing::debug!(product = %product.name, "added to comparison");
        self.selected.push(product);
        Ok(CompareToggle::Added)
    }

    /// Remove by name. Absent names are a no-op.
    pub fn remove(&mut self, name: &str) -> Option<ComparableProduct> {
        let pos = self.selected.iter().position(|p| p.name == name)?;
        tracing::debug!(product = name, "removed from comparison");
        Some(self.selected.remove(pos))
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|p| p.name == name)
    }

    /// Empty the selection, returning how many products were removed.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.selected.len();
        self.selected.clear();
        removed
    }

    pub fn selected(&self) -> &[ComparableProduct] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn can_compare(&self) -> bool {
        self.selected.len() >= Self::MIN_TO_COMPARE
    }

    /// Side-by-side view, available once enough products are selected.
    pub fn comparison(&self) -> Option<Comparison> {
        if !self.can_compare() {
            return None;
        }
        Comparison::of(&self.selected)
    }
}

/// Derived side-by-side data for a set of products.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub products: Vec<String>,
    /// Sorted union across the compared products.
    pub ingredients: Vec<String>,
    pub benefits: Vec<String>,
    pub skin_types: Vec<String>,
    /// Lowest price per ml. Ties go to the later product.
    pub best_value: String,
    /// Highest rating. Ties go to the later product.
    pub highest_rated: String,
}

impl Comparison {
    /// `None` for an empty slice.
    pub fn of(products: &[ComparableProduct]) -> Option<Self> {
        let first = products.first()?;

        let mut best_value = first;
        let mut highest_rated = first;
        for product in &products[1..] {
            if best_value.cmp_price_per_ml(product) != Ordering::Less {
                best_value = product;
            }
            if highest_rated.rating <= product.rating {
                highest_rated = product;
            }
        }

        Some(Self {
            products: products.iter().map(|p| p.name.clone()).collect(),
            ingredients: sorted_union(products, |p| &p.ingredients),
            benefits: sorted_union(products, |p| &p.benefits),
            skin_types: sorted_union(products, |p| &p.skin_types),
            best_value: best_value.name.clone(),
            highest_rated: highest_rated.name.clone(),
        })
    }
}

fn sorted_union(
    products: &[ComparableProduct],
    field: impl Fn(&ComparableProduct) -> &Vec<String>,
) -> Vec<String> {
    products
        .iter()
        .flat_map(|p| field(p).iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
