//! Bundle pricing: a pure function of the selected products.

use serde::{Deserialize, Serialize};

use skintilla_catalog::Product;
use skintilla_core::{Money, ValueObject};

/// Bundle discount tier, chosen solely by the number of distinct products.
///
/// Thresholds are inclusive lower bounds: exactly 2 products is a pair,
/// 3 or more is a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountTier {
    None,
    Pair,
    Bundle,
}

impl DiscountTier {
    pub const PAIR_MIN_ITEMS: usize = 2;
    pub const BUNDLE_MIN_ITEMS: usize = 3;

    pub fn for_count(count: usize) -> Self {
        if count >= Self::BUNDLE_MIN_ITEMS {
            DiscountTier::Bundle
        } else if count >= Self::PAIR_MIN_ITEMS {
            DiscountTier::Pair
        } else {
            DiscountTier::None
        }
    }

    /// Discount in whole percent (0, 10 or 15).
    pub fn percent(self) -> u32 {
        match self {
            DiscountTier::None => 0,
            DiscountTier::Pair => 10,
            DiscountTier::Bundle => 15,
        }
    }

    /// Discount as a fraction (0.0, 0.10 or 0.15).
    pub fn rate(self) -> f64 {
        f64::from(self.percent()) / 100.0
    }

    pub fn is_discounted(self) -> bool {
        self != DiscountTier::None
    }
}

/// Derived pricing for one routine. Never stored; recompute after each mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSummary {
    pub item_count: usize,
    pub subtotal: Money,
    pub tier: DiscountTier,
    pub total: Money,
    pub savings: Money,
}

impl ValueObject for PricingSummary {}

impl PricingSummary {
    pub const EMPTY: PricingSummary = PricingSummary {
        item_count: 0,
        subtotal: Money::ZERO,
        tier: DiscountTier::None,
        total: Money::ZERO,
        savings: Money::ZERO,
    };

    /// Price a selection.
    ///
    /// `total` is rounded half-up to the cent and `savings` is derived from it,
    /// so `total + savings == subtotal` holds exactly.
    pub fn price<'a, I>(products: I) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let (item_count, subtotal) = products
            .into_iter()
            .fold((0usize, Money::ZERO), |(n, sum), p| (n + 1, sum + p.price));

        let tier = DiscountTier::for_count(item_count);
        let total = subtotal.discounted_by_percent(tier.percent());

        Self {
            item_count,
            subtotal,
            tier,
            total,
            savings: subtotal - total,
        }
    }

    pub fn discount_rate(&self) -> f64 {
        self.tier.rate()
    }

    /// Summary line label, e.g. "Subtotal (3 products)".
    pub fn subtotal_label(&self) -> String {
        let plural = if self.item_count == 1 { "" } else { "s" };
        format!("Subtotal ({} product{plural})", self.item_count)
    }

    /// Discount line label, or `None` when no bundle discount applies.
    pub fn discount_label(&self) -> Option<String> {
        self.tier
            .is_discounted()
            .then(|| format!("Bundle Discount ({}% off)", self.tier.percent()))
    }
}

impl Default for PricingSummary {
    fn default() -> Self {
        Self::EMPTY
    }
}
