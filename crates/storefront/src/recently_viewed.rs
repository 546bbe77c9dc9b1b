//! Recently viewed products, persisted as a JSON blob in a [`KeyValueStore`].

use serde::{Deserialize, Serialize};

use skintilla_catalog::Product;
use skintilla_core::{DomainError, DomainResult};

use crate::storage::KeyValueStore;

pub const RECENTLY_VIEWED_KEY: &str = "skintilla_recently_viewed";
pub const MAX_RECENT_ITEMS: usize = 6;

/// Display snapshot of a viewed product. Entries are identified by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentProduct {
    pub name: String,
    pub category: String,
    /// Display price as shown on the product card (e.g. "$68").
    pub price: String,
    pub image: String,
}

impl From<&Product> for RecentProduct {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            category: p.category.clone(),
            price: p.price.display_whole(),
            image: p.image_ref.clone(),
        }
    }
}

/// Most-recent-first list, deduplicated by name, capped at [`MAX_RECENT_ITEMS`].
#[derive(Debug)]
pub struct RecentlyViewed<S> {
    store: S,
}

impl<S: KeyValueStore> RecentlyViewed<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Current list. A missing or undecodable blob reads as empty.
    pub fn items(&self) -> Vec<RecentProduct> {
        let Some(raw) = self.store.get(RECENTLY_VIEWED_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable recently-viewed blob");
                Vec::new()
            }
        }
    }

    /// Move `product` to the front (inserting it if new) and persist.
    pub fn record(&mut self, product: RecentProduct) -> DomainResult<Vec<RecentProduct>> {
        let mut items = self.items();
        items.retain(|p| p.name != product.name);
        items.insert(0, product);
        items.truncate(MAX_RECENT_ITEMS);

        let blob = serde_json::to_string(&items)
            .map_err(|e| DomainError::storage(format!("encode recently viewed: {e}")))?;
        self.store.set(RECENTLY_VIEWED_KEY, blob)?;

        tracing::debug!(items = items.len(), "recently viewed updated");
        Ok(items)
    }

    pub fn clear(&mut self) {
        self.store.remove(RECENTLY_VIEWED_KEY);
    }
}
