//! Routine builder: two independent selections plus the active-tab selector.

use chrono::{DateTime, Utc};
use serde::Serialize;

use skintilla_catalog::{Catalog, Product, ProductId};
use skintilla_core::{DomainError, DomainResult};

use crate::event::{ProductAdded, ProductRemoved, RoutineCleared, RoutineEvent};
use crate::pricing::PricingSummary;
use crate::selection::RoutineSelection;
use crate::time::TimeOfDay;

/// Read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutineView {
    pub active_time: TimeOfDay,
    /// Sorted ascending by `step`.
    pub selection: Vec<Product>,
    pub pricing: PricingSummary,
}

/// Morning and evening routines over one catalog.
///
/// Each time slot is its own `RoutineSelection`, so the no-duplicate invariant
/// is scoped per routine and mutating one never touches the other. Every add,
/// whether from a drag-drop or a direct activation, funnels into
/// [`RoutineBuilder::add_product`] / [`RoutineBuilder::add_catalog_product`].
#[derive(Debug, Clone)]
pub struct RoutineBuilder<'c> {
    catalog: &'c Catalog,
    morning: RoutineSelection,
    evening: RoutineSelection,
    active: TimeOfDay,
    clock: fn() -> DateTime<Utc>,
}

impl<'c> RoutineBuilder<'c> {
    /// Empty routines, morning tab active.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            morning: RoutineSelection::new(),
            evening: RoutineSelection::new(),
            active: TimeOfDay::Morning,
            clock: Utc::now,
        }
    }

    /// Override the timestamp source used for emitted events.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn active_tab(&self) -> TimeOfDay {
        self.active
    }

    /// Switch the routine being viewed/edited. Neither routine's contents change.
    pub fn set_active_tab(&mut self, time: TimeOfDay) {
        if self.active != time {
            tracing::debug!(from = %self.active, to = %time, "routine tab switched");
        }
        self.active = time;
    }

    pub fn selection(&self, time: TimeOfDay) -> &RoutineSelection {
        match time {
            TimeOfDay::Morning => &self.morning,
            TimeOfDay::Evening => &self.evening,
        }
    }

    fn selection_mut(&mut self, time: TimeOfDay) -> &mut RoutineSelection {
        match time {
            TimeOfDay::Morning => &mut self.morning,
            TimeOfDay::Evening => &mut self.evening,
        }
    }

    /// Add a catalog product by id.
    ///
    /// - unknown id: `Err(DomainError::NotFound)`
    /// - already selected: `Ok(None)`
    /// - otherwise: `Ok(Some(ProductAdded))`
    pub fn add_product(
        &mut self,
        time: TimeOfDay,
        id: &ProductId,
    ) -> DomainResult<Option<RoutineEvent>> {
        let product = match self.catalog.require(id) {
            Ok(p) => p.clone(),
            Err(err) => {
                tracing::warn!(product_id = %id, %time, "rejected add of product outside catalog");
                return Err(err);
            }
        };
        Ok(self.insert(time, product))
    }

    /// Add a product value, which must match the catalog's record for its id.
    pub fn add_catalog_product(
        &mut self,
        time: TimeOfDay,
        product: &Product,
    ) -> DomainResult<Option<RoutineEvent>> {
        match self.catalog.get(&product.id) {
            Some(known) if known == product => Ok(self.insert(time, product.clone())),
            Some(_) => {
                tracing::warn!(product_id = %product.id, %time, "rejected add of altered product record");
                Err(DomainError::invariant(format!(
                    "product {} does not match the catalog record",
                    product.id
                )))
            }
            None => {
                tracing::warn!(product_id = %product.id, %time, "rejected add of product outside catalog");
                Err(DomainError::not_found(format!(
                    "product {} is not in the catalog",
                    product.id
                )))
            }
        }
    }

    fn insert(&mut self, time: TimeOfDay, product: Product) -> Option<RoutineEvent> {
        let product_id = product.id.clone();
        let product_name = product.name.clone();

        if !self.selection_mut(time).add(product) {
            tracing::debug!(%product_id, %time, "product already in routine");
            return None;
        }

        tracing::debug!(%product_id, %time, items = self.selection(time).len(), "product added to routine");
        Some(RoutineEvent::ProductAdded(ProductAdded {
            time,
            product_id,
            product_name,
            occurred_at: (self.clock)(),
        }))
    }

    /// Remove by id. Absent ids are a no-op.
    pub fn remove_product(&mut self, time: TimeOfDay, id: &ProductId) -> Option<RoutineEvent> {
        let removed = self.selection_mut(time).remove(id)?;
        tracing::debug!(product_id = %id, %time, "product removed from routine");
        Some(RoutineEvent::ProductRemoved(ProductRemoved {
            time,
            product_id: removed.id,
            product_name: removed.name,
            occurred_at: (self.clock)(),
        }))
    }

    /// Empty one routine. Clearing an empty routine emits nothing.
    pub fn clear(&mut self, time: TimeOfDay) -> Option<RoutineEvent> {
        let removed = self.selection_mut(time).clear();
        if removed == 0 {
            return None;
        }
        tracing::debug!(%time, removed, "routine cleared");
        Some(RoutineEvent::RoutineCleared(RoutineCleared {
            time,
            removed,
            occurred_at: (self.clock)(),
        }))
    }

    pub fn add_to_active(&mut self, id: &ProductId) -> DomainResult<Option<RoutineEvent>> {
        self.add_product(self.active, id)
    }

    pub fn remove_from_active(&mut self, id: &ProductId) -> Option<RoutineEvent> {
        self.remove_product(self.active, id)
    }

    pub fn clear_active(&mut self) -> Option<RoutineEvent> {
        self.clear(self.active)
    }

    pub fn pricing(&self, time: TimeOfDay) -> PricingSummary {
        self.selection(time).pricing()
    }

    /// Snapshot of the active routine.
    pub fn view(&self) -> RoutineView {
        self.view_for(self.active)
    }

    /// Snapshot of any routine, labelled with that routine's time.
    pub fn view_for(&self, time: TimeOfDay) -> RoutineView {
        let selection = self.selection(time);
        RoutineView {
            active_time: time,
            selection: selection.ordered_by_step(),
            pricing: selection.pricing(),
        }
    }

    /// Catalog products not yet in `time`'s routine, in catalog order.
    pub fn available_products(&self, time: TimeOfDay) -> Vec<&'c Product> {
        let selection = self.selection(time);
        self.catalog
            .products()
            .iter()
            .filter(|p| !selection.contains(&p.id))
            .collect()
    }
}
