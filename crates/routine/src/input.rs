//! Input adapters: drag-and-drop and direct activation.
//!
//! Both paths end in [`RoutineBuilder::add_catalog_product`] on the active tab.
//! Neither adapter checks for duplicates; the builder's add is the only guard.

use skintilla_catalog::Product;
use skintilla_core::DomainResult;

use crate::builder::RoutineBuilder;
use crate::event::RoutineEvent;

/// Where a dragged product was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZone {
    /// The routine drop target.
    Routine,
    /// Anywhere else.
    Outside,
}

/// Drag gesture state: `Idle -> Dragging -> Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        product: Product,
        over_target: bool,
    },
}

/// Tracks a single pointer drag. A drop outside the target behaves like `Idle`.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Whether the pointer is currently over the drop target (highlight state).
    pub fn is_over_target(&self) -> bool {
        matches!(self.state, DragState::Dragging { over_target: true, .. })
    }

    /// Start dragging `product`, replacing any gesture in progress.
    pub fn begin(&mut self, product: &Product) {
        self.state = DragState::Dragging {
            product: product.clone(),
            over_target: false,
        };
    }

    /// Pointer moved over `zone`. Ignored while idle.
    pub fn hover(&mut self, zone: DropZone) {
        if let DragState::Dragging { over_target, .. } = &mut self.state {
            *over_target = zone == DropZone::Routine;
        }
    }

    /// Abandon the gesture (drag end without a drop).
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Release the dragged product over `zone`.
    ///
    /// A drop on the routine target adds the product to the builder's active
    /// routine; a drop elsewhere, or with nothing being dragged, does nothing.
    /// The session is `Idle` afterwards in every case.
    pub fn drop_on(
        &mut self,
        zone: DropZone,
        builder: &mut RoutineBuilder<'_>,
    ) -> DomainResult<Option<RoutineEvent>> {
        let state = std::mem::take(&mut self.state);
        match (state, zone) {
            (DragState::Dragging { product, .. }, DropZone::Routine) => {
                let time = builder.active_tab();
                builder.add_catalog_product(time, &product)
            }
            _ => Ok(None),
        }
    }
}

/// Keyboard keys relevant to activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Other(char),
}

/// A discrete activation of a product in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Click,
    Key(Key),
}

impl Activation {
    /// Clicks, Enter and Space activate; other keys do not.
    pub fn is_activating(self) -> bool {
        matches!(
            self,
            Activation::Click | Activation::Key(Key::Enter) | Activation::Key(Key::Space)
        )
    }

    /// Apply this activation to `product` on the builder's active routine.
    ///
    /// Equivalent to a successful drop.
    pub fn apply(
        self,
        builder: &mut RoutineBuilder<'_>,
        product: &Product,
    ) -> DomainResult<Option<RoutineEvent>> {
        if !self.is_activating() {
            return Ok(None);
        }
        let time = builder.active_tab();
        builder.add_catalog_product(time, product)
    }
}
