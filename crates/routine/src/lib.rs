//! Routine builder domain module.
//!
//! Morning/evening product selections with bundle pricing, implemented purely
//! as deterministic, synchronous domain logic (no IO, no rendering).

pub mod builder;
pub mod event;
pub mod input;
pub mod pricing;
pub mod selection;
pub mod time;

pub use builder::{RoutineBuilder, RoutineView};
pub use event::{ProductAdded, ProductRemoved, RoutineCleared, RoutineEvent};
pub use input::{Activation, DragSession, DragState, DropZone, Key};
pub use pricing::{DiscountTier, PricingSummary};
pub use selection::RoutineSelection;
pub use time::TimeOfDay;
