use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skintilla_catalog::ProductId;
use skintilla_events::Event;

use crate::time::TimeOfDay;

/// Event: ProductAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAdded {
    pub time: TimeOfDay,
    pub product_id: ProductId,
    pub product_name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRemoved {
    pub time: TimeOfDay,
    pub product_id: ProductId,
    pub product_name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: RoutineCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineCleared {
    pub time: TimeOfDay,
    pub removed: usize,
    pub occurred_at: DateTime<Utc>,
}

/// Emitted once per mutation that changed a routine. No-ops emit nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutineEvent {
    ProductAdded(ProductAdded),
    ProductRemoved(ProductRemoved),
    RoutineCleared(RoutineCleared),
}

impl RoutineEvent {
    pub fn time(&self) -> TimeOfDay {
        match self {
            RoutineEvent::ProductAdded(e) => e.time,
            RoutineEvent::ProductRemoved(e) => e.time,
            RoutineEvent::RoutineCleared(e) => e.time,
        }
    }
}

impl Event for RoutineEvent {
    fn event_type(&self) -> &'static str {
        match self {
            RoutineEvent::ProductAdded(_) => "routine.product.added",
            RoutineEvent::ProductRemoved(_) => "routine.product.removed",
            RoutineEvent::RoutineCleared(_) => "routine.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            RoutineEvent::ProductAdded(e) => e.occurred_at,
            RoutineEvent::ProductRemoved(e) => e.occurred_at,
            RoutineEvent::RoutineCleared(e) => e.occurred_at,
        }
    }

    fn notice(&self) -> String {
        match self {
            RoutineEvent::ProductAdded(e) => {
                format!("{} added to your {} routine", e.product_name, e.time)
            }
            RoutineEvent::ProductRemoved(e) => {
                format!("{} removed from your {} routine", e.product_name, e.time)
            }
            RoutineEvent::RoutineCleared(e) => format!("Your {} routine was cleared", e.time),
        }
    }
}
