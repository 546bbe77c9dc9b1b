//! Domain events and the sinks that receive them.

pub mod event;
pub mod sink;

pub use event::Event;
pub use sink::{EventSink, LoggingSink, RecordingSink};
