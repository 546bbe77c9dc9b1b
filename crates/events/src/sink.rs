//! Event sinks (single-threaded fan-out targets).
//!
//! Domain types return events instead of publishing them; the caller decides
//! where they go. Sinks are synchronous and owned by the caller.

use crate::Event;

/// Receives events emitted by domain operations.
pub trait EventSink<E: Event> {
    fn publish(&mut self, event: E);

    /// Publish an optional event (no-op mutations produce `None`).
    fn publish_opt(&mut self, event: Option<E>) {
        if let Some(event) = event {
            self.publish(event);
        }
    }
}

/// Sink that keeps every event in memory, in publish order.
#[derive(Debug, Clone)]
pub struct RecordingSink<E> {
    events: Vec<E>,
}

impl<E> RecordingSink<E> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn events(&self) -> &[E] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take all recorded events, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }
}

impl<E> Default for RecordingSink<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> EventSink<E> for RecordingSink<E> {
    fn publish(&mut self, event: E) {
        self.events.push(event);
    }
}

/// Sink that turns each event into an `info` log line carrying its notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl<E: Event> EventSink<E> for LoggingSink {
    fn publish(&mut self, event: E) {
        tracing::info!(
            event_type = event.event_type(),
            version = event.version(),
            occurred_at = %event.occurred_at(),
            "{}",
            event.notice()
        );
    }
}
