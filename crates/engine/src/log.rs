//! Append-only simulation event log.
//!
//! The log records what the engine did, in causal order, for the host to render.
//! Entries are never mutated or removed once appended; only a full reset clears
//! the log. Growth is bounded by construction: normal execution is sampled (only
//! every Nth instruction is logged) and each dispatch produces a fixed handful
//! of entries.

use serde::Serialize;

/// Category of a logged event, used by hosts for styling and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// An interrupt was raised.
    Interrupt,
    /// A context was saved or restored.
    Context,
    /// Handler entry or completion.
    Handler,
    /// Sampled main-program instruction execution.
    Execution,
    /// Engine lifecycle (start, stop, reset).
    Info,
}

/// A single logged event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventLogEntry {
    /// Logical tick at which the event was generated.
    pub tick: u64,
    /// Event category.
    pub category: EventCategory,
    /// Human-readable description.
    pub message: String,
}

/// Append-only, causally ordered record of simulation events.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    /// Entries in generation order.
    entries: Vec<EventLogEntry>,
}

impl EventLog {
    /// Creates an empty log.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an event. Never fails.
    pub fn append(&mut self, tick: u64, category: EventCategory, message: impl Into<String>) {
        self.entries.push(EventLogEntry {
            tick,
            category,
            message: message.into(),
        });
    }

    /// Returns the full ordered sequence of entries.
    pub fn entries(&self) -> &[EventLogEntry] {
        &self.entries
    }

    /// Returns the number of logged entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries. Only called on full reset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
