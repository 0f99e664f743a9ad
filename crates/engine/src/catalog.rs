//! Interrupt kind catalog.
//!
//! The catalog is the static registry of interrupt kinds the engine knows about:
//! each entry fixes an identifier, a display name, a service priority, and the
//! handler's vector-table metadata. It is built once at startup and never mutated;
//! dispatch logic only ever reads it. The standard catalog carries the four
//! classic teaching examples (exception, timer, keyboard, disk I/O), but hosts
//! may construct their own without touching the scheduler.

use serde::Serialize;

/// A registered interrupt kind.
///
/// Immutable catalog entry. `priority` ranks service order: lower values are
/// more urgent, with 0 the most urgent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterruptKind {
    /// Stable identifier used by hosts to raise this kind (e.g. `"timer"`).
    pub id: String,
    /// Human-readable name (e.g. `"Timer Interrupt"`).
    pub name: String,
    /// Service priority; lower value means serviced first.
    pub priority: u64,
    /// Display label of the service routine (e.g. `"Timer_Handler()"`).
    pub handler: String,
    /// Offset of the handler's entry point within the vector table.
    pub handler_offset: u64,
}

/// Static registry of interrupt kinds.
///
/// Fixed at construction; one entry per id. Later entries with a duplicate id
/// are dropped at construction time so lookup stays unambiguous.
#[derive(Debug, Clone)]
pub struct InterruptCatalog {
    /// Registered kinds in registration order.
    kinds: Vec<InterruptKind>,
}

impl InterruptCatalog {
    /// Builds a catalog from the given entries.
    ///
    /// # Arguments
    ///
    /// * `kinds` - Catalog entries; for duplicate ids only the first is kept.
    pub fn new(kinds: Vec<InterruptKind>) -> Self {
        let mut unique: Vec<InterruptKind> = Vec::with_capacity(kinds.len());
        for kind in kinds {
            if !unique.iter().any(|k| k.id == kind.id) {
                unique.push(kind);
            }
        }
        Self { kinds: unique }
    }

    /// Builds the standard four-entry teaching catalog.
    ///
    /// Exception (priority 0), timer (1), keyboard (2), and disk I/O (3), with
    /// vector offsets derived as `priority * stride`.
    ///
    /// # Arguments
    ///
    /// * `stride` - Vector-table stride between handler entry points.
    pub fn standard(stride: u64) -> Self {
        let entry = |id: &str, name: &str, priority: u64, handler: &str| InterruptKind {
            id: id.to_owned(),
            name: name.to_owned(),
            priority,
            handler: handler.to_owned(),
            handler_offset: priority * stride,
        };
        Self::new(vec![
            entry("exception", "Exception", 0, "Exception_Handler()"),
            entry("timer", "Timer Interrupt", 1, "Timer_Handler()"),
            entry("keyboard", "Keyboard Interrupt", 2, "Keyboard_Handler()"),
            entry("disk", "Disk I/O Interrupt", 3, "Disk_Handler()"),
        ])
    }

    /// Looks up a kind by id.
    ///
    /// # Returns
    ///
    /// The catalog entry, or `None` if the id is not registered.
    pub fn lookup(&self, id: &str) -> Option<&InterruptKind> {
        self.kinds.iter().find(|k| k.id == id)
    }

    /// Returns the registered kinds in registration order.
    pub fn kinds(&self) -> &[InterruptKind] {
        &self.kinds
    }

    /// Returns the number of registered kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns `true` if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
