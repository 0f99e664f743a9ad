//! Priority-ordered pending-interrupt queue.
//!
//! This module implements the container for interrupts that have been raised but
//! not yet fully serviced. It maintains two ordering invariants on every insert:
//! 1. **Priority order:** Entries are sorted ascending by priority (lower value
//!    is more urgent).
//! 2. **FIFO tie-break:** Entries of equal priority keep arrival order.
//!
//! Multiple occurrences of the same kind coexist as distinct entries, each with
//! its own [`PendingId`]. An entry stays queued while its handler runs and is
//! removed by id when handling completes; removal of an absent id is a no-op so
//! completion is idempotent.

use serde::Serialize;

use crate::catalog::InterruptKind;

/// Unique identifier of a queued interrupt occurrence.
///
/// Assigned sequentially by the scheduler; never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PendingId(pub u64);

/// A queued occurrence of an interrupt kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingInterrupt {
    /// Unique occurrence id.
    pub id: PendingId,
    /// The catalog entry this occurrence was raised from.
    pub kind: InterruptKind,
    /// Tick at which the occurrence was raised.
    pub raised_at: u64,
}

/// Priority-ordered sequence of pending interrupts.
#[derive(Debug, Clone, Default)]
pub struct InterruptQueue {
    /// Entries sorted ascending by priority, FIFO among equals.
    entries: Vec<PendingInterrupt>,
}

impl InterruptQueue {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a pending interrupt, re-establishing sort order.
    ///
    /// The insertion point is the first slot past every entry of equal or
    /// higher urgency, which preserves arrival order among equal priorities.
    pub fn enqueue(&mut self, pending: PendingInterrupt) {
        let at = self
            .entries
            .partition_point(|e| e.kind.priority <= pending.kind.priority);
        self.entries.insert(at, pending);
    }

    /// Returns the most urgent entry without removing it.
    pub fn peek(&self) -> Option<&PendingInterrupt> {
        self.entries.first()
    }

    /// Removes the entry with the given id.
    ///
    /// A no-op if no such entry exists, which makes handling completion
    /// idempotent against double-fires.
    pub fn remove(&mut self, id: PendingId) {
        self.entries.retain(|e| e.id != id);
    }

    /// Returns `true` if no interrupts are pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of pending interrupts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entries in service order.
    pub fn entries(&self) -> &[PendingInterrupt] {
        &self.entries
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
