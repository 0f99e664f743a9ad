//! Read-only engine state snapshots.
//!
//! A [`Snapshot`] is what the engine hands the host after every command: a
//! self-contained, serializable copy of the full observable state. Hosts render
//! it directly; nothing in a snapshot aliases live engine state, so holding one
//! across further ticks is always safe.

use serde::Serialize;

use crate::context::CpuContext;
use crate::log::EventLogEntry;
use crate::queue::PendingInterrupt;
use crate::sim::scheduler::HandlingState;

/// Read-only view of the full engine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Logical ticks elapsed since reset.
    pub tick: u64,
    /// Whether ticks currently advance the model.
    pub running: bool,
    /// Position within the interrupt-servicing protocol.
    pub handling: HandlingState,
    /// Human-readable CPU status line.
    pub status: String,
    /// Foreground CPU state.
    pub cpu: CpuContext,
    /// Context saved across the current dispatch, if any.
    pub saved_context: Option<CpuContext>,
    /// Pending interrupts in service order.
    pub pending: Vec<PendingInterrupt>,
    /// Event log in generation order.
    pub log: Vec<EventLogEntry>,
    /// Total interrupts raised since reset.
    pub total_raised: u64,
    /// Total interrupts fully handled since reset.
    pub total_handled: u64,
    /// Current queue depth (always `pending.len()`).
    pub pending_count: usize,
}

impl Snapshot {
    /// Serializes the snapshot as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
