//! Dispatch statistics counters and reporting.
//!
//! This module tracks the engine's monotonic dispatch counters:
//! 1. **Raised:** Total interrupts raised since reset.
//! 2. **Handled:** Total interrupts whose handling completed since reset.
//!
//! The pending count is deliberately not stored here: it is always derived from
//! the queue length at read time, so the two can never drift apart. Both stored
//! counters are non-decreasing until a reset zeroes them.

use serde::Serialize;

/// Monotonic dispatch counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total interrupts raised since reset.
    pub total_raised: u64,
    /// Total interrupts fully handled since reset.
    pub total_handled: u64,
}

impl SimStats {
    /// Creates zeroed counters.
    pub const fn new() -> Self {
        Self {
            total_raised: 0,
            total_handled: 0,
        }
    }

    /// Records a raised interrupt.
    pub const fn record_raised(&mut self) {
        self.total_raised += 1;
    }

    /// Records a completed handling.
    pub const fn record_handled(&mut self) {
        self.total_handled += 1;
    }

    /// Prints a statistics report to stdout.
    ///
    /// # Arguments
    ///
    /// * `pending` - Current queue depth, derived by the caller from the queue.
    pub fn print(&self, pending: usize) {
        println!("\n==========================================================");
        println!("INTERRUPT SIMULATION STATISTICS");
        println!("==========================================================");
        println!("interrupts.raised        {}", self.total_raised);
        println!("interrupts.handled       {}", self.total_handled);
        println!("interrupts.pending       {pending}");
        println!("==========================================================");
    }
}
