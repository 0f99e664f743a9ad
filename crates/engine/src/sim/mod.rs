//! Dispatch scheduling and state snapshots.
//!
//! Provides the tick-driven scheduler that ties the catalog, queue, context,
//! log, and counters together, plus the read-only snapshot type hosts render.

pub mod scheduler;
pub mod snapshot;

pub use scheduler::{HandlingState, Simulator};
pub use snapshot::Snapshot;
