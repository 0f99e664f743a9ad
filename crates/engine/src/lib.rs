//! Interrupt-handling simulator library.
//!
//! This crate implements a deterministic, tick-driven model of how a single-core
//! CPU services asynchronous interrupt requests. It provides:
//! 1. **Catalog:** Registry of interrupt kinds with fixed priorities and vector offsets.
//! 2. **Queue:** Priority-ordered pending-interrupt container with FIFO tie-breaking.
//! 3. **Context:** CPU register/program-counter state and a single saved-context slot.
//! 4. **Scheduler:** The tick loop deciding between instruction execution and dispatch.
//! 5. **Bookkeeping:** Append-only event log and monotonic dispatch counters.
//!
//! The engine owns no timer: the host drives [`Simulator::tick`] on whatever cadence
//! it likes and renders the returned [`Snapshot`]. Given the same command sequence
//! and RNG seed, every run is bit-for-bit reproducible.

/// Common types (errors, deterministic pseudo-random generator).
pub mod common;
/// Simulator configuration (defaults, CPU and dispatch parameters).
pub mod config;
/// Interrupt kind catalog (fixed priorities, handler metadata).
pub mod catalog;
/// CPU execution context and the saved-context slot.
pub mod context;
/// Append-only simulation event log.
pub mod log;
/// Priority-ordered pending-interrupt queue.
pub mod queue;
/// Dispatch scheduler and read-only state snapshots.
pub mod sim;
/// Dispatch statistics counters and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Engine error type (unknown kinds, context-slot invariant violations).
pub use crate::common::error::SimError;
/// The dispatch engine; construct with `Simulator::new`.
pub use crate::sim::Simulator;
/// Read-only view of engine state returned by every `tick`.
pub use crate::sim::Snapshot;
