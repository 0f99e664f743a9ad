//! Common utilities and types used throughout the interrupt simulator.
//!
//! This module provides fundamental building blocks shared across the engine:
//! 1. **Error Handling:** The `SimError` enum covering caller errors and invariant violations.
//! 2. **Randomness:** A small seedable xorshift generator for reproducible workload jitter.

/// Error types for the simulation engine.
pub mod error;

/// Deterministic pseudo-random number generation.
pub mod rng;

pub use error::SimError;
pub use rng::XorShift64;
