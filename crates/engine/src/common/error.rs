//! Engine error definitions.
//!
//! This module defines the error handling surface of the simulator. It distinguishes:
//! 1. **Caller Errors:** Recoverable mistakes such as raising an unregistered interrupt
//!    kind; the engine rejects the call without mutating any state.
//! 2. **Invariant Violations:** Context-slot misuse that the dispatch state machine is
//!    supposed to make impossible; seeing one of these indicates a scheduler bug.

use thiserror::Error;

/// Errors produced by the simulation engine.
///
/// Every public operation either completes fully or returns one of these before
/// mutating anything, so the engine stays usable after any error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The caller raised an interrupt id that is not registered in the catalog.
    ///
    /// Recoverable: no state is mutated and the engine accepts further commands.
    #[error("unknown interrupt kind: {0:?}")]
    UnknownInterruptKind(String),

    /// A context save was attempted while the saved-context slot was occupied.
    ///
    /// The scheduler is non-nesting by construction, so this can only arise
    /// from a scheduler bug. Treated as fatal in tests.
    #[error("context save attempted while the saved-context slot is occupied")]
    DoubleSave,

    /// A context restore was attempted with an empty saved-context slot.
    ///
    /// Like [`SimError::DoubleSave`], this indicates a scheduler bug rather
    /// than a caller mistake.
    #[error("context restore attempted with an empty saved-context slot")]
    NoSavedContext,
}
