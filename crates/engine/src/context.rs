//! CPU execution context and the saved-context slot.
//!
//! This module models the foreground execution state of the simulated CPU:
//! 1. **Registers:** Program counter, stack pointer, and the AX/BX general registers.
//! 2. **Process identity:** The label of whatever is currently executing.
//! 3. **Save/Restore:** A single-slot store for the context snapshot taken before
//!    entering a handler.
//!
//! The slot holds at most one snapshot, which is what makes the engine
//! non-nesting: it must be empty before a new handler may be entered, and
//! non-empty only while a handler is in progress. Violations surface as
//! [`SimError::DoubleSave`] / [`SimError::NoSavedContext`], both scheduler-bug
//! indicators rather than user-facing errors.

use serde::Serialize;

use crate::catalog::InterruptKind;
use crate::common::error::SimError;
use crate::common::rng::XorShift64;
use crate::config::CpuConfig;

/// Process label of the main program.
pub const MAIN_PROGRAM: &str = "Main Program";

/// The CPU's register and process state at a point in time.
///
/// Exactly one context is live at a time, whether the foreground is the main
/// program or a handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpuContext {
    /// Program counter.
    pub pc: u64,
    /// Stack pointer.
    pub sp: u64,
    /// General register AX.
    pub ax: u64,
    /// General register BX.
    pub bx: u64,
    /// Label of the process currently executing.
    pub process: String,
    /// Number of main-program instructions executed since reset.
    pub instruction_counter: u64,
}

impl CpuContext {
    /// Creates the startup context from the configuration.
    pub fn new(config: &CpuConfig) -> Self {
        Self {
            pc: config.initial_pc,
            sp: config.initial_sp,
            ax: 0,
            bx: 0,
            process: MAIN_PROGRAM.to_owned(),
            instruction_counter: 0,
        }
    }

    /// Returns a pure copy of the context. Does not mutate.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Executes one main-program instruction.
    ///
    /// Increments the instruction counter, advances the program counter by the
    /// configured step, and applies a bounded pseudo-random perturbation to the
    /// general registers to model workload side effects.
    pub fn advance_instruction(&mut self, config: &CpuConfig, rng: &mut XorShift64) {
        self.instruction_counter += 1;
        self.pc = self.pc.wrapping_add(config.pc_step);
        self.ax = self.ax.wrapping_add(rng.next_below(config.ax_jitter));
        self.bx = self.bx.wrapping_add(rng.next_below(config.bx_jitter));
    }

    /// Jumps to an interrupt handler's entry point.
    ///
    /// Sets the program counter to the vector-table slot for `kind` and switches
    /// the process label to the handler's display name.
    pub fn enter_handler(&mut self, kind: &InterruptKind, handler_base: u64) {
        self.pc = handler_base + kind.handler_offset;
        self.process = format!("{} Handler", kind.name);
    }
}

/// Single-slot store for the context saved before entering a handler.
///
/// Occupied exactly while a handler is in progress.
#[derive(Debug, Clone, Default)]
pub struct SavedContextSlot {
    /// The saved snapshot, if any.
    saved: Option<CpuContext>,
}

impl SavedContextSlot {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self { saved: None }
    }

    /// Saves a snapshot of the given context into the slot.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DoubleSave`] if the slot is already occupied.
    pub fn save(&mut self, context: &CpuContext) -> Result<(), SimError> {
        if self.saved.is_some() {
            return Err(SimError::DoubleSave);
        }
        self.saved = Some(context.snapshot());
        Ok(())
    }

    /// Restores the saved snapshot into the given context, emptying the slot.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NoSavedContext`] if the slot is empty.
    pub fn restore(&mut self, context: &mut CpuContext) -> Result<(), SimError> {
        match self.saved.take() {
            Some(saved) => {
                *context = saved;
                Ok(())
            }
            None => Err(SimError::NoSavedContext),
        }
    }

    /// Returns the saved snapshot, if any.
    pub const fn peek(&self) -> Option<&CpuContext> {
        self.saved.as_ref()
    }

    /// Returns `true` if the slot holds a snapshot.
    pub const fn is_occupied(&self) -> bool {
        self.saved.is_some()
    }

    /// Discards any saved snapshot.
    pub fn clear(&mut self) {
        self.saved = None;
    }
}
