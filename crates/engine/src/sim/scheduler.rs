//! Tick-driven dispatch scheduler.
//!
//! The scheduler is the control loop tying the engine together. Each call to
//! [`Simulator::tick`] advances the model by exactly one logical step:
//! 1. **Stopped:** The tick is a no-op.
//! 2. **Servicing:** A handler in progress consumes the tick; completion fires
//!    deterministically once the configured duration has elapsed.
//! 3. **Dispatch:** With work queued and nothing in progress, the most urgent
//!    pending interrupt is dispatched (context save, vector jump).
//! 4. **Normal:** Otherwise one main-program instruction executes.
//!
//! The engine is non-preemptive by construction: an interrupt raised while a
//! handler runs is queued, never dispatched mid-handling, and the single
//! saved-context slot allows exactly one nesting level. All mutation happens
//! inside `tick`, `raise_interrupt`, or `reset`; the engine owns no timer and
//! is driven entirely by the host.

use serde::Serialize;
use tracing::{debug, trace};

use crate::catalog::InterruptCatalog;
use crate::common::error::SimError;
use crate::common::rng::XorShift64;
use crate::config::Config;
use crate::context::{CpuContext, SavedContextSlot};
use crate::log::{EventCategory, EventLog};
use crate::queue::{InterruptQueue, PendingId, PendingInterrupt};
use crate::sim::snapshot::Snapshot;
use crate::stats::SimStats;

/// Where the engine is within the interrupt-servicing protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlingState {
    /// No interrupt is being serviced.
    Idle,
    /// The current tick performed the context save and vector jump.
    Dispatching,
    /// The handler body is executing.
    InHandler,
}

/// The dispatch engine.
///
/// Owns and exclusively mutates the queue, CPU context, saved-context slot, and
/// handling state; appends to the event log and increments the counters. Hosts
/// interact through the command surface (`start`, `stop`, `tick`,
/// `raise_interrupt`, `reset`) and read the [`Snapshot`] returned by each call.
#[derive(Debug)]
pub struct Simulator {
    /// Engine configuration, fixed at construction.
    config: Config,
    /// Registry of raisable interrupt kinds.
    catalog: InterruptCatalog,
    /// Pending interrupts in service order.
    queue: InterruptQueue,
    /// Foreground CPU state.
    context: CpuContext,
    /// Context saved across the current dispatch, if any.
    saved: SavedContextSlot,
    /// Append-only event record.
    log: EventLog,
    /// Monotonic dispatch counters.
    stats: SimStats,
    /// Position within the servicing protocol.
    handling: HandlingState,
    /// The occurrence currently being serviced.
    active: Option<PendingInterrupt>,
    /// Handler ticks left before completion.
    remaining: u64,
    /// Whether ticks currently advance the model.
    running: bool,
    /// Logical ticks elapsed since reset.
    ticks: u64,
    /// Next occurrence id to assign.
    next_pending: u64,
    /// Workload-jitter generator.
    rng: XorShift64,
}

impl Simulator {
    /// Creates an engine with the standard four-kind catalog.
    pub fn new(config: Config) -> Self {
        let catalog = InterruptCatalog::standard(config.dispatch.handler_stride);
        Self::with_catalog(config, catalog)
    }

    /// Creates an engine with a host-supplied catalog.
    pub fn with_catalog(config: Config, catalog: InterruptCatalog) -> Self {
        let context = CpuContext::new(&config.cpu);
        let rng = XorShift64::new(config.cpu.rng_seed);
        Self {
            config,
            catalog,
            queue: InterruptQueue::new(),
            context,
            saved: SavedContextSlot::new(),
            log: EventLog::new(),
            stats: SimStats::new(),
            handling: HandlingState::Idle,
            active: None,
            remaining: 0,
            running: false,
            ticks: 0,
            next_pending: 0,
            rng,
        }
    }

    /// Starts accepting ticks.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.log
                .append(self.ticks, EventCategory::Info, "Simulation started");
        }
    }

    /// Stops accepting ticks. Pending state is kept.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.log
                .append(self.ticks, EventCategory::Info, "Simulation paused");
        }
    }

    /// Advances the simulation by one logical step.
    ///
    /// A no-op while stopped. Otherwise the tick is consumed by exactly one of:
    /// the handler in progress, a new dispatch, or one main-program instruction.
    ///
    /// # Errors
    ///
    /// Propagates [`SimError::DoubleSave`] / [`SimError::NoSavedContext`] if a
    /// context-slot invariant is violated; both indicate a scheduler bug.
    pub fn tick(&mut self) -> Result<Snapshot, SimError> {
        if !self.running {
            return Ok(self.snapshot());
        }
        self.ticks += 1;
        match self.handling {
            HandlingState::Dispatching => {
                self.handling = HandlingState::InHandler;
                self.step_handler()?;
            }
            HandlingState::InHandler => self.step_handler()?,
            HandlingState::Idle => {
                if self.queue.is_empty() {
                    self.execute_instruction();
                } else {
                    self.begin_dispatch()?;
                }
            }
        }
        Ok(self.snapshot())
    }

    /// Raises an interrupt of the given kind.
    ///
    /// Accepted in any state; the effect is deferred to the next dispatch
    /// opportunity. The queue imposes no depth bound.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnknownInterruptKind`] if `id` is not in the
    /// catalog; no state is mutated in that case.
    pub fn raise_interrupt(&mut self, id: &str) -> Result<(), SimError> {
        let Some(kind) = self.catalog.lookup(id) else {
            return Err(SimError::UnknownInterruptKind(id.to_owned()));
        };
        let pending = PendingInterrupt {
            id: PendingId(self.next_pending),
            kind: kind.clone(),
            raised_at: self.ticks,
        };
        self.next_pending += 1;
        debug!(kind = %pending.kind.id, priority = pending.kind.priority, "interrupt raised");
        self.log.append(
            self.ticks,
            EventCategory::Interrupt,
            format!("{} generated", pending.kind.name),
        );
        self.queue.enqueue(pending);
        self.stats.record_raised();
        Ok(())
    }

    /// Returns the engine to its startup state.
    ///
    /// Clears the queue, log, saved context, and counters, reinitializes the
    /// CPU context and jitter generator, and stops the simulation. The
    /// resulting snapshot is identical to a freshly constructed engine's.
    pub fn reset(&mut self) {
        debug!("simulation reset");
        self.queue.clear();
        self.log.clear();
        self.saved.clear();
        self.stats = SimStats::new();
        self.context = CpuContext::new(&self.config.cpu);
        self.handling = HandlingState::Idle;
        self.active = None;
        self.remaining = 0;
        self.running = false;
        self.ticks = 0;
        self.next_pending = 0;
        self.rng = XorShift64::new(self.config.cpu.rng_seed);
    }

    /// Returns a read-only snapshot of the full engine state.
    pub fn snapshot(&self) -> Snapshot {
        let status = if self.running {
            match &self.active {
                Some(active) if self.handling != HandlingState::Idle => {
                    format!("Handling {}", active.kind.name)
                }
                _ => "Running Main Program".to_owned(),
            }
        } else {
            "Idle".to_owned()
        };
        Snapshot {
            tick: self.ticks,
            running: self.running,
            handling: self.handling,
            status,
            cpu: self.context.snapshot(),
            saved_context: self.saved.peek().cloned(),
            pending: self.queue.entries().to_vec(),
            log: self.log.entries().to_vec(),
            total_raised: self.stats.total_raised,
            total_handled: self.stats.total_handled,
            pending_count: self.queue.len(),
        }
    }

    /// Returns whether ticks currently advance the model.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the current position within the servicing protocol.
    pub const fn handling_state(&self) -> HandlingState {
        self.handling
    }

    /// Returns the logical ticks elapsed since reset.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns the interrupt kind catalog.
    pub const fn catalog(&self) -> &InterruptCatalog {
        &self.catalog
    }

    /// Returns the dispatch counters.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Returns the pending-interrupt queue.
    pub const fn queue(&self) -> &InterruptQueue {
        &self.queue
    }

    /// Begins servicing the most urgent pending interrupt.
    ///
    /// Saves the current context, switches the process label, performs the
    /// vector jump, and arms the completion countdown. The dispatch itself
    /// consumes this tick; the handler body runs on subsequent ticks.
    fn begin_dispatch(&mut self) -> Result<(), SimError> {
        let Some(pending) = self.queue.peek().cloned() else {
            return Ok(());
        };
        self.saved.save(&self.context)?;
        self.log
            .append(self.ticks, EventCategory::Context, "Context saved to stack");
        self.context
            .enter_handler(&pending.kind, self.config.dispatch.handler_base);
        self.log.append(
            self.ticks,
            EventCategory::Handler,
            format!("Handling {}", pending.kind.name),
        );
        debug!(
            kind = %pending.kind.id,
            pc = self.context.pc,
            duration = self.config.dispatch.handler_ticks,
            "dispatch begun"
        );
        self.remaining = self.config.dispatch.handler_ticks;
        self.active = Some(pending);
        self.handling = HandlingState::Dispatching;
        Ok(())
    }

    /// Consumes one tick of handler execution, completing when the countdown
    /// reaches zero.
    fn step_handler(&mut self) -> Result<(), SimError> {
        if self.remaining > 0 {
            self.remaining -= 1;
            trace!(remaining = self.remaining, "handler executing");
        }
        if self.remaining == 0 {
            self.complete_active()?;
        }
        Ok(())
    }

    /// Finishes the active dispatch: logs completion, bumps the handled
    /// counter, restores the saved context, and removes the queue entry.
    ///
    /// Idempotent: with no active dispatch this is a no-op, so a double-fire
    /// can neither bump counters twice nor disturb the queue.
    fn complete_active(&mut self) -> Result<(), SimError> {
        let Some(active) = self.active.take() else {
            return Ok(());
        };
        self.log.append(
            self.ticks,
            EventCategory::Handler,
            format!("{} handled", active.kind.name),
        );
        self.stats.record_handled();
        self.saved.restore(&mut self.context)?;
        self.log.append(
            self.ticks,
            EventCategory::Context,
            "Context restored from stack",
        );
        self.queue.remove(active.id);
        self.handling = HandlingState::Idle;
        debug!(kind = %active.kind.id, "dispatch completed");
        Ok(())
    }

    /// Executes one main-program instruction, logging on the sampling cadence.
    fn execute_instruction(&mut self) {
        self.context.advance_instruction(&self.config.cpu, &mut self.rng);
        let interval = self.config.dispatch.sample_interval.max(1);
        if self.context.instruction_counter % interval == 0 {
            self.log.append(
                self.ticks,
                EventCategory::Execution,
                format!("Executing instruction {}", self.context.instruction_counter),
            );
        }
    }
}
