//! Configuration system for the interrupt simulator.
//!
//! This module defines all configuration structures used to parameterize the
//! engine. It provides:
//! 1. **Defaults:** Baseline constants (initial register values, vector table layout,
//!    handler duration, log sampling cadence, jitter bounds).
//! 2. **Structures:** Hierarchical config split into CPU and dispatch sections.
//!
//! Configuration is supplied as JSON by the host or via `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the baseline model when not explicitly overridden
/// by host-supplied configuration.
mod defaults {
    /// Program counter value at startup and after reset.
    pub const INITIAL_PC: u64 = 1000;

    /// Stack pointer value at startup and after reset.
    pub const INITIAL_SP: u64 = 2000;

    /// Program counter advance per executed instruction (fixed-width encoding).
    pub const PC_STEP: u64 = 4;

    /// Base address of the simulated interrupt vector table.
    ///
    /// A handler's entry point is this base plus the kind's vector offset.
    pub const HANDLER_BASE: u64 = 5000;

    /// Vector-table stride between handler entry points.
    ///
    /// The standard catalog derives each kind's offset as `priority * stride`.
    pub const HANDLER_STRIDE: u64 = 100;

    /// Simulated handler duration in ticks, not counting the dispatch tick.
    ///
    /// Models a handler body that takes a couple of scheduling steps to run.
    pub const HANDLER_TICKS: u64 = 2;

    /// Sampling cadence for "executing instruction" log entries.
    ///
    /// Only every Nth instruction is logged, bounding event-log growth while
    /// the queue is empty.
    pub const SAMPLE_INTERVAL: u64 = 5;

    /// Exclusive upper bound on the per-instruction AX register perturbation.
    pub const AX_JITTER: u64 = 10;

    /// Exclusive upper bound on the per-instruction BX register perturbation.
    pub const BX_JITTER: u64 = 5;

    /// Seed for the workload-jitter generator.
    pub const RNG_SEED: u64 = 123_456_789;
}

/// Root configuration structure containing all engine settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use irqsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.cpu.initial_pc, 1000);
/// assert_eq!(config.dispatch.handler_ticks, 2);
/// ```
///
/// Deserializing from JSON (typical host usage):
///
/// ```
/// use irqsim_core::config::Config;
///
/// let json = r#"{
///     "cpu": {
///         "initial_pc": 4096,
///         "rng_seed": 7
///     },
///     "dispatch": {
///         "handler_ticks": 4,
///         "sample_interval": 10
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.cpu.initial_pc, 4096);
/// assert_eq!(config.cpu.initial_sp, 2000);
/// assert_eq!(config.dispatch.handler_ticks, 4);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// CPU execution-context parameters
    #[serde(default)]
    pub cpu: CpuConfig,
    /// Dispatch scheduler parameters
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

/// CPU execution-context configuration.
///
/// Controls the startup register values, the per-instruction program counter
/// step, and the bounded pseudo-random register perturbation.
#[derive(Debug, Clone, Deserialize)]
pub struct CpuConfig {
    /// Initial program counter
    #[serde(default = "CpuConfig::default_initial_pc")]
    pub initial_pc: u64,

    /// Initial stack pointer
    #[serde(default = "CpuConfig::default_initial_sp")]
    pub initial_sp: u64,

    /// Program counter advance per instruction
    #[serde(default = "CpuConfig::default_pc_step")]
    pub pc_step: u64,

    /// Exclusive upper bound on per-instruction AX perturbation (0 disables)
    #[serde(default = "CpuConfig::default_ax_jitter")]
    pub ax_jitter: u64,

    /// Exclusive upper bound on per-instruction BX perturbation (0 disables)
    #[serde(default = "CpuConfig::default_bx_jitter")]
    pub bx_jitter: u64,

    /// Seed for the workload-jitter generator
    #[serde(default = "CpuConfig::default_rng_seed")]
    pub rng_seed: u64,
}

impl CpuConfig {
    /// Returns the default initial program counter.
    const fn default_initial_pc() -> u64 {
        defaults::INITIAL_PC
    }

    /// Returns the default initial stack pointer.
    const fn default_initial_sp() -> u64 {
        defaults::INITIAL_SP
    }

    /// Returns the default program counter step per instruction.
    const fn default_pc_step() -> u64 {
        defaults::PC_STEP
    }

    /// Returns the default AX perturbation bound.
    const fn default_ax_jitter() -> u64 {
        defaults::AX_JITTER
    }

    /// Returns the default BX perturbation bound.
    const fn default_bx_jitter() -> u64 {
        defaults::BX_JITTER
    }

    /// Returns the default jitter generator seed.
    const fn default_rng_seed() -> u64 {
        defaults::RNG_SEED
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            initial_pc: defaults::INITIAL_PC,
            initial_sp: defaults::INITIAL_SP,
            pc_step: defaults::PC_STEP,
            ax_jitter: defaults::AX_JITTER,
            bx_jitter: defaults::BX_JITTER,
            rng_seed: defaults::RNG_SEED,
        }
    }
}

/// Dispatch scheduler configuration.
///
/// Controls the simulated vector table layout, handler duration, and the
/// event-log sampling cadence for normal execution.
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    /// Vector table base address
    #[serde(default = "DispatchConfig::default_handler_base")]
    pub handler_base: u64,

    /// Vector table stride between handler entry points
    #[serde(default = "DispatchConfig::default_handler_stride")]
    pub handler_stride: u64,

    /// Handler duration in ticks (after the dispatch tick)
    #[serde(default = "DispatchConfig::default_handler_ticks")]
    pub handler_ticks: u64,

    /// Log every Nth executed instruction
    #[serde(default = "DispatchConfig::default_sample_interval")]
    pub sample_interval: u64,
}

impl DispatchConfig {
    /// Returns the default vector table base address.
    const fn default_handler_base() -> u64 {
        defaults::HANDLER_BASE
    }

    /// Returns the default vector table stride.
    const fn default_handler_stride() -> u64 {
        defaults::HANDLER_STRIDE
    }

    /// Returns the default handler duration in ticks.
    const fn default_handler_ticks() -> u64 {
        defaults::HANDLER_TICKS
    }

    /// Returns the default instruction-log sampling cadence.
    const fn default_sample_interval() -> u64 {
        defaults::SAMPLE_INTERVAL
    }
}

impl Default for DispatchConfig {
    /// Creates a default dispatch configuration.
    ///
    /// Uses the standard vector table layout, a two-tick handler body, and
    /// the every-fifth-instruction log cadence.
    fn default() -> Self {
        Self {
            handler_base: defaults::HANDLER_BASE,
            handler_stride: defaults::HANDLER_STRIDE,
            handler_ticks: defaults::HANDLER_TICKS,
            sample_interval: defaults::SAMPLE_INTERVAL,
        }
    }
}
