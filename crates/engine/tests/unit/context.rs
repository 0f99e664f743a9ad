//! CPU context and saved-context slot unit tests.
//!
//! Verifies the save/restore round trip, the slot's occupancy invariants, the
//! instruction-advance behavior, and the vector-table jump.

use pretty_assertions::assert_eq;

use irqsim_core::SimError;
use irqsim_core::catalog::InterruptCatalog;
use irqsim_core::common::rng::XorShift64;
use irqsim_core::config::CpuConfig;
use irqsim_core::context::{CpuContext, MAIN_PROGRAM, SavedContextSlot};

fn context() -> CpuContext {
    CpuContext::new(&CpuConfig::default())
}

// ══════════════════════════════════════════════════════════
// 1. Startup state
// ══════════════════════════════════════════════════════════

#[test]
fn startup_context_matches_config() {
    let ctx = context();
    assert_eq!(ctx.pc, 1000);
    assert_eq!(ctx.sp, 2000);
    assert_eq!(ctx.ax, 0);
    assert_eq!(ctx.bx, 0);
    assert_eq!(ctx.process, MAIN_PROGRAM);
    assert_eq!(ctx.instruction_counter, 0);
}

// ══════════════════════════════════════════════════════════
// 2. Save/restore round trip
// ══════════════════════════════════════════════════════════

#[test]
fn save_then_restore_is_bit_identical() {
    let config = CpuConfig::default();
    let mut rng = XorShift64::new(config.rng_seed);
    let mut ctx = context();
    for _ in 0..7 {
        ctx.advance_instruction(&config, &mut rng);
    }
    let before = ctx.snapshot();

    let mut slot = SavedContextSlot::new();
    slot.save(&ctx).unwrap();
    assert!(slot.is_occupied());

    // Clobber the live context, then restore.
    ctx.pc = 0xDEAD;
    ctx.process = "Timer Interrupt Handler".to_owned();
    slot.restore(&mut ctx).unwrap();

    assert_eq!(ctx, before);
    assert!(!slot.is_occupied());
}

#[test]
fn double_save_is_rejected() {
    let ctx = context();
    let mut slot = SavedContextSlot::new();
    slot.save(&ctx).unwrap();
    assert_eq!(slot.save(&ctx), Err(SimError::DoubleSave));
}

#[test]
fn restore_from_empty_slot_is_rejected() {
    let mut ctx = context();
    let mut slot = SavedContextSlot::new();
    assert_eq!(slot.restore(&mut ctx), Err(SimError::NoSavedContext));
}

#[test]
fn failed_restore_leaves_context_untouched() {
    let mut ctx = context();
    let before = ctx.snapshot();
    let mut slot = SavedContextSlot::new();
    let _ = slot.restore(&mut ctx);
    assert_eq!(ctx, before);
}

#[test]
fn clear_discards_saved_snapshot() {
    let ctx = context();
    let mut slot = SavedContextSlot::new();
    slot.save(&ctx).unwrap();
    slot.clear();
    assert!(!slot.is_occupied());
}

// ══════════════════════════════════════════════════════════
// 3. Instruction advance
// ══════════════════════════════════════════════════════════

#[test]
fn advance_increments_counter_and_pc() {
    let config = CpuConfig::default();
    let mut rng = XorShift64::new(1);
    let mut ctx = context();
    ctx.advance_instruction(&config, &mut rng);
    assert_eq!(ctx.instruction_counter, 1);
    assert_eq!(ctx.pc, 1004);
}

#[test]
fn advance_is_deterministic_for_equal_seeds() {
    let config = CpuConfig::default();
    let mut a = context();
    let mut b = context();
    let mut rng_a = XorShift64::new(99);
    let mut rng_b = XorShift64::new(99);
    for _ in 0..50 {
        a.advance_instruction(&config, &mut rng_a);
        b.advance_instruction(&config, &mut rng_b);
    }
    assert_eq!(a, b);
}

#[test]
fn register_jitter_stays_within_bounds() {
    let config = CpuConfig::default();
    let mut rng = XorShift64::new(7);
    let mut ctx = context();
    let mut prev_ax = ctx.ax;
    let mut prev_bx = ctx.bx;
    for _ in 0..200 {
        ctx.advance_instruction(&config, &mut rng);
        assert!(ctx.ax - prev_ax < config.ax_jitter);
        assert!(ctx.bx - prev_bx < config.bx_jitter);
        prev_ax = ctx.ax;
        prev_bx = ctx.bx;
    }
}

#[test]
fn zero_jitter_bound_freezes_registers() {
    let config = CpuConfig {
        ax_jitter: 0,
        bx_jitter: 0,
        ..CpuConfig::default()
    };
    let mut rng = XorShift64::new(7);
    let mut ctx = CpuContext::new(&config);
    for _ in 0..10 {
        ctx.advance_instruction(&config, &mut rng);
    }
    assert_eq!(ctx.ax, 0);
    assert_eq!(ctx.bx, 0);
    assert_eq!(ctx.instruction_counter, 10);
}

// ══════════════════════════════════════════════════════════
// 4. Vector jump
// ══════════════════════════════════════════════════════════

#[test]
fn enter_handler_jumps_to_vector_slot() {
    let catalog = InterruptCatalog::standard(100);
    let mut ctx = context();

    ctx.enter_handler(catalog.lookup("disk").unwrap(), 5000);
    assert_eq!(ctx.pc, 5300);
    assert_eq!(ctx.process, "Disk I/O Interrupt Handler");

    ctx.enter_handler(catalog.lookup("exception").unwrap(), 5000);
    assert_eq!(ctx.pc, 5000);
}
