//! Counter-consistency and error-surface tests.
//!
//! Verifies the `handled <= raised` and `pending == raised - handled`
//! invariants across mixed command sequences, and that a rejected raise
//! mutates nothing.

use irqsim_core::{Config, SimError, Simulator};

use crate::common::{SERVICE_TICKS, raise, started_sim, tick_n};

#[test]
fn raised_counts_every_occurrence() {
    let mut sim = started_sim();
    raise(&mut sim, "timer");
    raise(&mut sim, "timer");
    raise(&mut sim, "disk");
    assert_eq!(sim.stats().total_raised, 3);
}

#[test]
fn handled_never_exceeds_raised() {
    let mut sim = started_sim();
    raise(&mut sim, "keyboard");
    raise(&mut sim, "exception");

    for _ in 0..40 {
        let snapshot = sim.tick().unwrap();
        assert!(snapshot.total_handled <= snapshot.total_raised);
    }
}

#[test]
fn pending_equals_raised_minus_handled() {
    let mut sim = started_sim();
    raise(&mut sim, "disk");
    raise(&mut sim, "timer");
    let _ = tick_n(&mut sim, SERVICE_TICKS);
    raise(&mut sim, "keyboard");

    let snapshot = sim.snapshot();
    assert_eq!(snapshot.total_raised, 3);
    assert_eq!(snapshot.total_handled, 1);
    assert_eq!(
        snapshot.pending_count as u64,
        snapshot.total_raised - snapshot.total_handled
    );
}

#[test]
fn pending_count_matches_queue_length() {
    let mut sim = started_sim();
    raise(&mut sim, "timer");
    raise(&mut sim, "disk");
    let snapshot = sim.snapshot();
    assert_eq!(snapshot.pending_count, snapshot.pending.len());
    assert_eq!(snapshot.pending_count, sim.queue().len());
}

// ══════════════════════════════════════════════════════════
// Error surface
// ══════════════════════════════════════════════════════════

#[test]
fn unknown_kind_is_rejected() {
    let mut sim = started_sim();
    let err = sim.raise_interrupt("network").unwrap_err();
    assert_eq!(err, SimError::UnknownInterruptKind("network".to_owned()));
}

#[test]
fn rejected_raise_mutates_nothing() {
    let mut sim = started_sim();
    raise(&mut sim, "timer");
    let before = sim.snapshot();

    assert!(sim.raise_interrupt("bogus").is_err());
    assert_eq!(sim.snapshot(), before);
}

#[test]
fn engine_stays_usable_after_error() {
    let mut sim = Simulator::new(Config::default());
    sim.start();
    let _ = sim.raise_interrupt("bogus");

    raise(&mut sim, "exception");
    let done = tick_n(&mut sim, SERVICE_TICKS);
    assert_eq!(done.total_handled, 1);
}
