//! Jitter generator unit tests.

use irqsim_core::common::rng::XorShift64;

#[test]
fn equal_seeds_produce_equal_sequences() {
    let mut a = XorShift64::new(42);
    let mut b = XorShift64::new(42);
    for _ in 0..100 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = XorShift64::new(1);
    let mut b = XorShift64::new(2);
    let a_seq: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
    let b_seq: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
    assert_ne!(a_seq, b_seq);
}

#[test]
fn zero_seed_does_not_lock_up() {
    let mut rng = XorShift64::new(0);
    assert_ne!(rng.next_u64(), 0);
    assert_ne!(rng.next_u64(), rng.next_u64());
}

#[test]
fn next_below_respects_bound() {
    let mut rng = XorShift64::new(9);
    for _ in 0..1000 {
        assert!(rng.next_below(10) < 10);
    }
}

#[test]
fn next_below_zero_bound_is_zero() {
    let mut rng = XorShift64::new(9);
    assert_eq!(rng.next_below(0), 0);
}
