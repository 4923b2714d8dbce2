use super::*;

#[test]
fn first_draw_from_seed_one_matches_hand_computed_value() {
    // 1 ^ 1<<13 = 0x2001; >>17 is 0; 0x2001 ^ 0x2001<<5 = 0x42021
    let mut rng = XorShift32::new(1);
    assert_eq!(rng.next_i32(), 0x42021);
    let mut rng = XorShift32::new(1);
    assert_eq!(rng.next_f64(), f64::from(0x42021) / 2_147_483_648.0);
}

#[test]
fn same_seed_same_sequence() {
    let mut a = XorShift32::new(-987_654_321);
    let mut b = XorShift32::new(-987_654_321);
    for _ in 0..1000 {
        assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
    }
}

#[test]
fn values_stay_in_unit_interval() {
    let mut rng = XorShift32::new(42);
    for _ in 0..10_000 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v), "{v}");
    }
}

#[test]
fn zero_seed_is_replaced() {
    let mut rng = XorShift32::new(0);
    assert_eq!(rng.seed(), DEFAULT_SEED);
    rng.reseed(0);
    assert_eq!(rng.seed(), DEFAULT_SEED);
    assert_ne!(rng.next_i32(), 0);
}

#[test]
fn snapshot_restore_replays_draws() {
    let mut rng = XorShift32::new(7);
    rng.next_f64();
    let snap = rng.snapshot();
    let first: Vec<f64> = (0..5).map(|_| rng.next_f64()).collect();
    rng.restore(snap);
    let second: Vec<f64> = (0..5).map(|_| rng.next_f64()).collect();
    assert_eq!(first, second);
}

#[test]
fn entropy_seed_is_non_zero() {
    for _ in 0..32 {
        let rng = XorShift32::from_entropy();
        assert!(rng.seed() > 0 && rng.seed() < 1_000_000_000);
    }
}

#[test]
fn integer_helpers_respect_bounds() {
    let mut rng = XorShift32::new(99);
    for _ in 0..500 {
        assert!(rng.index(3) < 3);
        let v = rng.int_below(60, 40);
        assert!((60..100).contains(&v));
        let f = rng.range_f64(-20.0, 20.0);
        assert!((-20.0..20.0).contains(&f));
    }
}
