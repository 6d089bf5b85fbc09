use super::*;

#[test]
fn exact_member_is_kept() {
    // 8 × 1.5
    assert_eq!(snap_to_harmonic(12.0, 8.0, 0.0, 1000.0), 12.0);
}

#[test]
fn closest_candidate_across_families_wins() {
    let snapped = snap_to_harmonic(13.0, 8.0, 0.0, 1000.0);
    assert!((snapped - 8.0 * 1.618).abs() < 1e-12);
}

#[test]
fn unison_family_terminates() {
    assert_eq!(snap_to_harmonic(8.0, 8.0, 0.0, 1000.0), 8.0);
}

#[test]
fn value_below_half_base_is_unchanged() {
    assert_eq!(snap_to_harmonic(3.0, 8.0, 0.0, 1000.0), 3.0);
}

#[test]
fn candidates_outside_bounds_are_skipped() {
    for value in [90.0, 97.0, 100.0] {
        let snapped = snap_to_harmonic(value, 8.0, 1.0, 100.0);
        assert!((1.0..=100.0).contains(&snapped), "value={value} snapped={snapped}");
    }
    // only `base` itself would be closer, and it is out of bounds
    assert_eq!(snap_to_harmonic(8.5, 8.0, 8.2, 8.9), 8.5);
}

#[test]
fn extreme_spread_is_bounded() {
    let snapped = snap_to_harmonic(1e300, 1e-300, 0.0, f64::MAX);
    assert!(snapped.is_finite());
}
