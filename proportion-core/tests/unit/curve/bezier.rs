use super::*;

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn endpoints_are_exact() {
    for curve in [
        CubicBezier::new(0.0, 0.0, 1.0, 1.0),
        CubicBezier::new(0.42, 0.0, 0.58, 1.0),
        CubicBezier::new(0.3, 1.8, 0.7, -0.6),
    ] {
        assert_eq!(curve.ease(0.0), 0.0);
        assert_eq!(curve.ease(1.0), 1.0);
        assert_eq!(curve.ease(-0.5), 0.0);
        assert_eq!(curve.ease(1.5), 1.0);
    }
}

#[test]
fn linear_control_pair_is_identity() {
    let curve = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
    for i in 1..20 {
        let t = f64::from(i) / 20.0;
        assert!(approx(curve.ease(t), t, 1e-6), "t={t}");
    }
}

#[test]
fn ease_in_out_is_symmetric_and_monotonic() {
    let curve = CubicBezier::new(0.42, 0.0, 0.58, 1.0);
    assert!(approx(curve.ease(0.5), 0.5, 1e-6));
    assert!(approx(curve.ease(0.25) + curve.ease(0.75), 1.0, 1e-6));
    let mut prev = 0.0;
    for i in 1..=10 {
        let y = curve.ease(f64::from(i) / 10.0);
        assert!(y >= prev);
        prev = y;
    }
}

#[test]
fn ease_in_lags_behind_linear() {
    let curve = CubicBezier::new(0.42, 0.0, 1.0, 1.0);
    assert!(curve.ease(0.25) < 0.25);
    assert!(curve.ease(0.5) < 0.5);
}

#[test]
fn flat_start_slope_still_resolves() {
    // X'(0) == 0 when x1 == 0, so Newton cannot start near the origin.
    let curve = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
    let y = curve.ease(0.001);
    assert!(y.is_finite());
    assert!((0.0..0.1).contains(&y));
}

#[test]
fn overshooting_control_points_leave_unit_range() {
    let curve = CubicBezier::new(0.3, 1.8, 0.7, 1.4);
    assert!(curve.ease(0.5) > 1.0);
}

#[test]
fn array_form_roundtrips_through_serde() {
    let curve: CubicBezier = serde_json::from_str("[0.25, 0.1, 0.75, 0.9]").unwrap();
    assert_eq!(curve, CubicBezier::new(0.25, 0.1, 0.75, 0.9));
    assert_eq!(
        serde_json::to_string(&curve).unwrap(),
        "[0.25,0.1,0.75,0.9]"
    );
}

#[test]
fn validation_rejects_x_outside_unit_range() {
    assert!(CubicBezier::new(0.25, 0.1, 0.75, 0.9).validate().is_ok());
    assert!(CubicBezier::new(0.25, -3.0, 0.75, 4.0).validate().is_ok());
    assert!(CubicBezier::new(-0.1, 0.0, 0.75, 1.0).validate().is_err());
    assert!(CubicBezier::new(0.1, 0.0, 1.2, 1.0).validate().is_err());
    assert!(CubicBezier::new(0.1, f64::NAN, 0.5, 1.0).validate().is_err());
}
