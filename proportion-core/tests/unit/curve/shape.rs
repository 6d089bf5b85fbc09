use super::*;

#[test]
fn presets_ignore_custom_pair() {
    let custom = CubicBezier::new(0.1, 0.2, 0.3, 0.4);
    assert_eq!(
        CurveType::Linear.control_points(custom),
        CubicBezier::new(0.0, 0.0, 1.0, 1.0)
    );
    assert_eq!(
        CurveType::Exponential.control_points(custom),
        CubicBezier::new(0.5, 0.0, 1.0, 0.5)
    );
    assert_eq!(CurveType::Custom.control_points(custom), custom);
}

#[test]
fn ids_match_serialized_names() {
    for curve in CurveType::ALL {
        let json = serde_json::to_string(&curve).unwrap();
        assert_eq!(json, format!("\"{}\"", curve.id()));
    }
}

#[test]
fn zero_bias_is_identity() {
    for t in [0.0, 0.2, 0.5, 1.0, 1.3] {
        assert_eq!(apply_bias(t, 0.0), t);
    }
}

#[test]
fn bias_direction() {
    // positive bias -> power < 1 -> values pushed up
    assert!(apply_bias(0.5, 1.0) > 0.5);
    assert!(apply_bias(0.5, -1.0) < 0.5);
    assert_eq!(apply_bias(0.25, -1.0), 0.0625);
    assert_eq!(apply_bias(1.0, 0.7), 1.0);
}

#[test]
fn bias_keeps_negative_overshoot_finite() {
    let v = apply_bias(-0.25, -1.0);
    assert!(v.is_finite());
    assert_eq!(v, -0.0625);
}
