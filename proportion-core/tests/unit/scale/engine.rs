use super::*;
use crate::{CurveType, DensityMode, DimensionPreset, NamingConvention, OutputUnit};

fn doubling(steps: usize) -> DimensionConfig {
    DimensionConfig {
        base: 8.0,
        steps,
        scale_factor: 2.0,
        curve_type: CurveType::Linear,
        rounding_strategy: RoundingStrategy::Round,
        rounding_precision: 0,
        snap_to_grid: 0.0,
        min_value: 1.0,
        max_value: 1000.0,
        density_multiplier: 1.0,
        optical_compensation: 0.0,
        progression_bias: 0.0,
        ..DimensionConfig::default()
    }
}

fn values(config: &DimensionConfig) -> Vec<f64> {
    generate_scale(config)
        .unwrap()
        .into_iter()
        .map(|t| t.value)
        .collect()
}

#[test]
fn doubling_scale_golden_values() {
    let tokens = generate_scale(&doubling(5)).unwrap();
    let got = tokens.iter().map(|t| t.value).collect::<Vec<_>>();
    assert_eq!(got, [8.0, 16.0, 32.0, 64.0, 128.0]);

    let expected_raw = [8.0, 16.0, 32.0, 64.0, 128.0];
    for (token, raw) in tokens.iter().zip(expected_raw) {
        assert!((token.raw_value - raw).abs() < 1e-4 * raw, "{token:?}");
        assert!(!token.locked);
        assert_eq!(token.fluid_value_expression, None);
        assert_eq!(token.negative_value, None);
    }

    assert_eq!(tokens[1].display_value, "16px");
    assert_eq!(tokens[1].rem_value, 1.0);
    assert_eq!(tokens[1].formula, "8 \u{00d7} 2^1");
    assert_eq!(tokens[0].name, "3xl");
    assert_eq!(tokens[0].css_var, "--space-3xl");
}

#[test]
fn returns_exactly_steps_tokens_within_bounds() {
    for steps in [1, 2, 3, 7, 12, 20, 40] {
        for curve in CurveType::ALL {
            let cfg = DimensionConfig {
                steps,
                curve_type: curve,
                min_value: 2.0,
                max_value: 90.0,
                ..DimensionConfig::default()
            };
            let tokens = generate_scale(&cfg).unwrap();
            assert_eq!(tokens.len(), steps);
            for (i, t) in tokens.iter().enumerate() {
                assert_eq!(t.index, i);
                assert!((2.0..=90.0).contains(&t.value), "{curve:?} {t:?}");
            }
        }
    }
}

#[test]
fn generation_is_idempotent() {
    let cfg = DimensionConfig {
        curve_type: CurveType::EaseInOut,
        progression_bias: 0.4,
        optical_compensation: 0.6,
        fluid: true,
        negative_scale: true,
        harmonic_alignment: true,
        ..DimensionConfig::default()
    };
    assert_eq!(generate_scale(&cfg).unwrap(), generate_scale(&cfg).unwrap());
}

#[test]
fn locked_token_overrides_pipeline() {
    let cfg = DimensionConfig {
        curve_type: CurveType::Exponential,
        snap_to_grid: 5.0,
        rounding_strategy: RoundingStrategy::Ceil,
        harmonic_alignment: true,
        ..doubling(5)
    }
    .with_lock(2, 42.0);
    let tokens = generate_scale(&cfg).unwrap();
    assert_eq!(tokens[2].value, 42.0);
    assert_eq!(tokens[2].raw_value, 42.0);
    assert!(tokens[2].locked);
    assert_eq!(tokens[2].formula, "locked: 42");
    assert!(tokens.iter().filter(|t| t.locked).count() == 1);
}

#[test]
fn locked_value_is_not_clamped() {
    let cfg = doubling(3).with_lock(0, 5000.0).with_lock(1, 0.25);
    let got = values(&cfg);
    assert_eq!(got[0], 5000.0);
    assert_eq!(got[1], 0.25);
}

#[test]
fn locked_token_still_gets_fluid_expression() {
    let cfg = DimensionConfig {
        fluid: true,
        ..doubling(3)
    }
    .with_lock(1, 16.0);
    let tokens = generate_scale(&cfg).unwrap();
    assert_eq!(
        tokens[1].fluid_value_expression.as_deref(),
        Some("clamp(12px, 10.86px + 0.3571vw, 16px)")
    );
    assert!(tokens.iter().all(|t| t.fluid_value_expression.is_some()));
}

#[test]
fn out_of_range_locks_are_ignored() {
    let cfg = doubling(5).with_lock(5, 1.0).with_lock(99, 2.0);
    let tokens = generate_scale(&cfg).unwrap();
    assert_eq!(tokens.len(), 5);
    assert!(tokens.iter().all(|t| !t.locked));
}

#[test]
fn invalid_config_is_rejected_before_generation() {
    let err = generate_scale(&doubling(0)).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn oversized_step_counts_are_rejected_not_allocated() {
    for steps in [crate::MAX_STEPS + 1, usize::MAX] {
        let err = generate_scale(&doubling(steps)).unwrap_err();
        assert!(err.is_validation(), "{steps}");
    }
    assert_eq!(
        generate_scale(&doubling(crate::MAX_STEPS)).unwrap().len(),
        crate::MAX_STEPS
    );
}

#[test]
fn density_multiplier_drives_values_not_density_mode() {
    let cfg = DimensionConfig {
        density_mode: DensityMode::Compact,
        ..doubling(3)
    };
    assert_eq!(values(&cfg), [8.0, 16.0, 32.0]);
}

#[test]
fn single_step_scale_is_base() {
    let tokens = generate_scale(&doubling(1)).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, 8.0);
    assert_eq!(tokens[0].formula, "8");
}

#[test]
fn linear_curve_boundaries_are_exact() {
    let cfg = doubling(5);
    assert_eq!(evaluate_curve_at(0.0, &cfg), 0.0);
    assert_eq!(evaluate_curve_at(1.0, &cfg), 1.0);
    let biased = DimensionConfig {
        progression_bias: -0.8,
        ..cfg
    };
    assert_eq!(evaluate_curve_at(0.0, &biased), 0.0);
    assert_eq!(evaluate_curve_at(1.0, &biased), 1.0);
}

#[test]
fn positions_are_normalized() {
    assert_eq!(position(0, 1), 0.0);
    assert_eq!(position(0, 5), 0.0);
    assert_eq!(position(2, 5), 0.5);
    assert_eq!(position(4, 5), 1.0);
}

#[test]
fn snap_never_collapses_to_zero() {
    let cfg = DimensionConfig {
        base: 1.0,
        steps: 3,
        scale_factor: 1.0,
        rounding_strategy: RoundingStrategy::None,
        snap_to_grid: 4.0,
        min_value: 0.0,
        ..DimensionConfig::default()
    };
    assert_eq!(values(&cfg), [4.0, 4.0, 4.0]);
    assert_eq!(snap_to_grid(1.9, 4.0), 4.0);
    assert_eq!(snap_to_grid(6.1, 4.0), 8.0);
    assert_eq!(snap_to_grid(0.0, 2.0), 2.0);
}

#[test]
fn optical_compensation_boosts_only_small_values() {
    assert_eq!(optical_compensation(2.0, 1.0), 2.5625);
    assert_eq!(optical_compensation(2.0, 0.0), 2.0);
    assert_eq!(optical_compensation(8.0, 1.0), 8.0);
    assert_eq!(optical_compensation(20.0, 1.0), 20.0);

    let cfg = DimensionConfig {
        base: 2.0,
        steps: 1,
        optical_compensation: 1.0,
        rounding_strategy: RoundingStrategy::None,
        ..DimensionConfig::default()
    };
    let tokens = generate_scale(&cfg).unwrap();
    assert_eq!(tokens[0].value, 2.5625);
    assert_eq!(tokens[0].raw_value, 2.5625);
    assert_eq!(tokens[0].display_value, "2.56px");
}

#[test]
fn density_scales_values() {
    let cfg = doubling(3).with_density(DensityMode::Compact);
    assert_eq!(values(&cfg), [6.0, 12.0, 24.0]);
}

#[test]
fn rounding_strategies() {
    assert_eq!(apply_rounding(12.345, RoundingStrategy::None, 0), 12.345);
    assert_eq!(apply_rounding(12.345, RoundingStrategy::Round, 1), 12.3);
    assert_eq!(apply_rounding(12.345, RoundingStrategy::Floor, 0), 12.0);
    assert_eq!(apply_rounding(12.345, RoundingStrategy::Ceil, 0), 13.0);
}

#[test]
fn positive_bias_lifts_middle_steps() {
    let neutral = DimensionConfig {
        rounding_strategy: RoundingStrategy::None,
        ..doubling(5)
    };
    let up = DimensionConfig {
        progression_bias: 0.5,
        ..neutral.clone()
    };
    let down = DimensionConfig {
        progression_bias: -0.5,
        ..neutral.clone()
    };
    let (n, u, d) = (values(&neutral), values(&up), values(&down));
    for i in 1..4 {
        assert!(u[i] > n[i] && n[i] > d[i], "i={i}");
    }
    assert!((u[4] - n[4]).abs() < 1e-6);
}

#[test]
fn ease_in_stays_below_linear() {
    let linear = DimensionConfig {
        rounding_strategy: RoundingStrategy::None,
        ..doubling(5)
    };
    let ease_in = DimensionConfig {
        curve_type: CurveType::EaseIn,
        ..linear.clone()
    };
    let (l, e) = (values(&linear), values(&ease_in));
    for i in 1..4 {
        assert!(e[i] < l[i], "i={i}");
    }
}

#[test]
fn overshooting_custom_curve_stays_in_bounds() {
    let cfg = DimensionConfig {
        curve_type: CurveType::Custom,
        custom_curve: crate::CubicBezier::new(0.3, -1.5, 0.7, 2.5),
        progression_bias: 0.6,
        ..DimensionConfig::default()
    };
    for t in generate_scale(&cfg).unwrap() {
        assert!(t.value.is_finite());
        assert!((cfg.min_value..=cfg.max_value).contains(&t.value), "{t:?}");
    }
}

#[test]
fn harmonic_alignment_lands_on_harmonic_members() {
    let cfg = DimensionPreset::Golden.config();
    for t in generate_scale(&cfg).unwrap() {
        let on_grid = crate::HARMONIC_RATIOS.iter().any(|&ratio| {
            (0..64).any(|k| (cfg.base * ratio.powi(k) - t.value).abs() < 1e-6 * t.value)
        });
        assert!(on_grid, "{t:?}");
        assert!((cfg.min_value..=cfg.max_value).contains(&t.value));
    }
}

#[test]
fn negative_scale_mirrors_tokens() {
    let cfg = DimensionConfig {
        negative_scale: true,
        naming_convention: NamingConvention::Ordinal,
        token_prefix: "gap".to_string(),
        ..doubling(2)
    };
    let tokens = generate_scale(&cfg).unwrap();
    assert_eq!(tokens[1].negative_value, Some(-tokens[1].value));
    assert_eq!(tokens[1].negative_name.as_deref(), Some("-2"));
    assert_eq!(tokens[1].css_var, "--gap-2");
}

#[test]
fn rem_output_formats_tokens() {
    let cfg = DimensionConfig {
        output_unit: OutputUnit::Rem,
        ..doubling(3)
    };
    let tokens = generate_scale(&cfg).unwrap();
    assert_eq!(tokens[0].display_value, "0.5rem");
    assert_eq!(tokens[2].display_value, "2rem");
    assert_eq!(tokens[2].rem_value, 2.0);
}

#[test]
fn every_preset_generates() {
    for preset in DimensionPreset::ALL {
        let cfg = preset.config();
        assert_eq!(generate_scale(&cfg).unwrap().len(), cfg.steps);
    }
}
