use crate::{
    curve::{bezier::CubicBezier, shape::apply_bias},
    foundation::{
        error::ProportionResult,
        math::{ceil_to, clamp_soft, floor_to, round_to},
    },
};

use super::{
    config::{DimensionConfig, RoundingStrategy},
    format::{display_value, effective_rem_base, fluid_expression, formula, locked_formula},
    harmonic::snap_to_harmonic,
    naming::token_name,
    token::GeneratedToken,
};

/// Values below this many units receive optical compensation.
pub const OPTICAL_THRESHOLD: f64 = 8.0;

/// Generate the full token scale for `config`.
///
/// The config is validated first; a valid config never fails past that point. Locks on
/// indices `>= steps` address no token and are ignored.
#[tracing::instrument(skip(config), fields(steps = config.steps, curve = config.curve_type.id()))]
pub fn generate_scale(config: &DimensionConfig) -> ProportionResult<Vec<GeneratedToken>> {
    config.validate()?;

    let ignored = config.locked_tokens.range(config.steps..).count();
    if ignored > 0 {
        tracing::debug!(ignored, "locks beyond the last step ignored");
    }

    let curve = config.curve();
    let tokens = (0..config.steps)
        .map(|index| match config.locked_tokens.get(&index) {
            Some(&value) => build_token(index, value, value, locked_formula(value), true, config),
            None => {
                let (raw_value, value) = generate_value(index, curve, config);
                build_token(index, raw_value, value, formula(index, config), false, config)
            }
        })
        .collect();
    Ok(tokens)
}

/// Shaped and biased position at progress `t`, as shown by a curve editor.
pub fn evaluate_curve_at(t: f64, config: &DimensionConfig) -> f64 {
    apply_bias(config.curve().ease(t), config.progression_bias)
}

/// Normalized position of `index`; `0` for a single-step scale.
pub(crate) fn position(index: usize, steps: usize) -> f64 {
    if steps <= 1 {
        return 0.0;
    }
    index as f64 / (steps - 1) as f64
}

/// Returns `(raw_value, value)` for an unlocked index.
fn generate_value(index: usize, curve: CubicBezier, config: &DimensionConfig) -> (f64, f64) {
    let t = position(index, config.steps);
    let biased = apply_bias(curve.ease(t), config.progression_bias);

    let max_exponent = config.steps.saturating_sub(1).max(1) as f64;
    let grown = config.base * config.scale_factor.powf(biased * max_exponent);
    let raw_value =
        optical_compensation(grown, config.optical_compensation) * config.density_multiplier;

    let mut value = apply_rounding(
        raw_value,
        config.rounding_strategy,
        config.rounding_precision,
    );
    if config.snap_to_grid > 0.0 {
        value = snap_to_grid(value, config.snap_to_grid);
    }
    value = clamp_soft(value, config.min_value, config.max_value);
    if config.harmonic_alignment {
        value = snap_to_harmonic(value, config.base, config.min_value, config.max_value);
    }
    (raw_value, value)
}

/// Inflate values under [`OPTICAL_THRESHOLD`]; the boost fades out quadratically toward it.
pub(crate) fn optical_compensation(value: f64, compensation: f64) -> f64 {
    if compensation == 0.0 || value >= OPTICAL_THRESHOLD {
        return value;
    }
    let gap = (OPTICAL_THRESHOLD - value) / OPTICAL_THRESHOLD;
    value * (1.0 + compensation * gap * gap * 0.5)
}

pub(crate) fn apply_rounding(value: f64, strategy: RoundingStrategy, precision: u32) -> f64 {
    match strategy {
        RoundingStrategy::None => value,
        RoundingStrategy::Round => round_to(value, precision),
        RoundingStrategy::Floor => floor_to(value, precision),
        RoundingStrategy::Ceil => ceil_to(value, precision),
    }
}

/// Nearest multiple of `grid`, never zero.
pub(crate) fn snap_to_grid(value: f64, grid: f64) -> f64 {
    let snapped = (value / grid).round() * grid;
    if snapped == 0.0 { grid } else { snapped }
}

fn build_token(
    index: usize,
    raw_value: f64,
    value: f64,
    formula: String,
    locked: bool,
    config: &DimensionConfig,
) -> GeneratedToken {
    let name = token_name(
        index,
        config.steps,
        config.naming_convention,
        &config.custom_names,
    );
    GeneratedToken {
        index,
        raw_value,
        value,
        display_value: display_value(value, config),
        rem_value: value / effective_rem_base(config),
        formula,
        fluid_value_expression: config.fluid.then(|| fluid_expression(value, config)),
        css_var: format!("--{}-{name}", config.token_prefix),
        locked,
        negative_value: config.negative_scale.then_some(-value),
        negative_name: config.negative_scale.then(|| format!("-{name}")),
        name,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/engine.rs"]
mod tests;
