use crate::{
    curve::shape::CurveType,
    foundation::math::{fmt_fixed, fmt_num, fmt_padded},
};

use super::config::{DimensionConfig, OutputUnit};

/// `rem_base` with its floor of 1.
pub(crate) fn effective_rem_base(config: &DimensionConfig) -> f64 {
    config.rem_base.max(1.0)
}

/// Display string of `value` in the configured unit.
pub(crate) fn display_value(value: f64, config: &DimensionConfig) -> String {
    match config.output_unit {
        OutputUnit::Rem | OutputUnit::Em => format!(
            "{}{}",
            fmt_fixed(value / effective_rem_base(config), 4),
            config.output_unit.suffix()
        ),
        OutputUnit::Px if value.fract() == 0.0 => format!("{}px", fmt_num(value)),
        OutputUnit::Px => {
            let digits = match config.rounding_precision {
                0 => 2,
                p => p as usize,
            };
            format!("{}px", fmt_fixed(value, digits))
        }
    }
}

/// CSS `clamp()` that grows linearly from `value × fluid_scale_factor` at `viewport_min` to
/// `value` at `viewport_max`.
///
/// An empty or inverted viewport range degrades to the fixed `{value}px`.
pub(crate) fn fluid_expression(value: f64, config: &DimensionConfig) -> String {
    let min_value = value * config.fluid_scale_factor;
    let range = config.viewport_max - config.viewport_min;
    if range <= 0.0 {
        tracing::debug!(
            viewport_min = config.viewport_min,
            viewport_max = config.viewport_max,
            "empty viewport range, emitting fixed value"
        );
        return format!("{}px", fmt_num(value));
    }

    let slope = (value - min_value) / range;
    let intercept = min_value - slope * config.viewport_min;
    let slope_vw = fmt_fixed(slope * 100.0, 4);
    let intercept_px = fmt_fixed(intercept, 2);

    match config.output_unit {
        OutputUnit::Rem => {
            let rem = effective_rem_base(config);
            format!(
                "clamp({}rem, {intercept_px}px + {slope_vw}vw, {}rem)",
                fmt_fixed(min_value / rem, 4),
                fmt_fixed(value / rem, 4),
            )
        }
        OutputUnit::Px | OutputUnit::Em => format!(
            "clamp({}px, {intercept_px}px + {slope_vw}vw, {}px)",
            fmt_fixed(min_value, 2),
            fmt_fixed(value, 2),
        ),
    }
}

/// Human-readable derivation of a generated token.
pub(crate) fn formula(index: usize, config: &DimensionConfig) -> String {
    let base = fmt_num(config.base);
    if config.steps == 1 {
        return base;
    }
    let factor = fmt_num(config.scale_factor);
    if config.curve_type == CurveType::Linear && config.progression_bias == 0.0 {
        return format!("{base} \u{00d7} {factor}^{index}");
    }
    let last = config.steps - 1;
    let t = index as f64 / last as f64;
    format!(
        "{base} \u{00d7} {factor}^(curve({}) \u{00d7} {last})",
        fmt_padded(t, 2)
    )
}

/// Derivation of a locked token.
pub(crate) fn locked_formula(value: f64) -> String {
    format!("locked: {}", fmt_num(value))
}

#[cfg(test)]
#[path = "../../tests/unit/scale/format.rs"]
mod tests;
