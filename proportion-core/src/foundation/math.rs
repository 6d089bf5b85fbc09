/// Denominator floor used wherever a geometric ratio could divide by ~0.
pub(crate) const DIV_EPSILON: f64 = 1e-6;

/// Clamp without the ordering precondition of [`f64::clamp`].
///
/// When `lo > hi` the upper bound wins, and a NaN `value` resolves to `lo`.
#[inline]
pub(crate) fn clamp_soft(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

#[inline]
pub(crate) fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Round half away from zero at `digits` decimal places.
pub(crate) fn round_to(value: f64, digits: u32) -> f64 {
    let factor = decimal_factor(digits);
    (value * factor).round() / factor
}

pub(crate) fn floor_to(value: f64, digits: u32) -> f64 {
    let factor = decimal_factor(digits);
    (value * factor).floor() / factor
}

pub(crate) fn ceil_to(value: f64, digits: u32) -> f64 {
    let factor = decimal_factor(digits);
    (value * factor).ceil() / factor
}

fn decimal_factor(digits: u32) -> f64 {
    10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX))
}

/// Round to `digits` decimals, ties away from zero: `2.125` gives `2.13`, where
/// `format!("{:.2}")` would give `2.12`.
pub(crate) fn fixed(value: f64, digits: usize) -> f64 {
    let rounded = round_to(value, u32::try_from(digits).unwrap_or(u32::MAX));
    if rounded.is_finite() {
        normalize_zero(rounded)
    } else {
        value
    }
}

/// [`fixed`] rendered with exactly `digits` decimals, trailing zeros kept (`0.50`).
pub(crate) fn fmt_padded(value: f64, digits: usize) -> String {
    format!("{:.digits$}", fixed(value, digits))
}

/// Shortest round-trip rendering of `value` (`8`, `1.5`, `0.0625`), never `-0`.
pub(crate) fn fmt_num(value: f64) -> String {
    format!("{}", normalize_zero(value))
}

/// `fmt_num(fixed(value, digits))`.
pub(crate) fn fmt_fixed(value: f64, digits: usize) -> String {
    fmt_num(fixed(value, digits))
}

#[inline]
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
