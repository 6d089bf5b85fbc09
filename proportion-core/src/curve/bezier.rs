use kurbo::{CubicBez, ParamCurve, ParamCurveDeriv};

use crate::foundation::error::{ProportionError, ProportionResult};

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 64;
const SOLVE_EPSILON: f64 = 1e-7;

/// Control pair of a CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
///
/// The end points are fixed at `(0, 0)` and `(1, 1)`. Serialized as a 4-element array.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct CubicBezier {
    /// First control point X, in `[0, 1]`.
    pub x1: f64,
    /// First control point Y (may overshoot).
    pub y1: f64,
    /// Second control point X, in `[0, 1]`.
    pub x2: f64,
    /// Second control point Y (may overshoot).
    pub y2: f64,
}

impl CubicBezier {
    /// Build a control pair.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Reject control pairs that do not describe a function of X.
    pub fn validate(&self) -> ProportionResult<()> {
        for (name, v) in [("x1", self.x1), ("y1", self.y1), ("x2", self.x2), ("y2", self.y2)] {
            if !v.is_finite() {
                return Err(ProportionError::validation(format!(
                    "cubic bezier {name} must be finite"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.x1) || !(0.0..=1.0).contains(&self.x2) {
            return Err(ProportionError::validation(
                "cubic bezier x1/x2 must be within [0, 1]",
            ));
        }
        Ok(())
    }

    /// Evaluate the timing function at progress `t`.
    ///
    /// Inputs at or outside the end points map to exactly `0` or `1`. Inside, the curve
    /// parameter whose X equals `t` is solved first, then its Y is returned; Y may leave
    /// `[0, 1]` for overshooting control points.
    pub fn ease(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let curve = self.to_kurbo();
        curve.eval(solve_param_for_x(&curve, t)).y
    }

    fn to_kurbo(self) -> CubicBez {
        CubicBez::new(
            (0.0, 0.0),
            (self.x1, self.y1),
            (self.x2, self.y2),
            (1.0, 1.0),
        )
    }
}

impl From<[f64; 4]> for CubicBezier {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<CubicBezier> for [f64; 4] {
    fn from(value: CubicBezier) -> Self {
        [value.x1, value.y1, value.x2, value.y2]
    }
}

/// Newton-Raphson on X(s) = x, bisection over `[0, 1]` when the slope flattens out or
/// Newton does not settle.
fn solve_param_for_x(curve: &CubicBez, x: f64) -> f64 {
    let deriv = curve.deriv();
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = curve.eval(s).x - x;
        if err.abs() < SOLVE_EPSILON {
            return s;
        }
        let slope = deriv.eval(s).x;
        if slope.abs() < SOLVE_EPSILON {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let sx = curve.eval(s).x;
        if (sx - x).abs() < SOLVE_EPSILON {
            return s;
        }
        if x > sx {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/curve/bezier.rs"]
mod tests;
