use super::bezier::CubicBezier;

/// Named progression curve used to distribute scale steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurveType {
    /// Even spacing of exponents.
    #[default]
    Linear,
    /// Slow start, steep finish.
    Exponential,
    /// CSS `ease-in`.
    EaseIn,
    /// CSS `ease-out`.
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
    /// User-supplied control pair.
    Custom,
}

impl CurveType {
    /// Every curve type, in presentation order.
    pub const ALL: [CurveType; 6] = [
        CurveType::Linear,
        CurveType::Exponential,
        CurveType::EaseIn,
        CurveType::EaseOut,
        CurveType::EaseInOut,
        CurveType::Custom,
    ];

    /// Control pair for this curve; `custom` is only consulted for [`CurveType::Custom`].
    pub fn control_points(self, custom: CubicBezier) -> CubicBezier {
        match self {
            Self::Linear => CubicBezier::new(0.0, 0.0, 1.0, 1.0),
            Self::Exponential => CubicBezier::new(0.5, 0.0, 1.0, 0.5),
            Self::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0),
            Self::Custom => custom,
        }
    }

    /// Stable identifier (matches the serialized form).
    pub fn id(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Exponential => "exponential",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::Custom => "custom",
        }
    }
}

/// Power-law reshaping of a shaped position: `curved ^ (2 ^ -bias)`.
///
/// Zero bias is the identity. Positive bias pulls positions toward the large end of the
/// scale, negative bias toward the small end. Negative inputs (overshooting custom curves)
/// keep their sign.
pub fn apply_bias(curved: f64, bias: f64) -> f64 {
    if bias == 0.0 {
        return curved;
    }
    let power = 2f64.powf(-bias);
    curved.signum() * curved.abs().powf(power)
}

#[cfg(test)]
#[path = "../../tests/unit/curve/shape.rs"]
mod tests;
