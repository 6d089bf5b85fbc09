use std::str::FromStr;

use crate::foundation::{
    error::{ProportionError, ProportionResult},
    math::is_positive_finite,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Parameters of the power-law logo width mapping.
///
/// Exponent landmarks: `0` keeps widths equal, `0.5` equalizes bounding-box area, `0.75`
/// balances perceived weight (`w^¼ × h^¾` constant) and `1` equalizes heights.
pub struct BalancerConfig {
    /// Width fraction of the cell for a square logo (`ratio == 1`).
    pub baseline: f64,
    /// Power applied to the clamped aspect ratio.
    pub exponent: f64,
    /// Lower clamp for extreme portrait ratios.
    pub ratio_min: f64,
    /// Upper clamp for extreme landscape ratios.
    pub ratio_max: f64,
    /// Global size multiplier.
    pub scale: f64,
    /// Safety inset; the rendered box never exceeds `cell × fit_percent` on either axis.
    pub fit_percent: f64,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        BalancerPreset::Optical.config()
    }
}

impl BalancerConfig {
    /// Validate invariants that the sizing formula relies on.
    pub fn validate(&self) -> ProportionResult<()> {
        if !is_positive_finite(self.baseline) {
            return Err(ProportionError::validation("baseline must be finite and > 0"));
        }
        if !self.exponent.is_finite() {
            return Err(ProportionError::validation("exponent must be finite"));
        }
        if !is_positive_finite(self.ratio_min) || !is_positive_finite(self.ratio_max) {
            return Err(ProportionError::validation(
                "ratio_min/ratio_max must be finite and > 0",
            ));
        }
        if self.ratio_min >= self.ratio_max {
            return Err(ProportionError::validation("ratio_min must be < ratio_max"));
        }
        if !is_positive_finite(self.scale) {
            return Err(ProportionError::validation("scale must be finite and > 0"));
        }
        if !(self.fit_percent > 0.0 && self.fit_percent <= 1.0) {
            return Err(ProportionError::validation("fit_percent must be within (0, 1]"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document; missing fields take the default (optical) values.
    pub fn from_reader<R: std::io::Read>(r: R) -> ProportionResult<Self> {
        let config: Self = serde_json::from_reader(r)?;
        config.validate()?;
        Ok(config)
    }

    /// [`BalancerConfig::from_reader`] over an in-memory string.
    pub fn from_json_str(s: &str) -> ProportionResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Copy of this config with a different exponent.
    pub fn with_exponent(self, exponent: f64) -> Self {
        Self { exponent, ..self }
    }

    /// Largest exponent for which a logo at `ratio_max` still fits without the fit-clamp
    /// kicking in: `ln(fit / (baseline × scale)) / ln(ratio_max)`.
    ///
    /// `None` when `ratio_max <= 1` or the baseline already overflows the safe box.
    pub fn max_safe_exponent(&self) -> Option<f64> {
        let headroom = self.fit_percent / (self.baseline * self.scale);
        if self.ratio_max <= 1.0 || !is_positive_finite(headroom) {
            return None;
        }
        Some(headroom.ln() / self.ratio_max.ln())
    }
}

/// Built-in balancer configurations, one per exponent landmark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BalancerPreset {
    /// Same width for every logo (exponent 0); shows the imbalance.
    EqualWidth,
    /// Equal bounding-box area (exponent ½).
    EqualArea,
    /// Perceptual balance (exponent ¾).
    #[default]
    Optical,
    /// Equal heights (exponent 1).
    EqualHeight,
}

impl BalancerPreset {
    /// Every preset, in presentation order.
    pub const ALL: [BalancerPreset; 4] = [
        BalancerPreset::EqualWidth,
        BalancerPreset::EqualArea,
        BalancerPreset::Optical,
        BalancerPreset::EqualHeight,
    ];

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::EqualWidth => "equal-width",
            Self::EqualArea => "equal-area",
            Self::Optical => "optical",
            Self::EqualHeight => "equal-height",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::EqualWidth => "Equal Width",
            Self::EqualArea => "Equal Area",
            Self::Optical => "Optical",
            Self::EqualHeight => "Equal Height",
        }
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        match self {
            Self::EqualWidth => "Same width for every logo, shows the problem (exponent = 0)",
            Self::EqualArea => "Equal bounding-box area (exponent = 1/2)",
            Self::Optical => "Perceptually balanced, w^1/4 x h^3/4 = const (exponent = 3/4)",
            Self::EqualHeight => "All logos share the same height (exponent = 1)",
        }
    }

    /// The configuration this preset stands for.
    pub fn config(self) -> BalancerConfig {
        match self {
            Self::EqualWidth => BalancerConfig {
                baseline: 1.0,
                exponent: 0.0,
                ratio_min: 0.25,
                ratio_max: 6.0,
                scale: 1.0,
                fit_percent: 0.92,
            },
            Self::EqualArea => BalancerConfig {
                baseline: 0.48,
                exponent: 0.5,
                ratio_min: 0.25,
                ratio_max: 6.0,
                scale: 1.0,
                fit_percent: 0.96,
            },
            Self::Optical => BalancerConfig {
                baseline: 0.46,
                exponent: 0.75,
                ratio_min: 0.35,
                ratio_max: 6.0,
                scale: 0.57,
                fit_percent: 0.73,
            },
            Self::EqualHeight => BalancerConfig {
                baseline: 0.48,
                exponent: 1.0,
                ratio_min: 0.25,
                ratio_max: 6.0,
                scale: 1.0,
                fit_percent: 0.96,
            },
        }
    }
}

impl FromStr for BalancerPreset {
    type Err = ProportionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| ProportionError::validation(format!("unknown balancer preset '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/balancer/config.rs"]
mod tests;
