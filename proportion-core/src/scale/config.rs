use std::collections::BTreeMap;
use std::str::FromStr;

use crate::{
    curve::{bezier::CubicBezier, shape::CurveType},
    foundation::{
        error::{ProportionError, ProportionResult},
        math::is_positive_finite,
    },
};

use super::naming::NamingConvention;

/// Largest accepted `steps`.
pub const MAX_STEPS: usize = 1024;

/// Highest accepted `rounding_precision`.
pub const MAX_ROUNDING_PRECISION: u32 = 10;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Input of the dimension scale engine.
///
/// Treated as an immutable value: "changing" a field means building a new config (struct
/// update syntax or the `with_*` helpers). Every field defaults, so partial JSON documents
/// are accepted.
pub struct DimensionConfig {
    /// Value of the first step before shaping, `> 0`.
    pub base: f64,
    /// Number of tokens to generate, within `[1, MAX_STEPS]`.
    pub steps: usize,
    /// How tokens are named.
    pub naming_convention: NamingConvention,
    /// Growth ratio between the first and the second step of a linear scale.
    pub scale_factor: f64,

    /// Shaping curve preset.
    pub curve_type: CurveType,
    /// Control pair used when `curve_type` is `custom`.
    pub custom_curve: CubicBezier,

    /// Emit a viewport-responsive `clamp()` expression per token.
    pub fluid: bool,
    /// Viewport width at which a fluid token reaches its smallest value.
    pub viewport_min: f64,
    /// Viewport width at which a fluid token reaches its full value.
    pub viewport_max: f64,
    /// Smallest fluid value as a fraction of the full value.
    pub fluid_scale_factor: f64,

    /// Rounding applied after density.
    pub rounding_strategy: RoundingStrategy,
    /// Decimal places kept by `rounding_strategy`.
    pub rounding_precision: u32,
    /// Grid pitch; `0` disables snapping.
    pub snap_to_grid: f64,

    /// Lower bound of generated values.
    pub min_value: f64,
    /// Upper bound of generated values.
    pub max_value: f64,

    /// Named density. Descriptive only: [`DimensionConfig::with_density`] sets it together
    /// with `density_multiplier`, but a document may set either on its own.
    pub density_mode: DensityMode,
    /// Scalar applied to every generated value, whatever `density_mode` says.
    pub density_multiplier: f64,

    /// Unit of display strings.
    pub output_unit: OutputUnit,
    /// Pixels per rem; values below 1 are treated as 1.
    pub rem_base: f64,

    /// Snap values to the nearest harmonic multiple of `base`.
    pub harmonic_alignment: bool,
    /// Boost applied to values under 8 units, in `[0, 1]`.
    pub optical_compensation: f64,
    /// Step concentration toward the large (`> 0`) or small (`< 0`) end, in `[-1, 1]`.
    pub progression_bias: f64,
    /// Prefix of generated CSS variable names.
    pub token_prefix: String,
    /// Emit a negated counterpart per token.
    pub negative_scale: bool,

    /// Explicit per-index values; they bypass generation entirely.
    pub locked_tokens: BTreeMap<usize, f64>,
    /// Names used by [`NamingConvention::Custom`].
    pub custom_names: Vec<String>,
}

impl Default for DimensionConfig {
    fn default() -> Self {
        Self {
            base: 8.0,
            steps: 10,
            naming_convention: NamingConvention::Tshirt,
            scale_factor: 1.5,
            curve_type: CurveType::Linear,
            custom_curve: CubicBezier::new(0.25, 0.1, 0.75, 0.9),
            fluid: false,
            viewport_min: 320.0,
            viewport_max: 1440.0,
            fluid_scale_factor: 0.75,
            rounding_strategy: RoundingStrategy::Round,
            rounding_precision: 0,
            snap_to_grid: 0.0,
            min_value: 1.0,
            max_value: 256.0,
            density_mode: DensityMode::Comfortable,
            density_multiplier: 1.0,
            output_unit: OutputUnit::Px,
            rem_base: 16.0,
            harmonic_alignment: false,
            optical_compensation: 0.0,
            progression_bias: 0.0,
            token_prefix: "space".to_string(),
            negative_scale: false,
            locked_tokens: BTreeMap::new(),
            custom_names: Vec::new(),
        }
    }
}

impl DimensionConfig {
    /// Validate the configuration once, before any token is generated.
    pub fn validate(&self) -> ProportionResult<()> {
        if !is_positive_finite(self.base) {
            return Err(ProportionError::validation("base must be finite and > 0"));
        }
        if !(1..=MAX_STEPS).contains(&self.steps) {
            return Err(ProportionError::validation(format!(
                "steps must be within [1, {MAX_STEPS}]"
            )));
        }
        if !is_positive_finite(self.scale_factor) {
            return Err(ProportionError::validation(
                "scale_factor must be finite and > 0",
            ));
        }
        if self.curve_type == CurveType::Custom {
            self.custom_curve.validate()?;
        }
        if self.fluid {
            if !self.viewport_min.is_finite() || !self.viewport_max.is_finite() {
                return Err(ProportionError::validation(
                    "viewport_min/viewport_max must be finite",
                ));
            }
            if !is_positive_finite(self.fluid_scale_factor) {
                return Err(ProportionError::validation(
                    "fluid_scale_factor must be finite and > 0",
                ));
            }
        }
        if self.rounding_precision > MAX_ROUNDING_PRECISION {
            return Err(ProportionError::validation(format!(
                "rounding_precision must be <= {MAX_ROUNDING_PRECISION}"
            )));
        }
        if !self.snap_to_grid.is_finite() || self.snap_to_grid < 0.0 {
            return Err(ProportionError::validation(
                "snap_to_grid must be finite and >= 0",
            ));
        }
        if !self.min_value.is_finite() || !self.max_value.is_finite() {
            return Err(ProportionError::validation(
                "min_value/max_value must be finite",
            ));
        }
        if self.min_value > self.max_value {
            return Err(ProportionError::validation("min_value must be <= max_value"));
        }
        if !is_positive_finite(self.density_multiplier) {
            return Err(ProportionError::validation(
                "density_multiplier must be finite and > 0",
            ));
        }
        if !self.rem_base.is_finite() {
            return Err(ProportionError::validation("rem_base must be finite"));
        }
        if !(0.0..=1.0).contains(&self.optical_compensation) {
            return Err(ProportionError::validation(
                "optical_compensation must be within [0, 1]",
            ));
        }
        if !(-1.0..=1.0).contains(&self.progression_bias) {
            return Err(ProportionError::validation(
                "progression_bias must be within [-1, 1]",
            ));
        }
        for (index, value) in &self.locked_tokens {
            if !value.is_finite() {
                return Err(ProportionError::validation(format!(
                    "locked token {index} must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_reader<R: std::io::Read>(r: R) -> ProportionResult<Self> {
        let config: Self = serde_json::from_reader(r)?;
        config.validate()?;
        Ok(config)
    }

    /// [`DimensionConfig::from_reader`] over an in-memory string.
    pub fn from_json_str(s: &str) -> ProportionResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Effective bezier control pair.
    pub fn curve(&self) -> CubicBezier {
        self.curve_type.control_points(self.custom_curve)
    }

    /// Copy with a named density and its multiplier.
    pub fn with_density(self, mode: DensityMode) -> Self {
        Self {
            density_mode: mode,
            density_multiplier: mode.multiplier(),
            ..self
        }
    }

    /// Copy with index `index` locked to `value`.
    pub fn with_lock(mut self, index: usize, value: f64) -> Self {
        self.locked_tokens.insert(index, value);
        self
    }

    /// Copy with the lock on `index` released.
    pub fn without_lock(mut self, index: usize) -> Self {
        self.locked_tokens.remove(&index);
        self
    }
}

/// Decimal rounding applied to generated values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingStrategy {
    /// Keep the exact value.
    None,
    /// Round half away from zero.
    #[default]
    Round,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
}

/// Unit of display strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputUnit {
    /// Pixels.
    #[default]
    Px,
    /// Root ems (`value / rem_base`).
    Rem,
    /// Ems (`value / rem_base`).
    Em,
}

impl OutputUnit {
    /// Unit suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Rem => "rem",
            Self::Em => "em",
        }
    }
}

/// Named density presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityMode {
    /// 0.75×.
    Compact,
    /// 1×.
    #[default]
    Comfortable,
    /// 1.25×.
    Spacious,
}

impl DensityMode {
    /// Multiplier this density stands for.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Compact => 0.75,
            Self::Comfortable => 1.0,
            Self::Spacious => 1.25,
        }
    }
}

/// Built-in dimension scales modelled on common design systems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionPreset {
    /// Base 4, mostly linear.
    Tailwind,
    /// 8px grid with 4px half-steps.
    Material,
    /// Golden ratio growth with harmonic alignment.
    Golden,
    /// rem-based doubling scale.
    Bootstrap,
    /// 8-point grid.
    #[serde(rename = "linear-8")]
    Linear8,
}

impl DimensionPreset {
    /// Every preset, in presentation order.
    pub const ALL: [DimensionPreset; 5] = [
        DimensionPreset::Tailwind,
        DimensionPreset::Material,
        DimensionPreset::Golden,
        DimensionPreset::Bootstrap,
        DimensionPreset::Linear8,
    ];

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::Material => "material",
            Self::Golden => "golden",
            Self::Bootstrap => "bootstrap",
            Self::Linear8 => "linear-8",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tailwind => "Tailwind",
            Self::Material => "Material",
            Self::Golden => "Golden Ratio",
            Self::Bootstrap => "Bootstrap",
            Self::Linear8 => "Linear 8pt",
        }
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Tailwind => "Tailwind CSS default spacing scale, base 4, mostly linear",
            Self::Material => "Material Design 8px grid with 4px half-steps",
            Self::Golden => "Scale based on the golden ratio (1.618)",
            Self::Bootstrap => "Bootstrap 5 spacing utilities, rem-based",
            Self::Linear8 => "Simple 8-point grid",
        }
    }

    /// Default configuration with this preset's overrides applied.
    pub fn config(self) -> DimensionConfig {
        let base = DimensionConfig::default();
        match self {
            Self::Tailwind => DimensionConfig {
                base: 4.0,
                steps: 12,
                scale_factor: 1.5,
                curve_type: CurveType::Linear,
                naming_convention: NamingConvention::Tailwind,
                snap_to_grid: 0.0,
                rounding_strategy: RoundingStrategy::Round,
                rounding_precision: 0,
                ..base
            },
            Self::Material => DimensionConfig {
                base: 4.0,
                steps: 10,
                scale_factor: 2.0,
                curve_type: CurveType::Linear,
                naming_convention: NamingConvention::Numeric,
                snap_to_grid: 4.0,
                rounding_strategy: RoundingStrategy::Round,
                rounding_precision: 0,
                ..base
            },
            Self::Golden => DimensionConfig {
                base: 8.0,
                steps: 8,
                scale_factor: 1.618,
                curve_type: CurveType::Linear,
                naming_convention: NamingConvention::Tshirt,
                harmonic_alignment: true,
                snap_to_grid: 0.0,
                ..base
            },
            Self::Bootstrap => DimensionConfig {
                base: 4.0,
                steps: 6,
                scale_factor: 2.0,
                curve_type: CurveType::Linear,
                naming_convention: NamingConvention::Ordinal,
                output_unit: OutputUnit::Rem,
                rem_base: 16.0,
                rounding_strategy: RoundingStrategy::Round,
                rounding_precision: 0,
                ..base
            },
            Self::Linear8 => DimensionConfig {
                base: 8.0,
                steps: 10,
                scale_factor: 1.0,
                curve_type: CurveType::Linear,
                naming_convention: NamingConvention::Ordinal,
                snap_to_grid: 8.0,
                rounding_strategy: RoundingStrategy::Round,
                rounding_precision: 0,
                ..base
            },
        }
    }
}

impl FromStr for DimensionPreset {
    type Err = ProportionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| ProportionError::validation(format!("unknown scale preset '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/config.rs"]
mod tests;
