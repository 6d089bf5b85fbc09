use crate::foundation::{
    error::{ProportionError, ProportionResult},
    math::{DIV_EPSILON, clamp_soft, is_positive_finite},
};

use super::config::BalancerConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Rendered logo box inside a square cell.
pub struct RenderedSize {
    /// Rendered width, `>= 0`.
    pub width: f64,
    /// Rendered height, `>= 0`.
    pub height: f64,
}

impl RenderedSize {
    /// Box area.
    pub fn area(self) -> f64 {
        self.width * self.height
    }

    /// Perceived visual weight `w^¼ × h^¾`; equal across logos under the optical exponent.
    pub fn perceived_weight(self) -> f64 {
        self.width.powf(0.25) * self.height.powf(0.75)
    }
}

impl From<RenderedSize> for kurbo::Size {
    fn from(value: RenderedSize) -> Self {
        kurbo::Size::new(value.width, value.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Every intermediate of one sizing computation.
pub struct SizeBreakdown {
    /// Input ratio clamped into `[ratio_min, ratio_max]`.
    pub clamped_ratio: f64,
    /// `clamped_ratio ^ exponent`.
    pub ratio_pow: f64,
    /// `baseline × ratio_pow`.
    pub width_fraction: f64,
    /// Width before the fit-clamp.
    pub raw_width: f64,
    /// Height before the fit-clamp, derived from the unclamped ratio.
    pub raw_height: f64,
    /// `cell × fit_percent`.
    pub safe_box: f64,
    /// Uniform shrink factor in `[0, 1]`.
    pub fit: f64,
    /// Final size.
    pub size: RenderedSize,
}

/// Width fraction of the cell for `ratio`: `baseline × clamp(ratio)^exponent`.
pub fn width_fraction(ratio: f64, config: &BalancerConfig) -> f64 {
    let r = clamp_soft(ratio, config.ratio_min, config.ratio_max);
    config.baseline * r.powf(config.exponent)
}

/// Compute the rendered size of a logo with aspect `ratio` (width / height) in a square
/// cell of side `cell_size`.
///
/// Never fails: a non-positive or non-finite `ratio` renders square, and a non-positive
/// `cell_size` renders empty. Validate `config` beforehand (or use [`Balancer`]).
pub fn compute_rendered_size(ratio: f64, cell_size: f64, config: &BalancerConfig) -> RenderedSize {
    explain_rendered_size(ratio, cell_size, config).size
}

/// [`compute_rendered_size`] with all intermediate values exposed.
pub fn explain_rendered_size(
    ratio: f64,
    cell_size: f64,
    config: &BalancerConfig,
) -> SizeBreakdown {
    let cell = if is_positive_finite(cell_size) {
        cell_size
    } else {
        0.0
    };

    let clamped_ratio = clamp_soft(ratio, config.ratio_min, config.ratio_max);
    let ratio_pow = clamped_ratio.powf(config.exponent);
    let width_fraction = config.baseline * ratio_pow;

    let raw_width = cell * width_fraction * config.scale;
    // Height follows the true ratio; the clamp only bounds the width correction.
    let raw_height = if is_positive_finite(ratio) {
        raw_width / ratio
    } else {
        raw_width
    };

    let safe_box = cell * config.fit_percent;
    let fit = 1.0_f64
        .min(safe_box / raw_width.max(DIV_EPSILON))
        .min(safe_box / raw_height.max(DIV_EPSILON))
        .max(0.0);

    SizeBreakdown {
        clamped_ratio,
        ratio_pow,
        width_fraction,
        raw_width,
        raw_height,
        safe_box,
        fit,
        size: RenderedSize {
            width: raw_width * fit,
            height: raw_height * fit,
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// One logo of a balanced lane.
pub struct LaneEntry {
    /// Input aspect ratio.
    pub ratio: f64,
    /// Rendered size.
    pub size: RenderedSize,
    /// [`RenderedSize::perceived_weight`] of `size`.
    pub perceived_weight: f64,
    /// `perceived_weight` relative to the heaviest logo of the lane, in `[0, 1]`.
    pub relative_weight: f64,
}

/// Validated balancer bound to one cell size.
///
/// Build it once per configuration change; sizing calls are then infallible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Balancer {
    config: BalancerConfig,
    cell_size: f64,
}

impl Balancer {
    #[tracing::instrument]
    /// Validate `config` and `cell_size`.
    pub fn new(config: BalancerConfig, cell_size: f64) -> ProportionResult<Self> {
        config.validate()?;
        if !is_positive_finite(cell_size) {
            return Err(ProportionError::validation(
                "cell_size must be finite and > 0",
            ));
        }
        Ok(Self { config, cell_size })
    }

    /// Bound configuration.
    pub fn config(&self) -> &BalancerConfig {
        &self.config
    }

    /// Bound cell size.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Rendered size for one ratio.
    pub fn rendered_size(&self, ratio: f64) -> RenderedSize {
        compute_rendered_size(ratio, self.cell_size, &self.config)
    }

    /// Rendered size for one ratio with intermediates.
    pub fn explain(&self, ratio: f64) -> SizeBreakdown {
        explain_rendered_size(ratio, self.cell_size, &self.config)
    }

    /// Size a row of logos and compare their perceived weights.
    pub fn lane(&self, ratios: &[f64]) -> Vec<LaneEntry> {
        let mut entries = ratios
            .iter()
            .map(|&ratio| {
                let size = self.rendered_size(ratio);
                LaneEntry {
                    ratio,
                    size,
                    perceived_weight: size.perceived_weight(),
                    relative_weight: 0.0,
                }
            })
            .collect::<Vec<_>>();

        let heaviest = entries
            .iter()
            .map(|e| e.perceived_weight)
            .fold(0.0, f64::max);
        if heaviest > 0.0 {
            for e in &mut entries {
                e.relative_weight = e.perceived_weight / heaviest;
            }
        }
        entries
    }
}

#[cfg(test)]
#[path = "../../tests/unit/balancer/size.rs"]
mod tests;
