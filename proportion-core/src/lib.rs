//! Proportion: pure engines behind a design-system explainer.
//!
//! Two independent, stateless computations:
//!
//! - **Aspect balancer**: maps a logo's aspect ratio to a rendered box inside a square cell
//!   with a clamped power law and a uniform fit-clamp ([`compute_rendered_size`],
//!   [`Balancer`]).
//! - **Scale engine**: generates an ordered dimension/spacing token scale from a
//!   [`DimensionConfig`] by shaping an exponential progression through a cubic-bezier curve
//!   ([`generate_scale`]).
//!
//! Both are deterministic and free of IO. Configurations are plain values validated once
//! per change (`validate`, `from_json_str`); the formulas themselves never fail on a valid
//! configuration and guard degenerate numeric input locally.
//!
//! ```
//! use proportion::{DimensionConfig, generate_scale};
//!
//! let config = DimensionConfig {
//!     base: 8.0,
//!     steps: 5,
//!     scale_factor: 2.0,
//!     max_value: 1000.0,
//!     ..DimensionConfig::default()
//! };
//! let values: Vec<f64> = generate_scale(&config)?.iter().map(|t| t.value).collect();
//! assert_eq!(values, [8.0, 16.0, 32.0, 64.0, 128.0]);
//! # Ok::<(), proportion::ProportionError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod balancer;
mod curve;
mod foundation;
mod scale;

pub use balancer::config::{BalancerConfig, BalancerPreset};
pub use balancer::samples::{SAMPLE_LOGOS, SampleLogo};
pub use balancer::size::{
    Balancer, LaneEntry, RenderedSize, SizeBreakdown, compute_rendered_size,
    explain_rendered_size, width_fraction,
};
pub use curve::bezier::CubicBezier;
pub use curve::shape::{CurveType, apply_bias};
pub use foundation::error::{ProportionError, ProportionResult};
pub use scale::config::{
    DensityMode, DimensionConfig, DimensionPreset, MAX_ROUNDING_PRECISION, MAX_STEPS,
    OutputUnit, RoundingStrategy,
};
pub use scale::engine::{OPTICAL_THRESHOLD, evaluate_curve_at, generate_scale};
pub use scale::harmonic::HARMONIC_RATIOS;
pub use scale::naming::{NamingConvention, token_name};
pub use scale::token::GeneratedToken;
