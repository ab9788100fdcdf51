//! Numerical constants and reference domains shared by the demonstrations.
//!
//! ## Epsilon guard
//!
//! [`LOG_RADIUS_EPSILON`] is added to the radius before taking `ln(r)` so the
//! sample at the origin stays finite (`ln(1e-6) ≈ -13.8`). The value is not
//! load-bearing for precision: any positive offset well below the grid spacing
//! gives the same picture. Away from the origin it biases `ln(r)` by at most
//! `ε / r`.

use std::f64::consts::PI;

/// Offset added to the radius before taking the logarithm of the harmonic field.
pub const LOG_RADIUS_EPSILON: f64 = 1.0e-6;

/// √3, used by the Clarke stage.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Amplitude-invariant Clarke scaling factor.
pub const CLARKE_SCALE: f64 = 2.0 / 3.0;

/// Multiplier applied to the largest phasor amplitude to get the plot extent.
pub const PHASOR_DISPLAY_MARGIN: f64 = 1.5;

/// Smallest accepted grid resolution.
pub const MIN_GRID_RESOLUTION: usize = 10;
/// Largest accepted grid resolution.
pub const MAX_GRID_RESOLUTION: usize = 100;

/// Half-width of the square domain `[-2, 2] x [-2, 2]` used by the field and mapping panels.
pub const REFERENCE_HALF_EXTENT: f64 = 2.0;

/// Resolution used for the fixed harmonic-field panel.
pub const HARMONIC_REFERENCE_RESOLUTION: usize = MAX_GRID_RESOLUTION;

/// Default resolution of the conformal-mapping panel.
pub const CONFORMAL_DEFAULT_RESOLUTION: usize = 30;

/// Interval of the residue integrand panel.
pub const RESIDUE_INTERVAL: (f64, f64) = (-5.0, 5.0);
/// Sample count of the residue integrand panel.
pub const RESIDUE_SAMPLES: usize = 1000;

/// Value of ∫ 1/(x²+1) dx over the real line, `2πi · Res_{z=i}`.
pub const LORENTZIAN_RESIDUE_INTEGRAL: f64 = PI;
