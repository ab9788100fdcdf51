//! Documented input ranges and defaults for every interactive control.

use std::f64::consts::{FRAC_PI_4, PI};

use crate::constants::{CONFORMAL_DEFAULT_RESOLUTION, MAX_GRID_RESOLUTION, MIN_GRID_RESOLUTION};
use crate::math::Scalar;
use crate::transforms::ThreePhaseCurrents;

/// Errors raised when a configuration is internally inconsistent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Range bounds are not finite or `min > max`.
    #[error("{name}: invalid range [{min}, {max}]")]
    InvalidRange {
        /// Control name.
        name: &'static str,
        /// Lower bound.
        min: Scalar,
        /// Upper bound.
        max: Scalar,
    },
    /// Default value outside its own range.
    #[error("{name}: default {default} outside [{min}, {max}]")]
    DefaultOutOfRange {
        /// Control name.
        name: &'static str,
        /// Offending default.
        default: Scalar,
        /// Lower bound.
        min: Scalar,
        /// Upper bound.
        max: Scalar,
    },
    /// Resolution range reaching outside the grid limits.
    #[error("resolution range [{min}, {max}] outside grid limits [{limit_min}, {limit_max}]")]
    ResolutionOutsideGrid {
        /// Configured lower bound.
        min: u32,
        /// Configured upper bound.
        max: u32,
        /// Smallest grid resolution.
        limit_min: usize,
        /// Largest grid resolution.
        limit_max: usize,
    },
}

/// Closed interval with a default, as exposed by a slider.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange<T> {
    /// Lower bound.
    pub min: T,
    /// Upper bound.
    pub max: T,
    /// Initial value.
    pub default: T,
}

impl<T: Copy + PartialOrd> InputRange<T> {
    /// Creates a range.
    #[must_use]
    pub const fn new(min: T, max: T, default: T) -> Self {
        Self { min, max, default }
    }

    /// True if `value` lies in `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Clamps `value` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

impl<T: Copy + PartialOrd + Into<f64>> InputRange<T> {
    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        let (min, max, default) = (self.min.into(), self.max.into(), self.default.into());
        if !(min.is_finite() && max.is_finite() && min <= max) {
            return Err(ConfigError::InvalidRange { name, min, max });
        }
        if !self.contains(self.default) {
            return Err(ConfigError::DefaultOutOfRange { name, default, min, max });
        }
        Ok(())
    }
}

/// Ranges and defaults of every input consumed by the demonstrations.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabConfig {
    /// Voltage amplitude `V0`.
    pub voltage_amplitude: InputRange<Scalar>,
    /// Current amplitude `I0`.
    pub current_amplitude: InputRange<Scalar>,
    /// Voltage phase (rad).
    pub voltage_phase: InputRange<Scalar>,
    /// Current phase (rad).
    pub current_phase: InputRange<Scalar>,
    /// Conformal-map grid resolution.
    pub resolution: InputRange<u32>,
    /// Initial phase currents; these fields are unbounded.
    pub phase_currents: ThreePhaseCurrents,
    /// Park angle θ (rad).
    pub theta: InputRange<Scalar>,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            voltage_amplitude: InputRange::new(0.1, 10.0, 1.0),
            current_amplitude: InputRange::new(0.1, 10.0, 1.0),
            voltage_phase: InputRange::new(-PI, PI, 0.0),
            current_phase: InputRange::new(-PI, PI, 0.0),
            resolution: InputRange::new(
                MIN_GRID_RESOLUTION as u32,
                MAX_GRID_RESOLUTION as u32,
                CONFORMAL_DEFAULT_RESOLUTION as u32,
            ),
            phase_currents: ThreePhaseCurrents::new(10.0, -5.0, -5.0),
            theta: InputRange::new(0.0, 2.0 * PI, FRAC_PI_4),
        }
    }
}

impl LabConfig {
    /// Checks every range is ordered and holds its default, and that the
    /// resolution range lies inside the grid limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.voltage_amplitude.validate("voltage_amplitude")?;
        self.current_amplitude.validate("current_amplitude")?;
        self.voltage_phase.validate("voltage_phase")?;
        self.current_phase.validate("current_phase")?;
        self.resolution.validate("resolution")?;
        let grid_limits = MIN_GRID_RESOLUTION..=MAX_GRID_RESOLUTION;
        let (min, max) = (self.resolution.min, self.resolution.max);
        if !grid_limits.contains(&(min as usize)) || !grid_limits.contains(&(max as usize)) {
            return Err(ConfigError::ResolutionOutsideGrid {
                min,
                max,
                limit_min: MIN_GRID_RESOLUTION,
                limit_max: MAX_GRID_RESOLUTION,
            });
        }
        self.theta.validate("theta")?;
        Ok(())
    }
}
