//! AC phasor construction for a voltage/current pair.

use tracing::debug;

use crate::constants::PHASOR_DISPLAY_MARGIN;
use crate::math::{polar, CScalar, Scalar};

/// Sinusoid described by peak amplitude and phase (radians).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phasor {
    /// Peak amplitude; expected positive, not enforced.
    pub amplitude: Scalar,
    /// Phase angle in radians, taken as given.
    pub phase: Scalar,
}

impl Phasor {
    /// Creates a phasor.
    #[must_use]
    pub const fn new(amplitude: Scalar, phase: Scalar) -> Self {
        Self { amplitude, phase }
    }

    /// `amplitude · e^{j·phase}`.
    #[must_use]
    pub fn to_complex(self) -> CScalar {
        polar(self.amplitude, self.phase)
    }
}

/// Arrow anchored at the origin, for quiver-style rendering.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    /// Horizontal component (real part).
    pub dx: Scalar,
    /// Vertical component (imaginary part).
    pub dy: Scalar,
}

impl From<CScalar> for Arrow {
    fn from(z: CScalar) -> Self {
        Self { dx: z.re, dy: z.im }
    }
}

/// Voltage and current phasors in the complex plane plus a suggested plot extent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasorDiagram {
    /// Voltage phasor input.
    pub voltage_input: Phasor,
    /// Current phasor input.
    pub current_input: Phasor,
    /// Complex voltage vector.
    pub voltage: CScalar,
    /// Complex current vector.
    pub current: CScalar,
    /// Symmetric axis limit `1.5 · max(V0, I0)`.
    pub display_bound: Scalar,
}

impl PhasorDiagram {
    /// `(voltage, current)` arrows.
    #[must_use]
    pub fn arrows(&self) -> (Arrow, Arrow) {
        (self.voltage.into(), self.current.into())
    }

    /// Phase lead of voltage over current, `φ_v − φ_i` (not wrapped).
    #[must_use]
    pub fn phase_difference(&self) -> Scalar {
        self.voltage_input.phase - self.current_input.phase
    }

    /// Displacement power factor `cos(φ_v − φ_i)`.
    #[must_use]
    pub fn power_factor(&self) -> Scalar {
        self.phase_difference().cos()
    }
}

/// Builds both phasors and the display hint.
#[must_use]
pub fn build_phasors(voltage: Phasor, current: Phasor) -> PhasorDiagram {
    let display_bound = PHASOR_DISPLAY_MARGIN * voltage.amplitude.max(current.amplitude);
    debug!(
        v0 = voltage.amplitude,
        phi_v = voltage.phase,
        i0 = current.amplitude,
        phi_i = current.phase,
        display_bound,
        "phasors built"
    );
    PhasorDiagram {
        voltage_input: voltage,
        current_input: current,
        voltage: voltage.to_complex(),
        current: current.to_complex(),
        display_bound,
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn phasor_preserves_magnitude_and_angle() {
        for &amplitude in &[0.1, 1.0, 3.7, 10.0] {
            for k in 0..16 {
                // Stay inside (-π, π), the atan2 branch.
                let theta = -PI + (k as Scalar + 0.5) * (2.0 * PI / 16.0);
                let z = Phasor::new(amplitude, theta).to_complex();
                assert_relative_eq!(z.norm(), amplitude, max_relative = 1.0e-12);
                assert_relative_eq!(z.im.atan2(z.re), theta, epsilon = 1.0e-12);
            }
        }
    }

    #[test]
    fn display_bound_uses_larger_amplitude() {
        let diagram = build_phasors(Phasor::new(2.0, 0.0), Phasor::new(4.0, 0.3));
        assert_relative_eq!(diagram.display_bound, 6.0, epsilon = 1.0e-12);
        let diagram = build_phasors(Phasor::new(5.0, 0.0), Phasor::new(1.0, 0.3));
        assert_relative_eq!(diagram.display_bound, 7.5, epsilon = 1.0e-12);
    }

    #[test]
    fn arrows_are_real_and_imaginary_parts() {
        let diagram = build_phasors(Phasor::new(1.0, PI / 2.0), Phasor::new(2.0, 0.0));
        let (v, i) = diagram.arrows();
        assert_relative_eq!(v.dx, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(v.dy, 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(i.dx, 2.0, epsilon = 1.0e-12);
        assert_relative_eq!(i.dy, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn in_phase_load_has_unity_power_factor() {
        let diagram = build_phasors(Phasor::new(1.0, 0.4), Phasor::new(1.0, 0.4));
        assert_relative_eq!(diagram.power_factor(), 1.0, epsilon = 1.0e-12);
        let lagging = build_phasors(Phasor::new(1.0, 0.0), Phasor::new(1.0, -PI / 3.0));
        assert_relative_eq!(lagging.phase_difference(), PI / 3.0, epsilon = 1.0e-12);
        assert_relative_eq!(lagging.power_factor(), 0.5, epsilon = 1.0e-12);
    }
}
