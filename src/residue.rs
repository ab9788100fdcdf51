//! Rational integrands sampled along the real axis.
//!
//! `1/(x² + 1)` has its poles at `±i`, off the sampling axis, so it is sampled
//! without any guard. General [`RationalIntegrand`]s are checked instead: a
//! sampled point where the denominator vanishes is reported as an error rather
//! than clipped, since masking it would misrepresent the function.

use tracing::debug;

use crate::constants::{RESIDUE_INTERVAL, RESIDUE_SAMPLES};
use crate::math::Scalar;
use crate::sampling::{linspace, LineSeries};

/// Errors raised while sampling a rational integrand.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResidueError {
    /// The denominator is zero at a sampled abscissa.
    #[error("denominator vanishes at sampled point x = {x}")]
    PoleOnAxis {
        /// Offending sample position.
        x: Scalar,
    },
    /// A polynomial was given without coefficients.
    #[error("{0} polynomial has no coefficients")]
    EmptyPolynomial(&'static str),
}

/// `1 / (x² + 1)`.
#[inline]
#[must_use]
pub fn residue_integrand(x: Scalar) -> Scalar {
    1.0 / (x * x + 1.0)
}

/// Samples `1/(x² + 1)` at `n` evenly spaced points of [start, stop].
#[must_use]
pub fn sample_residue_integrand(start: Scalar, stop: Scalar, n: usize) -> LineSeries {
    debug!(start, stop, n, "sampling residue integrand");
    LineSeries::sample(start, stop, n, residue_integrand)
}

/// The line-plot panel: [-5, 5] with 1000 samples.
#[must_use]
pub fn reference_residue_series() -> LineSeries {
    let (start, stop) = RESIDUE_INTERVAL;
    sample_residue_integrand(start, stop, RESIDUE_SAMPLES)
}

/// `P(x) / Q(x)` with coefficients in ascending powers of `x`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RationalIntegrand {
    numerator: Vec<Scalar>,
    denominator: Vec<Scalar>,
}

impl RationalIntegrand {
    /// Creates an integrand; both polynomials need at least one coefficient.
    pub fn new(numerator: Vec<Scalar>, denominator: Vec<Scalar>) -> Result<Self, ResidueError> {
        if numerator.is_empty() {
            return Err(ResidueError::EmptyPolynomial("numerator"));
        }
        if denominator.is_empty() {
            return Err(ResidueError::EmptyPolynomial("denominator"));
        }
        Ok(Self { numerator, denominator })
    }

    /// `1 / (x² + 1)` as a rational integrand.
    #[must_use]
    pub fn lorentzian() -> Self {
        Self { numerator: vec![1.0], denominator: vec![1.0, 0.0, 1.0] }
    }

    /// Evaluates `P(x) / Q(x)`, or `None` where `Q(x) = 0`.
    #[must_use]
    pub fn evaluate(&self, x: Scalar) -> Option<Scalar> {
        let q = horner(&self.denominator, x);
        if q == 0.0 {
            None
        } else {
            Some(horner(&self.numerator, x) / q)
        }
    }

    /// Samples `n` evenly spaced points of [start, stop], failing on the first pole hit.
    pub fn try_sample(
        &self,
        start: Scalar,
        stop: Scalar,
        n: usize,
    ) -> Result<LineSeries, ResidueError> {
        let x = linspace(start, stop, n);
        let y = x
            .iter()
            .map(|&x| self.evaluate(x).ok_or(ResidueError::PoleOnAxis { x }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LineSeries { x, y })
    }
}

fn horner(coeffs: &[Scalar], x: Scalar) -> Scalar {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::LORENTZIAN_RESIDUE_INTEGRAL;

    #[test]
    fn peak_value_is_exactly_one() {
        assert_eq!(residue_integrand(0.0), 1.0);
        let series = sample_residue_integrand(-1.0, 1.0, 3);
        assert_eq!(series.y[1], 1.0);
    }

    #[test]
    fn reference_series_is_symmetric() {
        let series = reference_residue_series();
        assert_eq!(series.len(), 1000);
        assert_eq!(series.x[0], -5.0);
        assert_eq!(series.x[999], 5.0);
        let n = series.len();
        for i in 0..n {
            assert_relative_eq!(series.y[i], series.y[n - 1 - i], max_relative = 1.0e-12);
            let mirrored = residue_integrand(-series.x[i]);
            assert_relative_eq!(series.y[i], mirrored, max_relative = 1.0e-12);
        }
        assert_relative_eq!(series.y[0], 1.0 / 26.0, max_relative = 1.0e-12);
    }

    #[test]
    fn reference_series_values_lie_in_unit_interval() {
        let series = reference_residue_series();
        assert!(series.y.iter().all(|&y| y > 0.0 && y <= 1.0));
    }

    #[test]
    fn trapezoid_approaches_arctangent_and_residue_value() {
        let series = reference_residue_series();
        let exact = 2.0 * 5.0_f64.atan();
        assert_relative_eq!(series.trapezoid(), exact, max_relative = 1.0e-5);
        let wide = sample_residue_integrand(-1.0e3, 1.0e3, 200_001);
        assert_relative_eq!(wide.trapezoid(), LORENTZIAN_RESIDUE_INTEGRAL, max_relative = 1.0e-3);
    }

    #[test]
    fn lorentzian_matches_closed_form() {
        let f = RationalIntegrand::lorentzian();
        let series = f.try_sample(-5.0, 5.0, 1000).expect("no real poles");
        assert_eq!(series, reference_residue_series());
    }

    #[test]
    fn pole_on_axis_is_reported() {
        // 1 / (x² - 1) has poles at ±1; 21 points on [-1, 1] hit -1 first.
        let f = RationalIntegrand::new(vec![1.0], vec![-1.0, 0.0, 1.0]).unwrap();
        assert_eq!(f.try_sample(-1.0, 1.0, 21), Err(ResidueError::PoleOnAxis { x: -1.0 }));
        assert!(f.try_sample(-0.9, 0.9, 21).is_ok());
    }

    #[test]
    fn empty_polynomials_are_rejected() {
        assert_eq!(
            RationalIntegrand::new(vec![], vec![1.0]),
            Err(ResidueError::EmptyPolynomial("numerator"))
        );
        assert_eq!(
            RationalIntegrand::new(vec![1.0], vec![]),
            Err(ResidueError::EmptyPolynomial("denominator"))
        );
    }
}
