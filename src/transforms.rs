//! Clarke (abc → αβ) and Park (αβ → dq) reference-frame transforms.
//!
//! The Clarke stage uses amplitude-invariant scaling (factor 2/3), so a balanced
//! set with phase-a peak `I` yields an αβ vector of length `I`. No balance check
//! is made: a zero-sequence component is simply dropped by the Clarke stage.
//! Angles are used as given and never wrapped.

use std::fmt;

use tracing::debug;

use crate::constants::{CLARKE_SCALE, SQRT_3};
use crate::math::{rotate, Scalar};

/// Instantaneous phase currents `(i_a, i_b, i_c)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThreePhaseCurrents {
    /// Phase a.
    pub a: Scalar,
    /// Phase b.
    pub b: Scalar,
    /// Phase c.
    pub c: Scalar,
}

impl ThreePhaseCurrents {
    /// Creates a triple.
    #[must_use]
    pub const fn new(a: Scalar, b: Scalar, c: Scalar) -> Self {
        Self { a, b, c }
    }

    /// `i_a + i_b + i_c`; zero for a balanced set.
    #[must_use]
    pub fn zero_sequence_sum(&self) -> Scalar {
        self.a + self.b + self.c
    }
}

/// Stationary-frame currents `(i_α, i_β)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TwoAxisCurrents {
    /// α axis, aligned with phase a.
    pub alpha: Scalar,
    /// β axis, leading α by 90°.
    pub beta: Scalar,
}

/// Rotating-frame currents `(i_d, i_q)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotatingFrameCurrents {
    /// Direct axis.
    pub d: Scalar,
    /// Quadrature axis.
    pub q: Scalar,
}

impl RotatingFrameCurrents {
    /// LaTeX rendering with two decimals, e.g. `i_d = 10.00,\quad i_q = 0.00`.
    #[must_use]
    pub fn to_latex(&self) -> String {
        format!("i_d = {:.2},\\quad i_q = {:.2}", self.d, self.q)
    }
}

impl fmt::Display for RotatingFrameCurrents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i_d = {:.2}, i_q = {:.2}", self.d, self.q)
    }
}

/// Clarke transform.
#[must_use]
pub fn clarke(abc: ThreePhaseCurrents) -> TwoAxisCurrents {
    TwoAxisCurrents {
        alpha: CLARKE_SCALE * (abc.a - 0.5 * abc.b - 0.5 * abc.c),
        beta: CLARKE_SCALE * (SQRT_3 / 2.0) * (abc.b - abc.c),
    }
}

/// Inverse Clarke transform; returns the balanced triple with the same αβ vector.
#[must_use]
pub fn inverse_clarke(ab: TwoAxisCurrents) -> ThreePhaseCurrents {
    let half_beta = 0.5 * SQRT_3 * ab.beta;
    ThreePhaseCurrents {
        a: ab.alpha,
        b: -0.5 * ab.alpha + half_beta,
        c: -0.5 * ab.alpha - half_beta,
    }
}

/// Park transform: projects αβ onto axes rotated by `theta`.
#[must_use]
pub fn park(ab: TwoAxisCurrents, theta: Scalar) -> RotatingFrameCurrents {
    let (d, q) = rotate(ab.alpha, ab.beta, -theta);
    RotatingFrameCurrents { d, q }
}

/// Inverse Park transform: rotates dq back by `theta` into the stationary frame.
#[must_use]
pub fn inverse_park(dq: RotatingFrameCurrents, theta: Scalar) -> TwoAxisCurrents {
    let (alpha, beta) = rotate(dq.d, dq.q, theta);
    TwoAxisCurrents { alpha, beta }
}

/// Clarke followed by Park at `theta`.
#[must_use]
pub fn clarke_park(abc: ThreePhaseCurrents, theta: Scalar) -> RotatingFrameCurrents {
    let dq = park(clarke(abc), theta);
    debug!(i_a = abc.a, i_b = abc.b, i_c = abc.c, theta, i_d = dq.d, i_q = dq.q, "clarke-park");
    dq
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn balanced_reference_case_is_pure_d_axis() {
        let abc = ThreePhaseCurrents::new(10.0, -5.0, -5.0);
        assert_relative_eq!(abc.zero_sequence_sum(), 0.0);
        let ab = clarke(abc);
        assert_relative_eq!(ab.alpha, 10.0, epsilon = 1.0e-12);
        assert_relative_eq!(ab.beta, 0.0, epsilon = 1.0e-12);
        let dq = clarke_park(abc, 0.0);
        assert_relative_eq!(dq.d, 10.0, epsilon = 1.0e-12);
        assert_relative_eq!(dq.q, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn park_matches_explicit_formula() {
        let ab = TwoAxisCurrents { alpha: 3.0, beta: -1.25 };
        for k in 0..12 {
            let theta = k as Scalar * PI / 6.0;
            let dq = park(ab, theta);
            let d = ab.alpha * theta.cos() + ab.beta * theta.sin();
            let q = -ab.alpha * theta.sin() + ab.beta * theta.cos();
            assert_relative_eq!(dq.d, d, epsilon = 1.0e-12);
            assert_relative_eq!(dq.q, q, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn inverse_park_recovers_stationary_frame() {
        let ab = TwoAxisCurrents { alpha: -7.5, beta: 2.0 };
        for k in 0..=20 {
            let theta = k as Scalar * 2.0 * PI / 20.0;
            let back = inverse_park(park(ab, theta), theta);
            assert_relative_eq!(back.alpha, ab.alpha, epsilon = 1.0e-12);
            assert_relative_eq!(back.beta, ab.beta, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn inverse_clarke_recovers_balanced_set() {
        let abc = ThreePhaseCurrents::new(4.0, -1.5, -2.5);
        let back = inverse_clarke(clarke(abc));
        assert_relative_eq!(back.a, abc.a, epsilon = 1.0e-12);
        assert_relative_eq!(back.b, abc.b, epsilon = 1.0e-12);
        assert_relative_eq!(back.c, abc.c, epsilon = 1.0e-12);
    }

    #[test]
    fn zero_sequence_is_dropped() {
        let ab = clarke(ThreePhaseCurrents::new(2.0, 2.0, 2.0));
        assert_relative_eq!(ab.alpha, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(ab.beta, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn synchronous_frame_sees_constant_current() {
        // Balanced cosine set at electrical angle wt; with theta = wt the dq pair is (I, 0).
        let peak = 5.0;
        for k in 0..24 {
            let wt = k as Scalar * PI / 12.0;
            let abc = ThreePhaseCurrents::new(
                peak * wt.cos(),
                peak * (wt - 2.0 * PI / 3.0).cos(),
                peak * (wt + 2.0 * PI / 3.0).cos(),
            );
            let dq = clarke_park(abc, wt);
            assert_relative_eq!(dq.d, peak, epsilon = 1.0e-9);
            assert_relative_eq!(dq.q, 0.0, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn quarter_turn_moves_alpha_to_negative_q() {
        let dq = park(TwoAxisCurrents { alpha: 1.0, beta: 0.0 }, FRAC_PI_2);
        assert_relative_eq!(dq.d, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(dq.q, -1.0, epsilon = 1.0e-12);
    }

    #[test]
    fn latex_uses_two_decimals() {
        let dq = clarke_park(ThreePhaseCurrents::new(10.0, -5.0, -5.0), FRAC_PI_4);
        assert_eq!(dq.to_latex(), "i_d = 7.07,\\quad i_q = -7.07");
        assert_eq!(dq.to_string(), "i_d = 7.07, i_q = -7.07");
    }
}
